use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use lexis_lexer::{LexerError, ScanMode, Scanner, SkipPolicy, Token};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "lexis")]
#[command(about = "Tokenize source text and report lexical errors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of a file
    Tokens {
        /// Input file, or `-` for standard input
        path: String,

        /// Trivia to suppress
        #[arg(long, value_enum, default_value_t = Skip::All)]
        skip: Skip,

        /// Treat digits as identifier characters and disable
        /// number, string and comment recognition
        #[arg(long)]
        literal: bool,

        /// Emit a JSON array instead of one line per token
        #[arg(long)]
        json: bool,
    },

    /// Scan a file to the end and report the first lexical error
    Check {
        /// Input file, or `-` for standard input
        path: String,

        #[arg(long)]
        literal: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Skip {
    None,
    Space,
    Newline,
    All,
}

impl From<Skip> for SkipPolicy {
    fn from(skip: Skip) -> Self {
        match skip {
            Skip::None => SkipPolicy::NONE,
            Skip::Space => SkipPolicy::SKIP_SPACE,
            Skip::Newline => SkipPolicy::SKIP_NEWLINE,
            Skip::All => SkipPolicy::SKIP_ALL,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Tokens {
            path,
            skip,
            literal,
            json,
        } => cmd_tokens(&path, skip.into(), mode(literal), json),
        Command::Check { path, literal } => cmd_check(&path, mode(literal)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Install a stderr subscriber, only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn mode(literal: bool) -> ScanMode {
    if literal {
        ScanMode::Literal
    } else {
        ScanMode::Full
    }
}

fn read_source(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| format!("Error reading standard input: {e}"))?;
        return Ok(source);
    }

    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Error: file not found: {path}"));
    }
    let source =
        std::fs::read_to_string(p).map_err(|e| format!("Error reading {path}: {e}"))?;
    info!(path, bytes = source.len(), "read source");
    Ok(source)
}

fn scan_all(source: &str, policy: SkipPolicy, mode: ScanMode) -> Result<Vec<Token>, LexerError> {
    Scanner::new(source).tokens(policy, mode).collect()
}

fn cmd_tokens(path: &str, policy: SkipPolicy, mode: ScanMode, json: bool) -> Result<(), String> {
    let source = read_source(path)?;
    debug!(?policy, ?mode, "scanning");
    let tokens = scan_all(&source, policy, mode).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&tokens)
            .map_err(|e| format!("Error serializing tokens: {e}"))?;
        println!("{out}");
    } else {
        for token in &tokens {
            println!("{}", format_token(token));
        }
    }
    Ok(())
}

fn cmd_check(path: &str, mode: ScanMode) -> Result<(), String> {
    let source = read_source(path)?;
    let tokens = scan_all(&source, SkipPolicy::NONE, mode).map_err(|e| e.to_string())?;
    eprintln!("OK: {path} ({} tokens)", tokens.len());
    Ok(())
}

/// `line:column  Kind  "text"`, with 1-based positions.
fn format_token(token: &Token) -> String {
    format!(
        "{}:{}\t{:?}\t{:?}",
        token.span.line + 1,
        token.span.column + 1,
        token.kind,
        token.text
    )
}
