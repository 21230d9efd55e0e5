//! Trivia suppression flags.

use bitflags::bitflags;

bitflags! {
    /// Controls which whitespace-like tokens the scanner swallows before
    /// returning the next token.
    ///
    /// Flags combine: `SKIP_SPACE | SKIP_NEWLINE` is `SKIP_ALL`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct SkipPolicy: u8 {
        /// Consume runs of space, tab and carriage return silently.
        const SKIP_SPACE = 1 << 0;
        /// Consume runs of `\n` silently.
        const SKIP_NEWLINE = 1 << 1;
        const SKIP_ALL = Self::SKIP_SPACE.bits() | Self::SKIP_NEWLINE.bits();
    }
}

impl SkipPolicy {
    /// Every token is reported, trivia included.
    pub const NONE: Self = Self::empty();

    pub fn skips_space(self) -> bool {
        self.contains(Self::SKIP_SPACE)
    }

    pub fn skips_newline(self) -> bool {
        self.contains(Self::SKIP_NEWLINE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_none_skips_nothing() {
        assert!(!SkipPolicy::NONE.skips_space());
        assert!(!SkipPolicy::NONE.skips_newline());
    }

    #[test]
    fn test_skip_all_is_union() {
        assert_eq!(
            SkipPolicy::SKIP_SPACE | SkipPolicy::SKIP_NEWLINE,
            SkipPolicy::SKIP_ALL
        );
        assert!(SkipPolicy::SKIP_ALL.skips_space());
        assert!(SkipPolicy::SKIP_ALL.skips_newline());
    }

    #[test]
    fn test_single_flags() {
        assert!(SkipPolicy::SKIP_SPACE.skips_space());
        assert!(!SkipPolicy::SKIP_SPACE.skips_newline());
        assert!(SkipPolicy::SKIP_NEWLINE.skips_newline());
        assert!(!SkipPolicy::SKIP_NEWLINE.skips_space());
    }

    #[test]
    fn test_from_raw_bits() {
        assert_eq!(SkipPolicy::from_bits_truncate(3), SkipPolicy::SKIP_ALL);
        assert_eq!(SkipPolicy::from_bits_truncate(0xF0), SkipPolicy::NONE);
    }
}
