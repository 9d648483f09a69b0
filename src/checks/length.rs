//! Length check - grades the quality of a password by its length.
//!
//! 0-4 chars => None
//! 5 chars   => VeryBad
//! 6-7 chars => Bad
//! 8 chars   => Medium
//! 9 chars   => Good
//! >9 chars  => High

use super::Check;
use crate::options::Options;
use crate::quality::Quality;

/// Grades password length on fixed thresholds.
#[derive(Debug, Clone, Default)]
pub struct Length {
    options: Options,
}

impl Length {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Check for Length {
    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    fn check_quality(&self, _chars: &[char], length: usize) -> Quality {
        if length < 5 {
            // 0-4 chars
            return Quality::None;
        }

        if length < 6 {
            // 5 chars
            return Quality::VeryBad;
        }

        if length < 8 {
            // 6-7 chars
            return Quality::Bad;
        }

        if length < 9 {
            // 8 chars
            return Quality::Medium;
        }

        if length < 10 {
            // 9 chars
            return Quality::Good;
        }

        // > 9 chars
        Quality::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(length: usize) -> Quality {
        let chars: Vec<char> = "x".repeat(length).chars().collect();
        Length::new().check_quality(&chars, length)
    }

    #[test]
    fn test_length_bands() {
        assert_eq!(check(0), Quality::None);
        assert_eq!(check(4), Quality::None);
        assert_eq!(check(5), Quality::VeryBad);
        assert_eq!(check(6), Quality::Bad);
        assert_eq!(check(7), Quality::Bad);
        assert_eq!(check(8), Quality::Medium);
        assert_eq!(check(9), Quality::Good);
        assert_eq!(check(10), Quality::High);
        assert_eq!(check(64), Quality::High);
    }
}
