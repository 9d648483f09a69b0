//! CharPosition check - grades each character by how rare it is.
//!
//! Every code point is looked up in three fixed reference sets of
//! increasing rarity:
//!
//! - 1234567890abcdefxyz         => Bad
//! - ABCDEFghijqrstuvw           => Medium
//! - GHIJkKlLmMnNoOpPQRSTUVW.-_  => Good
//! - all other                   => High
//!
//! The per-character contributions (quality ordinals) are summed and divided
//! by the password length, truncating toward zero. Set membership is an
//! exact value match; the sets mix cases deliberately and are never
//! case-folded.

use super::Check;
use crate::options::Options;
use crate::quality::Quality;

const CHAR_RANGES: [&[char]; 3] = [
    &['1', '2', '3', '8', '9', '0', 'a', 'b', 'c', 'd', 'e', 'f', 'x', 'y', 'z'],
    &['A', 'B', 'C', 'D', 'E', 'F', 'g', 'h', 'i', 'j', 'q', 'r', 's', 't', 'u', 'v', 'w'],
    &[
        'G', 'H', 'I', 'J', 'k', 'K', 'l', 'L', 'm', 'M', 'n', 'N', 'o', 'O', 'p', 'P', 'Q',
        'R', 'S', 'T', 'U', 'V', 'W', '.', '-', '_',
    ],
];

const fn range_quality(index: usize) -> Quality {
    match index {
        0 => Quality::Bad,
        1 => Quality::Medium,
        2 => Quality::Good,
        _ => Quality::High,
    }
}

/// Grades a password by the average rarity of its characters.
#[derive(Debug, Clone, Default)]
pub struct CharPosition {
    options: Options,
}

impl CharPosition {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Check for CharPosition {
    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    fn check_quality(&self, chars: &[char], length: usize) -> Quality {
        if length == 0 {
            // keeps the division total; the NotEmpty gate makes this
            // unreachable through the aggregator
            return Quality::None;
        }

        let mut summary = 0_u64;

        for c in chars {
            let index = CHAR_RANGES
                .iter()
                .position(|range| range.contains(c))
                .unwrap_or(3);
            summary += range_quality(index).value() as u64;
        }

        Quality::from_value((summary / length as u64) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(password: &str) -> Quality {
        let chars: Vec<char> = password.chars().collect();
        let len = chars.len();
        CharPosition::new().check_quality(&chars, len)
    }

    #[test]
    fn test_uniform_passwords_score_their_set() {
        assert_eq!(check("123890"), Quality::Bad);
        assert_eq!(check("ABCDEF"), Quality::Medium);
        assert_eq!(check("GHIJ.-_"), Quality::Good);
        assert_eq!(check("@@@@"), Quality::High);
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        // 'g' sits in the middle set, 'G' in the rare set
        assert_eq!(check("gggg"), Quality::Medium);
        assert_eq!(check("GGGG"), Quality::Good);
        // 'x' is common, 'X' is in no set at all
        assert_eq!(check("xxxx"), Quality::Bad);
        assert_eq!(check("XXXX"), Quality::High);
    }

    #[test]
    fn test_average_truncates_toward_zero() {
        // Bad(2) + Good(4) = 6 / 2 = 3
        assert_eq!(check("aG"), Quality::Medium);
        // Bad(2) + High(5) = 7 / 2 = 3 (3.5 truncated)
        assert_eq!(check("a@"), Quality::Medium);
        // Bad(2) + Bad(2) + High(5) = 9 / 3 = 3
        assert_eq!(check("ab@"), Quality::Medium);
    }

    #[test]
    fn test_empty_input_is_none() {
        assert_eq!(check(""), Quality::None);
    }
}
