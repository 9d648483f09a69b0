//! CharType check - grades the variety of character types in use.
//!
//! Each category contributes to a weighted sum the first time it is seen:
//!
//! - lower case letters (1.0 points)
//! - upper case letters (1.0 points)
//! - numbers            (1.0 points)
//! - .,-_|!$/=?         (1.5 points)
//! - all other chars    (2.0 points)
//!
//! A summary of 4.5 points or higher means this is highest quality.

use super::Check;
use crate::options::Options;
use crate::quality::Quality;

const LOWER_CHARS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ü', 'ß',
];

const UPPER_CHARS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ü',
];

const DIGIT_CHARS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const PUNCT_CHARS: &[char] = &['.', ',', '-', '_', '|', '!', '$', '/', '=', '?'];

/// Grades a password by the number of distinct character categories in use,
/// with rarer categories weighted more heavily.
#[derive(Debug, Clone, Default)]
pub struct CharType {
    options: Options,
}

impl CharType {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Check for CharType {
    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    fn check_quality(&self, chars: &[char], _length: usize) -> Quality {
        let mut summary = 0.0_f64;
        let mut type_count = 0_u8;
        let mut seen_lower = false;
        let mut seen_upper = false;
        let mut seen_digit = false;
        let mut seen_punct = false;
        let mut seen_other = false;

        for &c in chars {
            if LOWER_CHARS.contains(&c) {
                if seen_lower {
                    continue;
                }
                type_count += 1;
                seen_lower = true;
                summary += 1.0;
                continue;
            }

            if UPPER_CHARS.contains(&c) {
                if seen_upper {
                    continue;
                }
                type_count += 1;
                seen_upper = true;
                summary += 1.0;
                continue;
            }

            if DIGIT_CHARS.contains(&c) {
                if seen_digit {
                    continue;
                }
                type_count += 1;
                seen_digit = true;
                summary += 1.0;
                continue;
            }

            if PUNCT_CHARS.contains(&c) {
                if seen_punct {
                    continue;
                }
                type_count += 1;
                seen_punct = true;
                summary += 1.5;
                continue;
            }

            if seen_other {
                continue;
            }
            type_count += 1;
            seen_other = true;
            summary += 2.0;
        }

        if summary > 4.4 {
            return Quality::High;
        }

        if seen_other {
            // Some very special chars are used (fine!)
            if seen_punct {
                // And also often used non alphanumeric chars are used
                if summary > 4.5 {
                    return Quality::High;
                }
                if summary > 3.5 {
                    return Quality::Good;
                }
                return Quality::Medium;
            }

            // And NO often used non alphanumeric chars are used
            if type_count == 4 {
                return Quality::High;
            }
            if type_count == 3 {
                return Quality::Good;
            }
            if type_count == 2 {
                return Quality::Medium;
            }
            return Quality::Bad;
        }

        if seen_punct {
            // Often used non alphanumeric chars are used
            if summary > 4.4 {
                return Quality::High;
            }
            if summary > 3.4 {
                return Quality::Good;
            }
            if summary > 2.4 {
                return Quality::Medium;
            }
            return Quality::Bad;
        }

        // Only letters and/or digits
        if summary > 2.9 {
            return Quality::Medium;
        }

        if summary > 1.9 {
            return Quality::Bad;
        }

        Quality::VeryBad
    }
}
