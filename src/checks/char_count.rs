//! CharCount check - grades the use of different chars versus length.
//!
//! Rewards variety and length jointly: a short password full of distinct
//! characters still scores below a long one.

use std::collections::HashSet;

use super::Check;
use crate::options::Options;
use crate::quality::Quality;

/// Grades a password by the number of distinct code points relative to its
/// total length.
#[derive(Debug, Clone, Default)]
pub struct CharCount {
    options: Options,
}

impl CharCount {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Check for CharCount {
    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    fn check_quality(&self, chars: &[char], length: usize) -> Quality {
        let distinct: HashSet<char> = chars.iter().copied().collect();
        let distinct_count = distinct.len();

        if distinct_count == length {
            // each password char is an other
            if length <= 7 {
                return Quality::Medium;
            }
            if length == 8 {
                return Quality::Good;
            }
            return Quality::High;
        }

        if distinct_count <= 4 {
            // up to 4 different chars
            if length <= 7 {
                return Quality::VeryBad;
            }
            if length == 8 {
                return Quality::Bad;
            }
            if length == 9 {
                return Quality::Medium;
            }
            return Quality::Good;
        }

        if distinct_count <= 6 {
            // 5-6 different chars
            if length <= 6 {
                return Quality::Bad;
            }
            if length <= 8 {
                return Quality::Medium;
            }
            return Quality::Good;
        }

        if distinct_count <= 8 {
            // 7-8 different chars
            if length <= 8 {
                return Quality::Good;
            }
            return Quality::High;
        }

        Quality::High
    }
}
