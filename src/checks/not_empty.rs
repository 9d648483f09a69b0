//! NotEmpty check - a password can not be empty.

use super::Check;
use crate::options::Options;
use crate::quality::Quality;

/// Rejects empty passwords.
///
/// This is a pass/fail gate: [`Quality::None`] for an empty password, else
/// [`Quality::High`]. It carries no recognized options and can not be
/// disabled by the aggregator.
#[derive(Debug, Clone, Default)]
pub struct NotEmpty {
    options: Options,
}

impl NotEmpty {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Check for NotEmpty {
    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    fn check_quality(&self, _chars: &[char], length: usize) -> Quality {
        if length == 0 {
            return Quality::None;
        }

        Quality::High
    }
}
