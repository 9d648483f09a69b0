//! MinLength check - a password must use a minimal amount of characters.

use super::Check;
use crate::options::{AliasTable, OptionValue, Options};
use crate::quality::Quality;

const OPT_MIN_LENGTH: &str = "min_length";

const ALIASES: AliasTable = &[(
    OPT_MIN_LENGTH,
    &["minlength", "min_length", "min", "min_len", "minlen", "length"],
)];

/// Minimum length bound, default 8. Accepted values are clamped at set-time
/// to the inclusive range 6–128.
pub const MIN_LENGTH_RANGE: (usize, usize) = (6, 128);

/// Rejects passwords shorter than a configured minimum length.
///
/// A pass/fail gate: [`Quality::None`] below the minimum, else
/// [`Quality::High`].
#[derive(Debug, Clone)]
pub struct MinLength {
    options: Options,
}

impl MinLength {
    pub fn new() -> Self {
        let mut options = Options::new(ALIASES);
        options.set(OPT_MIN_LENGTH, OptionValue::Int(8));
        MinLength { options }
    }

    /// The configured minimum length.
    pub fn min_length(&self) -> usize {
        self.options
            .get(OPT_MIN_LENGTH)
            .and_then(OptionValue::as_int)
            .unwrap_or(8) as usize
    }

    /// Sets the minimum length, clamped to the accepted range 6–128.
    pub fn set_min_length(&mut self, value: usize) {
        let value = value.clamp(MIN_LENGTH_RANGE.0, MIN_LENGTH_RANGE.1);
        self.options.set(OPT_MIN_LENGTH, OptionValue::from(value));
    }
}

impl Default for MinLength {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for MinLength {
    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    fn set_option(&mut self, name: &str, value: OptionValue) {
        if self.options.resolves_to(name, OPT_MIN_LENGTH) {
            if let Some(v) = value.as_int() {
                self.set_min_length(v.max(0) as usize);
                return;
            }
        }
        self.options.set(name, value);
    }

    fn check_quality(&self, _chars: &[char], length: usize) -> Quality {
        if length < self.min_length() {
            return Quality::None;
        }

        Quality::High
    }
}
