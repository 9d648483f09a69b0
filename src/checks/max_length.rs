//! MaxLength check - a password can use a maximal amount of characters.
//!
//! There is no problem with accepting long passwords, they are more secure,
//! so the accepted upper bound goes up to 255.

use super::Check;
use crate::options::{AliasTable, OptionValue, Options};
use crate::quality::Quality;

const OPT_MAX_LENGTH: &str = "max_length";

const ALIASES: AliasTable = &[(
    OPT_MAX_LENGTH,
    &["maxlength", "max_length", "max", "max_len", "maxlen", "length"],
)];

/// Maximum length bound, default 128. Accepted values are clamped at
/// set-time to the inclusive range 32–255.
pub const MAX_LENGTH_RANGE: (usize, usize) = (32, 255);

/// Rejects passwords longer than a configured maximum length.
///
/// A pass/fail gate: [`Quality::None`] above the maximum, else
/// [`Quality::High`].
#[derive(Debug, Clone)]
pub struct MaxLength {
    options: Options,
}

impl MaxLength {
    pub fn new() -> Self {
        let mut options = Options::new(ALIASES);
        options.set(OPT_MAX_LENGTH, OptionValue::Int(128));
        MaxLength { options }
    }

    /// The configured maximum length.
    pub fn max_length(&self) -> usize {
        self.options
            .get(OPT_MAX_LENGTH)
            .and_then(OptionValue::as_int)
            .unwrap_or(128) as usize
    }

    /// Sets the maximum length, clamped to the accepted range 32–255.
    pub fn set_max_length(&mut self, value: usize) {
        let value = value.clamp(MAX_LENGTH_RANGE.0, MAX_LENGTH_RANGE.1);
        self.options.set(OPT_MAX_LENGTH, OptionValue::from(value));
    }
}

impl Default for MaxLength {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for MaxLength {
    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    fn set_option(&mut self, name: &str, value: OptionValue) {
        if self.options.resolves_to(name, OPT_MAX_LENGTH) {
            if let Some(v) = value.as_int() {
                self.set_max_length(v.max(0) as usize);
                return;
            }
        }
        self.options.set(name, value);
    }

    fn check_quality(&self, _chars: &[char], length: usize) -> Quality {
        if length > self.max_length() {
            return Quality::None;
        }

        Quality::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(check: &MaxLength, password: &str) -> Quality {
        let chars: Vec<char> = password.chars().collect();
        let len = chars.len();
        check.check_quality(&chars, len)
    }

    #[test]
    fn test_default_maximum_is_128() {
        let max = MaxLength::new();
        assert_eq!(max.max_length(), 128);
        assert_eq!(check(&max, &"a".repeat(128)), Quality::High);
        assert_eq!(check(&max, &"a".repeat(129)), Quality::None);
    }

    #[test]
    fn test_set_max_length_clamps_low() {
        let mut max = MaxLength::new();
        max.set_max_length(10);
        assert_eq!(max.max_length(), 32);
    }

    #[test]
    fn test_set_max_length_clamps_high() {
        let mut max = MaxLength::new();
        max.set_max_length(9999);
        assert_eq!(max.max_length(), 255);
    }

    #[test]
    fn test_set_option_via_alias_clamps() {
        let mut max = MaxLength::new();
        max.set_option("MaxLen", OptionValue::Int(4));
        assert_eq!(max.max_length(), 32);

        max.set_option("max", OptionValue::Int(64));
        assert_eq!(max.max_length(), 64);
    }

    #[test]
    fn test_at_boundary_passes() {
        let mut max = MaxLength::new();
        max.set_max_length(32);
        assert_eq!(check(&max, &"x".repeat(32)), Quality::High);
        assert_eq!(check(&max, &"x".repeat(33)), Quality::None);
    }
}
