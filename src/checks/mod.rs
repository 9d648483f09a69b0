//! Password quality checks
//!
//! Each check scores one aspect of a password on the [`Quality`] scale.
//! They share the option surface through the [`Check`] trait; scoring is a
//! pure function of the code points and never mutates configuration.

mod char_count;
mod char_position;
mod char_type;
mod length;
mod max_length;
mod min_length;
mod not_empty;
mod word_list;

pub use char_count::CharCount;
pub use char_position::CharPosition;
pub use char_type::CharType;
pub use length::Length;
pub use max_length::MaxLength;
pub use min_length::MinLength;
pub use not_empty::NotEmpty;
pub use word_list::WordList;

use std::collections::BTreeMap;

use crate::options::{OptionValue, Options};
use crate::quality::Quality;

/// A single password quality check.
///
/// `chars` is the password split into Unicode code points and `length` their
/// count (code points, not bytes). The returned value is always inside the
/// 0–5 quality range.
pub trait Check {
    /// The option map backing this check.
    fn options(&self) -> &Options;

    /// Mutable access to the option map, for (re)configuration only.
    fn options_mut(&mut self) -> &mut Options;

    /// Scores the password.
    fn check_quality(&self, chars: &[char], length: usize) -> Quality;

    /// Gets the value of the option with the given name or alias.
    fn get_option(&self, name: &str) -> Option<&OptionValue> {
        self.options().get(name)
    }

    /// Sets an option by name or alias. Checks with validated options
    /// override this to clamp values at set-time.
    fn set_option(&mut self, name: &str, value: OptionValue) {
        self.options_mut().set(name, value);
    }

    /// All currently declared options.
    fn get_options(&self) -> &BTreeMap<String, OptionValue> {
        self.options().all()
    }

    /// The names of all currently declared options.
    fn option_names(&self) -> Vec<&str> {
        self.options().names()
    }

    /// Whether an option with the given name or alias is declared.
    fn option_exists(&self, name: &str) -> bool {
        self.options().exists(name)
    }
}
