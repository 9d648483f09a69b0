//! Per-check option storage with case-insensitive name aliasing.
//!
//! Every check carries an [`Options`] map (composition, not inheritance).
//! Recognized option names have aliases ("max", "maxlen" and "maxlength" all
//! mean the maximum-length bound); unrecognized names are stored verbatim.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// A single configuration value for a check option.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// An integer option, e.g. a length bound.
    Int(i64),
    /// A free-form string option.
    Str(String),
    /// A filesystem path option, e.g. a word list location.
    Path(PathBuf),
}

impl OptionValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptionValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&PathBuf> {
        match self {
            OptionValue::Path(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<usize> for OptionValue {
    fn from(value: usize) -> Self {
        OptionValue::Int(value as i64)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<PathBuf> for OptionValue {
    fn from(value: PathBuf) -> Self {
        OptionValue::Path(value)
    }
}

/// Alias table entry: a canonical option name plus its accepted spellings.
/// Alias matching is case-insensitive; the canonical name itself always
/// resolves to itself.
pub type AliasTable = &'static [(&'static str, &'static [&'static str])];

/// Shared option map used by every check.
#[derive(Debug, Clone, Default)]
pub struct Options {
    values: BTreeMap<String, OptionValue>,
    aliases: AliasTable,
}

impl Options {
    /// Creates an empty option map with the given alias table.
    pub(crate) fn new(aliases: AliasTable) -> Self {
        Options {
            values: BTreeMap::new(),
            aliases,
        }
    }

    /// Resolves an option name (or any recognized alias of it, matched
    /// case-insensitively) to its canonical name. Returns `None` when the
    /// name is not a recognized option of this check.
    pub fn canonical(&self, name: &str) -> Option<&'static str> {
        let lowered = name.to_lowercase();
        for &(canonical, aliases) in self.aliases {
            if canonical.eq_ignore_ascii_case(&lowered)
                || aliases.iter().any(|&a| a == lowered)
            {
                return Some(canonical);
            }
        }
        None
    }

    /// Returns whether `name` resolves to the given canonical option.
    pub(crate) fn resolves_to(&self, name: &str, canonical: &str) -> bool {
        self.canonical(name) == Some(canonical)
    }

    /// Gets an option value by name or alias.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        let key = self.canonical(name).map(str::to_string);
        self.values.get(key.as_deref().unwrap_or(name))
    }

    /// Sets an option by name or alias. Unrecognized names are stored as-is.
    pub fn set(&mut self, name: &str, value: OptionValue) {
        let key = self
            .canonical(name)
            .map(str::to_string)
            .unwrap_or_else(|| name.to_string());
        self.values.insert(key, value);
    }

    /// All currently declared options, keyed by canonical name.
    pub fn all(&self) -> &BTreeMap<String, OptionValue> {
        &self.values
    }

    /// The names of all currently declared options.
    pub fn names(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    /// Whether an option with the given name (or alias) is declared.
    pub fn exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_ALIASES: AliasTable =
        &[("max_length", &["maxlength", "max_length", "max", "max_len", "maxlen"])];

    fn options_with_max() -> Options {
        let mut opts = Options::new(TEST_ALIASES);
        opts.set("max_length", OptionValue::Int(128));
        opts
    }

    #[test]
    fn test_alias_resolution_case_insensitive() {
        let opts = options_with_max();
        assert_eq!(opts.canonical("MAX"), Some("max_length"));
        assert_eq!(opts.canonical("MaxLen"), Some("max_length"));
        assert_eq!(opts.canonical("maxlength"), Some("max_length"));
        assert_eq!(opts.canonical("max_length"), Some("max_length"));
        assert_eq!(opts.canonical("minlength"), None);
    }

    #[test]
    fn test_get_through_alias() {
        let opts = options_with_max();
        assert_eq!(opts.get("MAXLEN"), Some(&OptionValue::Int(128)));
        assert_eq!(opts.get("max"), Some(&OptionValue::Int(128)));
        assert_eq!(opts.get("unknown"), None);
    }

    #[test]
    fn test_set_through_alias_updates_canonical() {
        let mut opts = options_with_max();
        opts.set("Max", OptionValue::Int(64));
        assert_eq!(opts.get("max_length"), Some(&OptionValue::Int(64)));
        assert_eq!(opts.names(), vec!["max_length"]);
    }

    #[test]
    fn test_unrecognized_names_stored_verbatim() {
        let mut opts = options_with_max();
        opts.set("custom", OptionValue::Str("hello".into()));
        assert!(opts.exists("custom"));
        assert_eq!(
            opts.get("custom").and_then(OptionValue::as_str),
            Some("hello")
        );
        assert_eq!(opts.names(), vec!["custom", "max_length"]);
    }

    #[test]
    fn test_option_value_accessors() {
        assert_eq!(OptionValue::Int(5).as_int(), Some(5));
        assert_eq!(OptionValue::Int(5).as_str(), None);
        assert_eq!(OptionValue::from("x").as_str(), Some("x"));
        let path = OptionValue::from(PathBuf::from("/tmp/words.txt"));
        assert_eq!(path.as_path(), Some(&PathBuf::from("/tmp/words.txt")));
    }
}
