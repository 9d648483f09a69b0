//! WordList check - rejects passwords known from a word list.
//!
//! The password is lowercased (Unicode-aware) and tested for exact
//! membership in the word list of known weak passwords. A hit is a strong
//! negative signal and scores [`Quality::VeryBad`]; a miss scores
//! [`Quality::Good`], which the aggregator reads as "no information" rather
//! than "safe" (deliberately not [`Quality::High`] - the later weighted
//! average must still be able to pull a weak password down).

use std::path::{Path, PathBuf};

use super::Check;
use crate::options::{AliasTable, OptionValue, Options};
use crate::quality::Quality;
use crate::wordlist;

const OPT_LIST_FILE: &str = "list_file";

const ALIASES: AliasTable = &[(
    OPT_LIST_FILE,
    &["listfile", "list_file", "file", "wordlist", "wordlistfile", "wordlist_file"],
)];

/// Tests a password for exact, case-normalized membership in the word list.
#[derive(Debug, Clone)]
pub struct WordList {
    options: Options,
}

impl WordList {
    pub fn new() -> Self {
        let mut options = Options::new(ALIASES);
        options.set(OPT_LIST_FILE, OptionValue::Path(wordlist::wordlist_path()));
        WordList { options }
    }

    /// The configured word list file path.
    pub fn list_file(&self) -> PathBuf {
        self.options
            .get(OPT_LIST_FILE)
            .and_then(OptionValue::as_path)
            .cloned()
            .unwrap_or_else(wordlist::wordlist_path)
    }

    /// Sets the word list file path. A path that does not exist is silently
    /// ignored and the previous value kept.
    pub fn set_list_file<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        if !path.exists() {
            return;
        }
        self.options
            .set(OPT_LIST_FILE, OptionValue::Path(path.to_path_buf()));
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for WordList {
    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    fn set_option(&mut self, name: &str, value: OptionValue) {
        if self.options.resolves_to(name, OPT_LIST_FILE) {
            match value {
                OptionValue::Path(p) => return self.set_list_file(p),
                OptionValue::Str(s) => return self.set_list_file(s),
                OptionValue::Int(_) => {}
            }
        }
        self.options.set(name, value);
    }

    fn check_quality(&self, chars: &[char], _length: usize) -> Quality {
        if !wordlist::is_initialized() {
            // Lazy load from the configured path; an unavailable word list
            // degrades this check to "no information" instead of failing
            // the whole aggregation.
            if wordlist::init_wordlist_from_path(self.list_file()).is_err() {
                #[cfg(feature = "tracing")]
                tracing::error!(
                    "Word list unavailable at {:?}, skipping word list check",
                    self.list_file()
                );
                return Quality::Good;
            }
        }

        let password: String = chars.iter().collect();

        if wordlist::is_listed(&password) {
            return Quality::VeryBad;
        }

        Quality::Good
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    fn check(word_list: &WordList, password: &str) -> Quality {
        let chars: Vec<char> = password.chars().collect();
        let len = chars.len();
        word_list.check_quality(&chars, len)
    }

    #[test]
    #[serial]
    fn test_listed_password_is_very_bad() {
        crate::wordlist::reset_wordlist_for_testing();
        let temp_file = setup_with_tempfile(&["password", "123456", "qwerty"]);
        let _ = crate::wordlist::init_wordlist_from_path(temp_file.path());

        let word_list = WordList::new();
        assert_eq!(check(&word_list, "password"), Quality::VeryBad);
    }

    #[test]
    #[serial]
    fn test_lookup_is_case_insensitive() {
        crate::wordlist::reset_wordlist_for_testing();
        let temp_file = setup_with_tempfile(&["password"]);
        let _ = crate::wordlist::init_wordlist_from_path(temp_file.path());

        let word_list = WordList::new();
        assert_eq!(check(&word_list, "Password"), Quality::VeryBad);
        assert_eq!(check(&word_list, "PASSWORD"), Quality::VeryBad);
    }

    #[test]
    #[serial]
    fn test_unlisted_password_is_good_not_high() {
        crate::wordlist::reset_wordlist_for_testing();
        let temp_file = setup_with_tempfile(&["password"]);
        let _ = crate::wordlist::init_wordlist_from_path(temp_file.path());

        let word_list = WordList::new();
        assert_eq!(check(&word_list, "correcthorsebatterystaple"), Quality::Good);
    }

    #[test]
    #[serial]
    fn test_lazy_load_from_configured_path() {
        crate::wordlist::reset_wordlist_for_testing();
        let temp_file = setup_with_tempfile(&["letmein"]);

        let mut word_list = WordList::new();
        word_list.set_list_file(temp_file.path());

        assert_eq!(check(&word_list, "LetMeIn"), Quality::VeryBad);
    }

    #[test]
    #[serial]
    fn test_unavailable_list_scores_good() {
        crate::wordlist::reset_wordlist_for_testing();

        let mut word_list = WordList::new();
        // point the stored option at a path that is gone by check time
        word_list
            .options_mut()
            .set(OPT_LIST_FILE, OptionValue::Path("/nonexistent/words.txt".into()));

        assert_eq!(check(&word_list, "password"), Quality::Good);
    }

    #[test]
    #[serial]
    fn test_set_list_file_ignores_missing_path() {
        let mut word_list = WordList::new();
        let before = word_list.list_file();
        word_list.set_list_file("/nonexistent/words.txt");
        assert_eq!(word_list.list_file(), before);
    }

    #[test]
    #[serial]
    fn test_set_option_alias_sets_list_file() {
        let temp_file = setup_with_tempfile(&["admin"]);
        let mut word_list = WordList::new();
        word_list.set_option(
            "WordListFile",
            OptionValue::Path(temp_file.path().to_path_buf()),
        );
        assert_eq!(word_list.list_file(), temp_file.path().to_path_buf());
    }
}
