//! Password quality estimation library
//!
//! Estimates the strength of a candidate password on a fixed six-level
//! ordinal scale ([`Quality`]), using a set of independent heuristic checks
//! whose scores are combined into one overall verdict. This is a
//! deterministic, rule-based classifier for quick, explainable feedback,
//! not a cryptographic strength estimator.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation with cancellation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWQ_WORDLIST_PATH`: Custom path to the word list file
//!   (default: `./assets/wordlist.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_quality::{init_wordlist, QualityCheck};
//! use secrecy::SecretString;
//!
//! // Load the word list of known weak passwords (call once at startup)
//! init_wordlist().expect("Failed to load word list");
//!
//! let check = QualityCheck::new(8, 128, true);
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let quality = check.check_quality(&password);
//!
//! println!("Quality: {:?} ({})", quality, quality.value());
//! ```

// Internal modules
mod evaluator;
mod options;
mod quality;
mod wordlist;

pub mod checks;

// Public API
pub use evaluator::QualityCheck;
pub use options::{OptionValue, Options};
pub use quality::Quality;
pub use wordlist::{
    get_wordlist, init_wordlist, init_wordlist_from_path, is_listed, wordlist_path, WordListError,
};
