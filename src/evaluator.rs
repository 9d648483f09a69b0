//! Password quality aggregator - runs all checks and combines their scores.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::checks::{
    Check, CharCount, CharPosition, CharType, Length, MaxLength, MinLength, NotEmpty, WordList,
};
use crate::quality::Quality;

/// Composes the individual checks into one overall password quality verdict.
///
/// The evaluation protocol:
///
/// 1. The gates NotEmpty, MinLength and MaxLength run first; any
///    [`Quality::None`] ends the evaluation with [`Quality::None`].
/// 2. If enabled, the word list check runs next; any result other than
///    [`Quality::Good`] (i.e. a word list hit) is returned as-is.
/// 3. Length, CharType and CharCount are averaged as an equal-weight bloc.
/// 4. CharPosition is folded in afterwards with damped influence: its score
///    is nudged one step toward the bloc average before joining it, so it
///    can never swing the result by more than one level.
///
/// Construction sets all options; evaluation never mutates state, so a
/// `QualityCheck` is safe to share across threads once built.
///
/// # Example
///
/// ```rust,no_run
/// use pwd_quality::{QualityCheck, Quality};
/// use secrecy::SecretString;
///
/// let check = QualityCheck::new(8, 128, true);
/// let password = SecretString::new("222233334444".to_string().into());
/// let quality = check.check_quality(&password);
/// assert!(quality <= Quality::High);
/// ```
#[derive(Debug, Clone)]
pub struct QualityCheck {
    check_not_empty: NotEmpty,
    check_min_length: MinLength,
    check_max_length: MaxLength,
    check_length: Length,
    check_char_type: CharType,
    check_char_count: CharCount,
    check_char_position: CharPosition,
    check_word_list: Option<WordList>,
}

impl QualityCheck {
    /// Creates an aggregator for one policy configuration.
    ///
    /// `min_length` and `max_length` are clamped to their accepted ranges
    /// (6-128 and 32-255). `use_word_list` enables the word list check; when
    /// disabled the check is skipped entirely, not scored.
    pub fn new(min_length: usize, max_length: usize, use_word_list: bool) -> Self {
        let mut check_min_length = MinLength::new();
        check_min_length.set_min_length(min_length);
        let mut check_max_length = MaxLength::new();
        check_max_length.set_max_length(max_length);

        QualityCheck {
            check_not_empty: NotEmpty::new(),
            check_min_length,
            check_max_length,
            check_length: Length::new(),
            check_char_type: CharType::new(),
            check_char_count: CharCount::new(),
            check_char_position: CharPosition::new(),
            check_word_list: use_word_list.then(WordList::new),
        }
    }

    /// Checks the quality of the given password.
    ///
    /// The result is always inside the 0-5 quality range, and repeated calls
    /// with the same password yield the same result.
    pub fn check_quality(&self, password: &SecretString) -> Quality {
        let chars: Vec<char> = password.expose_secret().chars().collect();
        let length = chars.len();

        if self.check_not_empty.check_quality(&chars, length) == Quality::None
            || self.check_min_length.check_quality(&chars, length) == Quality::None
            || self.check_max_length.check_quality(&chars, length) == Quality::None
        {
            return Quality::None;
        }

        if let Some(word_list) = &self.check_word_list {
            let q3 = word_list.check_quality(&chars, length);
            if q3 != Quality::Good {
                #[cfg(feature = "tracing")]
                tracing::info!("password found in word list, short-circuiting to {:?}", q3);
                return q3;
            }
        }

        let q1s = self.check_length.check_quality(&chars, length).value() as i64
            + self.check_char_type.check_quality(&chars, length).value() as i64
            + self.check_char_count.check_quality(&chars, length).value() as i64;
        let q1 = q1s / 3;

        // CharPosition joins with damped influence: one step toward the
        // consensus of the other three, then a plain average over all four.
        let mut q2 = self.check_char_position.check_quality(&chars, length).value() as i64;
        if q2 < q1 {
            q2 += 1;
        } else if q2 > q1 {
            q2 -= 1;
        }

        Quality::from_value((q1s + q2) / 4)
    }

    /// Async variant that delivers the verdict over a channel.
    ///
    /// If the token is already cancelled nothing is evaluated and nothing is
    /// sent; the receiver observes the dropped sender.
    #[cfg(feature = "async")]
    pub async fn check_quality_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<Quality>,
    ) {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::info!("quality check cancelled before evaluation");
            return;
        }

        let quality = self.check_quality(password);

        if let Err(_e) = tx.send(quality).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password quality result: {}", _e);
        }
    }

    /// The minimum length gate's configured bound.
    pub fn min_length(&self) -> usize {
        self.check_min_length.min_length()
    }

    /// The maximum length gate's configured bound.
    pub fn max_length(&self) -> usize {
        self.check_max_length.max_length()
    }

    /// Whether the word list check is enabled.
    pub fn uses_word_list(&self) -> bool {
        self.check_word_list.is_some()
    }

    /// Mutable access to the word list check, if enabled, e.g. to point it
    /// at a different list file before the first evaluation.
    pub fn word_list_mut(&mut self) -> Option<&mut WordList> {
        self.check_word_list.as_mut()
    }
}

impl Default for QualityCheck {
    fn default() -> Self {
        QualityCheck::new(8, 255, true)
    }
}
