//! Letters and digits rule - requires at least one of each.

use super::{Rule, RuleResult};
use crate::error::{CharsAndDigitsDetail, ValidationError};

/// Requires at least one ASCII letter and one ASCII digit.
///
/// Letters are checked first; a word missing both reports only the
/// missing letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharsAndDigits;

impl Rule for CharsAndDigits {
    fn validate(&self, word: &str) -> RuleResult {
        if !word.chars().any(|c| c.is_ascii_alphabetic()) {
            return Some(ValidationError::CharsAndDigits {
                detail: CharsAndDigitsDetail::NoCharacters,
            });
        }
        if !word.chars().any(|c| c.is_ascii_digit()) {
            return Some(ValidationError::CharsAndDigits {
                detail: CharsAndDigitsDetail::NoDigits,
            });
        }
        None
    }
}

/// Creates a rule requiring at least one letter and one digit.
pub fn chars_and_digits() -> CharsAndDigits {
    CharsAndDigits
}
