//! Digits rule - checks how many ASCII digits a password contains.

use super::{Rule, RuleResult};
use crate::error::ValidationError;

/// Requires at least `min` characters in `[0-9]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits {
    min: usize,
}

impl Rule for Digits {
    fn validate(&self, word: &str) -> RuleResult {
        let count = word.chars().filter(|c| c.is_ascii_digit()).count();
        if count < self.min {
            return Some(ValidationError::Digits {
                minimum: self.min,
                provided: count,
            });
        }
        None
    }
}

/// Creates a rule requiring at least `min` digits.
pub fn digits(min: usize) -> Digits {
    Digits { min }
}
