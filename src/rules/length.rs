//! Length rule - checks password minimum length.

use super::{Rule, RuleResult};
use crate::error::ValidationError;

/// Requires at least `min` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLength {
    min: usize,
}

impl Rule for MinLength {
    fn validate(&self, word: &str) -> RuleResult {
        // Characters, not bytes: "pässwörd" is 8 long.
        let len = word.chars().count();
        if len < self.min {
            return Some(ValidationError::MinLength {
                min_length: self.min,
                provided_length: len,
            });
        }
        None
    }
}

/// Creates a rule requiring the word to be at least `min` characters long.
pub fn min_length(min: usize) -> MinLength {
    MinLength { min }
}
