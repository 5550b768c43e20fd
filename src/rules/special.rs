//! Special characters rule.
//!
//! Anything outside `[a-z0-9]` counts as special. The class is case-sensitive,
//! so uppercase letters count too.

use super::{Rule, RuleResult};
use crate::error::ValidationError;

/// Requires at least `min` characters outside `[a-z0-9]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialChars {
    min: usize,
}

fn is_special(c: char) -> bool {
    !(c.is_ascii_lowercase() || c.is_ascii_digit())
}

impl Rule for SpecialChars {
    fn validate(&self, word: &str) -> RuleResult {
        let count = word.chars().filter(|&c| is_special(c)).count();
        if count < self.min {
            return Some(ValidationError::SpecialChars {
                minimum: self.min,
                provided: count,
            });
        }
        None
    }
}

/// Creates a rule requiring at least `min` special characters.
pub fn special_chars(min: usize) -> SpecialChars {
    SpecialChars { min }
}
