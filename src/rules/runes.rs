//! Rune set rule - counts occurrences of characters drawn from a given set.

use super::{Rule, RuleResult};
use crate::error::ValidationError;

/// Requires at least `min` occurrences of characters from a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runes {
    runes: Vec<char>,
    min: usize,
}

impl Runes {
    /// Counts every (set entry, word character) pair that matches.
    ///
    /// Repeats in the word count once per occurrence, and so do repeats in
    /// the set: `['+', '+']` against `"a+"` yields 2.
    fn count(&self, word: &str) -> usize {
        self.runes
            .iter()
            .map(|&r| word.chars().filter(|&c| c == r).count())
            .sum()
    }
}

impl Rule for Runes {
    fn validate(&self, word: &str) -> RuleResult {
        let count = self.count(word);
        if count < self.min {
            return Some(ValidationError::Runes {
                runes: self.runes.clone(),
                minimum: self.min,
                provided: count,
            });
        }
        None
    }
}

/// Creates a rule requiring at least `min` characters from `runes`.
pub fn runes(runes: impl Into<Vec<char>>, min: usize) -> Runes {
    Runes {
        runes: runes.into(),
        min,
    }
}

/// Same as [`runes`], taking the set as the characters of a string.
pub fn characters(chars: &str, min: usize) -> Runes {
    runes(chars.chars().collect::<Vec<_>>(), min)
}
