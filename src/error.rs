//! Validation and rule construction errors.

use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A single rule violation.
///
/// Each variant carries the facts needed to explain the failure, so callers
/// can render their own messages instead of parsing [`Display`](fmt::Display) output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ValidationError {
    #[error("minimum length is {min_length} characters, only {provided_length} provided")]
    MinLength {
        min_length: usize,
        provided_length: usize,
    },
    #[error("must contain at least {minimum} digits, but does only contain {provided}")]
    Digits { minimum: usize, provided: usize },
    #[error(
        "must contain at least {minimum} special characters, but does only contain {provided}"
    )]
    SpecialChars { minimum: usize, provided: usize },
    #[error("must contain at least {minimum} of any of {runes:?}, but does only contain {provided}")]
    Runes {
        runes: Vec<char>,
        minimum: usize,
        provided: usize,
    },
    #[error("does not match against {pattern}")]
    Regexp { pattern: String },
    #[error("{detail}")]
    CharsAndDigits { detail: CharsAndDigitsDetail },
    /// Raised by caller-defined rules built with [`rule_fn`](crate::rule_fn).
    #[error("{message}")]
    Custom { message: String },
}

/// Which half of the letters-and-digits requirement was missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CharsAndDigitsDetail {
    NoCharacters,
    NoDigits,
}

impl CharsAndDigitsDetail {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharsAndDigitsDetail::NoCharacters => "no characters provided",
            CharsAndDigitsDetail::NoDigits => "no digits provided",
        }
    }
}

impl fmt::Display for CharsAndDigitsDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Faults raised while building a rule, never while evaluating one.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),
}
