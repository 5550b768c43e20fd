//! Password validation rules
//!
//! Each rule checks one aspect of password strength and reports at most one
//! [`ValidationError`].

mod digits;
mod length;
mod pattern;
mod runes;
mod special;
mod variety;

pub use digits::{digits, Digits};
pub use length::{min_length, MinLength};
pub use pattern::{regexp, regexp_str, Regexp};
pub use runes::{characters, runes, Runes};
pub use special::{special_chars, SpecialChars};
pub use variety::{chars_and_digits, CharsAndDigits};

use crate::error::ValidationError;

/// Result type for rule evaluation.
/// - `Some(err)` - Rule failed
/// - `None` - Rule passed
pub type RuleResult = Option<ValidationError>;

/// A single password strength rule.
///
/// Rules are pure: the outcome depends only on the word and the
/// configuration captured when the rule was built.
pub trait Rule: Send + Sync {
    fn validate(&self, word: &str) -> RuleResult;
}

impl<R: Rule + ?Sized> Rule for &R {
    fn validate(&self, word: &str) -> RuleResult {
        (**self).validate(word)
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn validate(&self, word: &str) -> RuleResult {
        (**self).validate(word)
    }
}

/// Adapts a plain function into a [`Rule`].
#[derive(Clone, Copy)]
pub struct RuleFn<F>(F);

impl<F> Rule for RuleFn<F>
where
    F: Fn(&str) -> RuleResult + Send + Sync,
{
    fn validate(&self, word: &str) -> RuleResult {
        (self.0)(word)
    }
}

/// Wraps a closure as a [`Rule`].
///
/// # Example
///
/// ```rust
/// use strongword::{rule_fn, validate, ValidationError};
///
/// let no_spaces = rule_fn(|word: &str| {
///     word.contains(' ').then(|| ValidationError::Custom {
///         message: "must not contain spaces".to_string(),
///     })
/// });
///
/// assert_eq!(validate("no spaces here", &[&no_spaces]).len(), 1);
/// assert!(validate("nospaces", &[&no_spaces]).is_empty());
/// ```
pub fn rule_fn<F>(f: F) -> RuleFn<F>
where
    F: Fn(&str) -> RuleResult + Send + Sync,
{
    RuleFn(f)
}
