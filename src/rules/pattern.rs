//! Regular expression rule.

use regex::Regex;

use super::{Rule, RuleResult};
use crate::error::{RuleError, ValidationError};

/// Requires the word to match a regular expression somewhere.
///
/// Matching is a search, not a full match; anchor the pattern with `^...$`
/// to constrain the whole word.
#[derive(Debug, Clone)]
pub struct Regexp {
    expr: Regex,
}

impl Regexp {
    pub fn as_regex(&self) -> &Regex {
        &self.expr
    }
}

impl Rule for Regexp {
    fn validate(&self, word: &str) -> RuleResult {
        if !self.expr.is_match(word) {
            return Some(ValidationError::Regexp {
                pattern: self.expr.as_str().to_string(),
            });
        }
        None
    }
}

/// Creates a rule from a compiled regular expression.
///
/// Failures report `expr.as_str()`, which omits flags set through
/// [`regex::RegexBuilder`]. Write flags inline (`(?i)abc`) to keep them in
/// the reported pattern.
pub fn regexp(expr: Regex) -> Regexp {
    Regexp { expr }
}

/// Compiles `pattern` and creates a rule from it.
///
/// # Errors
///
/// Returns [`RuleError::InvalidPattern`] if the pattern does not compile.
///
/// # Example
///
/// ```rust
/// use strongword::{regexp_str, Rule};
///
/// let rule = regexp_str(r"[0-9]{4}").unwrap();
/// assert!(rule.validate("pin1234").is_none());
/// assert!(regexp_str("(unclosed").is_err());
/// ```
pub fn regexp_str(pattern: &str) -> Result<Regexp, RuleError> {
    let expr = Regex::new(pattern).map_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Regexp rule construction FAILED: {}", e);
        RuleError::from(e)
    })?;
    Ok(regexp(expr))
}
