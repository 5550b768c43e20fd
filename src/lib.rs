//! Password strength validation library
//!
//! This library checks a word (usually a password candidate) against a
//! configurable set of rules and reports every rule it breaks, not just the
//! first one.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based validation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Enables `Serialize` for validation errors
//!
//! # Example
//!
//! ```rust
//! use strongword::{characters, min_length, regexp_str, validate, validate_secret};
//! use secrecy::SecretString;
//!
//! // Default rule set: min_length(8), chars_and_digits(), special_chars(1)
//! let errors = validate("weakpassword", &[]);
//! assert_eq!(errors.len(), 2);
//!
//! // Custom rule set
//! let pin = regexp_str(r"[0-9]{4}").expect("valid pattern");
//! let errors = validate("weakpassword", &[&min_length(12), &characters("+-?", 1), &pin]);
//! for err in &errors {
//!     println!("{}", err);
//! }
//!
//! // Passwords held as secrets
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! assert!(validate_secret(&password, &[]).is_empty());
//! ```

// Internal modules
mod error;
mod rules;
mod validator;

// Public API
pub use error::{CharsAndDigitsDetail, RuleError, ValidationError};
pub use rules::{
    characters, chars_and_digits, digits, min_length, regexp, regexp_str, rule_fn, runes,
    special_chars, CharsAndDigits, Digits, MinLength, Regexp, Rule, RuleFn, RuleResult, Runes,
    SpecialChars,
};
pub use validator::{default_rules, validate, validate_secret, ValidationResult};

#[cfg(feature = "async")]
pub use validator::{validate_tx, DEBOUNCE};
