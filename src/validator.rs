//! Password validator - runs a word through a rule sequence.

use std::sync::LazyLock;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::ValidationError;
use crate::rules::{chars_and_digits, min_length, special_chars, Rule};

/// Every violated rule, in rule order. Empty means the word passed.
pub type ValidationResult = Vec<ValidationError>;

/// Time [`validate_tx`] waits before evaluating, so superseded input can be cancelled.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

static DEFAULT_RULES: LazyLock<Vec<Box<dyn Rule>>> = LazyLock::new(|| {
    let rules: Vec<Box<dyn Rule>> = vec![
        Box::new(min_length(8)),
        Box::new(chars_and_digits()),
        Box::new(special_chars(1)),
    ];
    rules
});

/// Rules used when none are provided:
/// `min_length(8)`, `chars_and_digits()`, `special_chars(1)`.
pub fn default_rules() -> &'static [Box<dyn Rule>] {
    &DEFAULT_RULES
}

/// Validates `word` against `rules`, falling back to [`default_rules`] when
/// `rules` is empty.
///
/// Every rule runs; a failure never stops the remaining rules.
///
/// # Example
///
/// ```rust
/// use strongword::{digits, min_length, validate, ValidationError};
///
/// // Default rule set
/// assert!(validate("secret123*", &[]).is_empty());
///
/// // Custom rule set
/// let errors = validate("weak1", &[&min_length(6), &digits(2)]);
/// assert_eq!(
///     errors,
///     vec![
///         ValidationError::MinLength { min_length: 6, provided_length: 5 },
///         ValidationError::Digits { minimum: 2, provided: 1 },
///     ]
/// );
/// ```
pub fn validate(word: &str, rules: &[&dyn Rule]) -> ValidationResult {
    validate_rules(word, rules)
}

/// Same as [`validate`], for a password kept in a [`SecretString`].
pub fn validate_secret(password: &SecretString, rules: &[&dyn Rule]) -> ValidationResult {
    validate_rules(password.expose_secret(), rules)
}

fn validate_rules<R: Rule>(word: &str, rules: &[R]) -> ValidationResult {
    if rules.is_empty() {
        run(word, default_rules())
    } else {
        run(word, rules)
    }
}

fn run<R: Rule>(word: &str, rules: &[R]) -> ValidationResult {
    let errors: ValidationResult = rules.iter().filter_map(|rule| rule.validate(word)).collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        rules = rules.len(),
        failures = errors.len(),
        "password validated"
    );

    errors
}

/// Async version that sends the validation result via channel.
///
/// Waits [`DEBOUNCE`] first. If `token` is cancelled before evaluation
/// starts, nothing is sent and the task returns without waiting out the delay.
#[cfg(feature = "async")]
pub async fn validate_tx(
    password: SecretString,
    rules: Vec<Box<dyn Rule>>,
    token: CancellationToken,
    tx: mpsc::Sender<ValidationResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("validation cancelled");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let result = validate_rules(password.expose_secret(), &rules);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CharsAndDigitsDetail;
    use crate::rules::{characters, digits, regexp_str, rule_fn};

    #[test]
    fn test_validate_default_rules_missing_special() {
        let errors = validate("secret12345678", &[]);
        assert_eq!(
            errors,
            vec![ValidationError::SpecialChars {
                minimum: 1,
                provided: 0,
            }]
        );
    }

    #[test]
    fn test_validate_default_rules_pass() {
        assert!(validate("secret123*", &[]).is_empty());
    }

    #[test]
    fn test_validate_default_rules_all_fail() {
        let errors = validate("abc", &[]);
        assert_eq!(
            errors,
            vec![
                ValidationError::MinLength {
                    min_length: 8,
                    provided_length: 3,
                },
                ValidationError::CharsAndDigits {
                    detail: CharsAndDigitsDetail::NoDigits,
                },
                ValidationError::SpecialChars {
                    minimum: 1,
                    provided: 0,
                },
            ]
        );
    }

    #[test]
    fn test_validate_empty_word() {
        let errors = validate("", &[]);
        assert_eq!(errors.len(), 3);
        assert!(matches!(
            errors[1],
            ValidationError::CharsAndDigits {
                detail: CharsAndDigitsDetail::NoCharacters
            }
        ));
    }

    #[test]
    fn test_validate_explicit_rules_replace_defaults() {
        // Would fail min_length(8) from the defaults
        assert!(validate("ab1", &[&digits(1)]).is_empty());
    }

    #[test]
    fn test_validate_runs_every_rule() {
        let specials = characters("+-?", 2);
        let pattern = regexp_str("^secret").unwrap();
        let errors = validate("pass", &[&min_length(6), &digits(3), &specials, &pattern]);

        assert_eq!(errors.len(), 4);
        assert!(matches!(errors[0], ValidationError::MinLength { .. }));
        assert!(matches!(errors[1], ValidationError::Digits { .. }));
        assert!(matches!(errors[2], ValidationError::Runes { .. }));
        assert!(matches!(errors[3], ValidationError::Regexp { .. }));
    }

    #[test]
    fn test_validate_preserves_rule_order() {
        let errors = validate("short", &[&digits(1), &min_length(8)]);
        assert!(matches!(errors[0], ValidationError::Digits { .. }));
        assert!(matches!(errors[1], ValidationError::MinLength { .. }));

        let errors = validate("short", &[&min_length(8), &digits(1)]);
        assert!(matches!(errors[0], ValidationError::MinLength { .. }));
        assert!(matches!(errors[1], ValidationError::Digits { .. }));
    }

    #[test]
    fn test_validate_skips_passing_rules() {
        let errors = validate("secret", &[&min_length(4), &digits(1), &min_length(5)]);
        assert_eq!(
            errors,
            vec![ValidationError::Digits {
                minimum: 1,
                provided: 0,
            }]
        );
    }

    #[test]
    fn test_validate_custom_rule() {
        let no_secret = rule_fn(|word: &str| {
            word.contains("secret").then(|| ValidationError::Custom {
                message: "must not contain 'secret'".to_string(),
            })
        });

        let errors = validate("secret123*", &[&no_secret, &min_length(4)]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "must not contain 'secret'");
    }

    #[test]
    fn test_validate_is_repeatable() {
        let rules: [&dyn Rule; 2] = [&min_length(12), &digits(4)];
        let first = validate("secret12", &rules);
        let second = validate("secret12", &rules);
        assert_eq!(first, second);
        assert_eq!(validate("secret12", &[]), validate("secret12", &[]));
    }

    #[test]
    fn test_validate_secret() {
        let pwd = SecretString::new("secret12345678".to_string().into());
        assert_eq!(validate_secret(&pwd, &[]), validate("secret12345678", &[]));
    }

    #[test]
    fn test_default_rules_shared_between_threads() {
        std::thread::scope(|s| {
            let handles: Vec<_> = ["secret123*", "abc", "secret12345678"]
                .into_iter()
                .map(|word| s.spawn(move || validate(word, &[]).len()))
                .collect();
            let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(counts, vec![0, 3, 1]);
        });
    }

    #[test]
    fn test_default_rules_contents() {
        let rules = default_rules();
        assert_eq!(rules.len(), 3);
        assert_eq!(
            rules[0].validate("1234567"),
            Some(ValidationError::MinLength {
                min_length: 8,
                provided_length: 7,
            })
        );
        assert!(matches!(
            rules[1].validate("12345678"),
            Some(ValidationError::CharsAndDigits { .. })
        ));
        assert!(matches!(
            rules[2].validate("abc"),
            Some(ValidationError::SpecialChars { minimum: 1, .. })
        ));
    }
}
