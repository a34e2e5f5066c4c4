//! Field validation

use super::field::FormSchema;
use super::values::{FieldErrors, FormValues};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Per-field validation failure. The display text is shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters.")]
    NameTooShort,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhoneNumber,
    #[error("Please enter your budget.")]
    MissingBudget,
    #[error("Message must be at least 10 characters.")]
    MessageTooShort,
}

/// Characters that are neither whitespace (browser `\s` set) nor `@`
macro_rules! not_space_or_at {
    () => {
        r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+"
    };
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "^",
        not_space_or_at!(),
        "@",
        not_space_or_at!(),
        r"\.",
        not_space_or_at!(),
        "$"
    ))
    .unwrap()
});

/// Loose email shape check: `local@domain.tld`, no whitespace, single `@`
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Result of running every rule of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome<F: FormSchema> {
    pub errors: FieldErrors<F>,
    pub is_valid: bool,
}

/// Validate every field independently.
///
/// No early exit: each failing field gets its message in the same pass, and
/// passing fields come back empty. The returned errors replace any previous
/// ones wholesale.
pub fn validate<F: FormSchema>(values: &FormValues<F>) -> ValidationOutcome<F> {
    let mut errors = FieldErrors::empty();
    let mut is_valid = true;

    for &field in F::ALL {
        if let Err(err) = field.check(values.get(field)) {
            errors = errors.with(field, err.to_string());
            is_valid = false;
        }
    }

    ValidationOutcome { errors, is_valid }
}
