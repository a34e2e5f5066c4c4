//! Form field schemas
//!
//! Each form declares its fields as a closed enum. Records and the validator
//! are generic over [`FormSchema`], so a form can never hold a value or an
//! error for a field it does not declare.

use super::validation::{is_valid_email, ValidationError};
use std::fmt::Debug;

/// Static description of a form's fields and their rules
pub trait FormSchema: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every field, in display order
    const ALL: &'static [Self];
    /// Form identifier used in logs and submission payloads
    const FORM_NAME: &'static str;
    /// Confirmation shown once after a successful submission
    const SUCCESS_MESSAGE: &'static str;

    /// Position of this field in [`FormSchema::ALL`]
    fn index(self) -> usize;

    /// Wire key of the field (e.g. `phoneNumber`)
    fn key(self) -> &'static str;

    fn label(self) -> &'static str;

    fn placeholder(self) -> &'static str;

    /// Multi-line fields take Enter as a newline instead of a submit
    fn is_multiline(self) -> bool {
        false
    }

    /// Check a single value against this field's rule
    fn check(self, value: &str) -> Result<(), ValidationError>;

    /// Number of fields in the form
    fn count() -> usize {
        Self::ALL.len()
    }

    /// Field at a display position
    fn at(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Minimum length rule, counted in UTF-16 code units like a browser input
fn min_len(value: &str, min: usize, error: ValidationError) -> Result<(), ValidationError> {
    if value.encode_utf16().count() >= min {
        Ok(())
    } else {
        Err(error)
    }
}

/// Fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    PhoneNumber,
    Budget,
    Message,
}

impl FormSchema for ContactField {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::Email,
        Self::PhoneNumber,
        Self::Budget,
        Self::Message,
    ];
    const FORM_NAME: &'static str = "contact";
    const SUCCESS_MESSAGE: &'static str =
        "Thank you for your message. We'll get back to you soon!";

    fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::PhoneNumber => 2,
            Self::Budget => 3,
            Self::Message => 4,
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Budget => "budget",
            Self::Message => "message",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Budget => "Budget",
            Self::Message => "Message",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@example.com",
            Self::PhoneNumber => "+1 (555) 000-0000",
            Self::Budget => "$1,000 - $5,000",
            Self::Message => "Tell us about your project...",
        }
    }

    fn is_multiline(self) -> bool {
        matches!(self, Self::Message)
    }

    fn check(self, value: &str) -> Result<(), ValidationError> {
        match self {
            Self::Name => min_len(value, 2, ValidationError::NameTooShort),
            Self::Email => {
                if is_valid_email(value) {
                    Ok(())
                } else {
                    Err(ValidationError::InvalidEmail)
                }
            }
            Self::PhoneNumber => min_len(value, 10, ValidationError::InvalidPhoneNumber),
            Self::Budget => min_len(value, 1, ValidationError::MissingBudget),
            Self::Message => min_len(value, 10, ValidationError::MessageTooShort),
        }
    }
}

/// Fields of the newsletter signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewsletterField {
    Email,
}

impl FormSchema for NewsletterField {
    const ALL: &'static [Self] = &[Self::Email];
    const FORM_NAME: &'static str = "newsletter";
    const SUCCESS_MESSAGE: &'static str = "Thank you for subscribing to our newsletter!";

    fn index(self) -> usize {
        0
    }

    fn key(self) -> &'static str {
        "email"
    }

    fn label(self) -> &'static str {
        "Email"
    }

    fn placeholder(self) -> &'static str {
        "Enter your email"
    }

    fn check(self, value: &str) -> Result<(), ValidationError> {
        if is_valid_email(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }
}
