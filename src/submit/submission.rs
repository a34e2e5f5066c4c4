//! Submission payload

use crate::state::{FormSchema, FormValues};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Snapshot of a validated form, as handed to a [`super::Submitter`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    /// Ticket matching the component's pending submission
    pub id: Uuid,
    pub form: &'static str,
    pub submitted_at: DateTime<Utc>,
    pub fields: BTreeMap<&'static str, String>,
}

impl Submission {
    pub fn new<F: FormSchema>(values: &FormValues<F>) -> Self {
        Self {
            id: Uuid::new_v4(),
            form: F::FORM_NAME,
            submitted_at: Utc::now(),
            fields: values.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ContactField, NewsletterField};

    #[test]
    fn test_new_captures_form_name_and_fields() {
        let values = FormValues::empty().with(NewsletterField::Email, "user@example.com");
        let submission = Submission::new(&values);
        assert_eq!(submission.form, "newsletter");
        assert_eq!(
            submission.fields.get("email").map(String::as_str),
            Some("user@example.com")
        );
    }

    #[test]
    fn test_each_submission_gets_fresh_id() {
        let values = FormValues::<ContactField>::empty();
        assert_ne!(Submission::new(&values).id, Submission::new(&values).id);
    }

    #[test]
    fn test_serializes_fields_as_object() {
        let values = FormValues::empty().with(ContactField::Budget, "$100");
        let json = serde_json::to_value(Submission::new(&values)).unwrap();
        assert_eq!(json["form"], "contact");
        assert_eq!(json["fields"]["budget"], "$100");
        assert_eq!(json["fields"]["phoneNumber"], "");
        assert!(json["submitted_at"].is_string());
    }
}
