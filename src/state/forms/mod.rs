//! Form domain layer
//!
//! Field schemas, immutable value/error records, the validator and the
//! per-form component state that drives a submission.

mod field;
mod form_state;
mod validation;
mod values;

pub use field::{ContactField, FormSchema, NewsletterField};
pub use form_state::{FormComponent, SubmitOutcome};
pub use values::FormValues;
