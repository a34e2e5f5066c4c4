//! Per-form component state and the submit flow

use super::field::FormSchema;
use super::validation::validate;
use super::values::{FieldErrors, FormValues};
use crate::submit::Submission;
use uuid::Uuid;

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are now shown inline
    Rejected { error_count: usize },
    /// A previous submission is still in flight; nothing happened
    InFlight,
    /// Validated; the caller must deliver this submission and report back
    /// with [`FormComponent::complete`] or [`FormComponent::fail`]
    Accepted(Submission),
}

/// State owned by one mounted form: values, errors, in-flight flag and focus
#[derive(Debug, Clone)]
pub struct FormComponent<F: FormSchema> {
    values: FormValues<F>,
    errors: FieldErrors<F>,
    submitting: bool,
    /// Ticket of the in-flight submission; completions for any other id are ignored
    pending: Option<Uuid>,
    /// Focused row. `F::count()` is the submit button.
    pub active_field_index: usize,
}

impl<F: FormSchema> FormComponent<F> {
    pub fn new() -> Self {
        Self {
            values: FormValues::empty(),
            errors: FieldErrors::empty(),
            submitting: false,
            pending: None,
            active_field_index: 0,
        }
    }

    pub fn values(&self) -> &FormValues<F> {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors<F> {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[cfg(test)]
    pub fn pending_ticket(&self) -> Option<Uuid> {
        self.pending
    }

    /// Store a new value for a field. An error on that field is dismissed;
    /// nothing is revalidated.
    pub fn handle_change(&mut self, field: F, value: impl Into<String>) {
        self.values = self.values.with(field, value);
        if self.errors.has_error(field) {
            self.errors = self.errors.cleared(field);
        }
    }

    // Focus

    /// Rows that take focus: every field plus the button
    fn row_count() -> usize {
        F::count() + 1
    }

    pub fn active_field(&self) -> Option<F> {
        F::at(self.active_field_index)
    }

    pub fn is_button_active(&self) -> bool {
        self.active_field_index == F::count()
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % Self::row_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = Self::row_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    #[cfg(test)]
    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::row_count() - 1);
    }

    // Keystrokes on the focused field

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field() {
            let mut value = self.values.get(field).to_string();
            value.push(c);
            self.handle_change(field, value);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field() {
            let mut value = self.values.get(field).to_string();
            value.pop();
            self.handle_change(field, value);
        }
    }

    /// Whether Enter should insert a newline rather than submit
    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field().is_some_and(|f| f.is_multiline())
    }

    // Submission

    /// Validate and, if valid, enter the submitting state.
    ///
    /// The validator output replaces the current errors in both cases.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::InFlight;
        }

        let outcome = validate(&self.values);
        self.errors = outcome.errors;

        if !outcome.is_valid {
            let error_count = self.errors.error_count();
            tracing::debug!(form = F::FORM_NAME, error_count, "Submission rejected");
            return SubmitOutcome::Rejected { error_count };
        }

        let submission = Submission::new(&self.values);
        self.submitting = true;
        self.pending = Some(submission.id);
        SubmitOutcome::Accepted(submission)
    }

    /// Finish the in-flight submission. Returns the confirmation to show, or
    /// `None` when the ticket is stale.
    pub fn complete(&mut self, ticket: Uuid) -> Option<&'static str> {
        if self.pending != Some(ticket) {
            tracing::debug!(form = F::FORM_NAME, %ticket, "Ignoring stale completion");
            return None;
        }

        self.reset();
        Some(F::SUCCESS_MESSAGE)
    }

    /// Abandon the in-flight submission after a delivery failure. Entered
    /// values are kept so the user can retry. Returns false for stale tickets.
    pub fn fail(&mut self, ticket: Uuid) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }

        self.submitting = false;
        self.pending = None;
        true
    }

    /// Back to a freshly mounted state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<F: FormSchema> Default for FormComponent<F> {
    fn default() -> Self {
        Self::new()
    }
}
