//! Immutable form records
//!
//! Both records keep exactly one slot per schema field, so values and errors
//! always share the same key set. Updates return a new record.

use super::field::FormSchema;
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Current string value of every field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues<F: FormSchema> {
    slots: Vec<String>,
    _schema: PhantomData<F>,
}

impl<F: FormSchema> FormValues<F> {
    /// All fields empty
    pub fn empty() -> Self {
        Self {
            slots: vec![String::new(); F::count()],
            _schema: PhantomData,
        }
    }

    pub fn get(&self, field: F) -> &str {
        &self.slots[field.index()]
    }

    /// Copy of this record with one field replaced
    pub fn with(&self, field: F, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.slots[field.index()] = value.into();
        next
    }

    /// (field, value) pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> + '_ {
        F::ALL.iter().map(|&f| (f, self.get(f)))
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(String::is_empty)
    }

    /// Snapshot keyed by wire name, as sent with a submission
    pub fn snapshot(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(field, value)| (field.key(), value.to_string()))
            .collect()
    }
}

impl<F: FormSchema> Default for FormValues<F> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Current error message of every field; an empty string means no error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: FormSchema> {
    slots: Vec<String>,
    _schema: PhantomData<F>,
}

impl<F: FormSchema> FieldErrors<F> {
    /// No errors
    pub fn empty() -> Self {
        Self {
            slots: vec![String::new(); F::count()],
            _schema: PhantomData,
        }
    }

    pub fn get(&self, field: F) -> &str {
        &self.slots[field.index()]
    }

    pub fn has_error(&self, field: F) -> bool {
        !self.get(field).is_empty()
    }

    /// Copy of this record with one field's message replaced
    pub fn with(&self, field: F, message: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.slots[field.index()] = message.into();
        next
    }

    /// Copy of this record with one field's message removed; other fields
    /// are untouched
    pub fn cleared(&self, field: F) -> Self {
        self.with(field, String::new())
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(String::is_empty)
    }

    pub fn error_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }
}

impl<F: FormSchema> Default for FieldErrors<F> {
    fn default() -> Self {
        Self::empty()
    }
}
