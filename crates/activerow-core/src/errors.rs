//! Field-level error bag.
//!
//! Validation logic lives outside this crate; callers populate an [`Errors`]
//! on an instance before deciding whether to save it. The only read accessor
//! is get-or-default, so asking about a field that has no error is always
//! answerable and never a lookup failure. Template and UI code can branch on
//! error presence without existence checks.

use std::collections::HashMap;

/// A bag of field errors: field name to error message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    entries: HashMap<String, String>,
}

impl Errors {
    /// Create an empty error bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any previous message.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(field.into(), message.into());
    }

    /// The error message for a field, or `None` when the field has no
    /// error. Absent fields read as "no error".
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    /// Check whether any field has an error.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with errors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Remove all recorded errors.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over (field, message) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

impl<F: Into<String>, M: Into<String>> FromIterator<(F, M)> for Errors {
    fn from_iter<I: IntoIterator<Item = (F, M)>>(iter: I) -> Self {
        let mut errors = Errors::new();
        for (field, message) in iter {
            errors.add(field, message);
        }
        errors
    }
}
