//! Form filling and required-field validation.
//!
//! The only rule enforced is presence: a required field whose filled value is
//! empty is reported by its label.

use std::collections::HashMap;
use std::fmt;

use crate::catalog::{FieldDef, FilledFields};

/// A required field that was left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    pub key: &'static str,
    pub label: &'static str,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Missing required fields, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    missing: Vec<MissingField>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &FieldDef) {
        self.missing.push(MissingField {
            key: field.key,
            label: field.label,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn len(&self) -> usize {
        self.missing.len()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.missing.iter().map(|m| m.label).collect()
    }

    pub fn fields(&self) -> &[MissingField] {
        &self.missing
    }

    /// `Missing: <label>, <label>` as shown on the form.
    pub fn to_message(&self) -> String {
        format!("Missing: {}", self.labels().join(", "))
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Compute the filled value for every field of a form.
///
/// A submitted value is used when non-empty, otherwise the field default;
/// the result is trimmed either way.
pub fn fill_fields(fields: &[FieldDef], raw: &HashMap<String, String>) -> FilledFields {
    fields
        .iter()
        .map(|field| {
            let submitted = raw.get(field.key).map(String::as_str).unwrap_or("");
            let value = if submitted.is_empty() {
                field.default.unwrap_or("")
            } else {
                submitted
            };
            (field.key, value.trim().to_string())
        })
        .collect()
}

/// Check that every required field has a non-empty filled value.
pub fn validate_required(fields: &[FieldDef], filled: &FilledFields) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for field in fields.iter().filter(|f| f.required) {
        if filled.get(field.key).is_empty() {
            errors.add(field);
        }
    }
    errors.into_result()
}
