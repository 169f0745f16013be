// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Portafolio workspace.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The primary error type used across store traits and services.
#[derive(Debug, Error)]
pub enum PortafolioError {
    /// Configuration errors detected after startup (invalid values, missing files).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, migrations).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// One or more submitted fields failed validation. Nothing was persisted.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// A second record was created for an entity that allows only one.
    #[error("only one {entity} may exist; edit the existing record instead")]
    SingletonViolation { entity: &'static str },

    /// An update, delete, or child insert referenced a row that does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PortafolioError {
    /// Returns the field errors if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            PortafolioError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// A single failing field and a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the failing field as submitted (form field name).
    pub field: &'static str,
    /// Message shown next to the field.
    pub message: String,
}

/// The collected field errors of one validation pass.
///
/// Validation never fails fast: every failing field is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True if at least one error was recorded for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Names of the failing fields, in the order they were recorded, without repeats.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        for e in &self.errors {
            if !fields.contains(&e.field) {
                fields.push(e.field);
            }
        }
        fields
    }

    /// Messages recorded for `field`.
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing was recorded, otherwise a [`PortafolioError::Validation`].
    pub fn into_result(self) -> Result<(), PortafolioError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(PortafolioError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}
