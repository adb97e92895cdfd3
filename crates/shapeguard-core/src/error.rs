//! Error types for schema construction and validation.

use thiserror::Error;

/// A value failed validation.
///
/// Carries exactly one human-readable message. Context for nested values
/// (array positions, object keys) is embedded in the text by the composite
/// validators, e.g. `Invalid value for key 'name': Value must be a string`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// The failure text of the first rule that did not hold
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wrap this error with context from an enclosing validator.
    pub(crate) fn wrap(self, context: impl std::fmt::Display) -> Self {
        Self {
            message: format!("{}: {}", context, self.message),
        }
    }
}

/// Errors raised while building a schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
