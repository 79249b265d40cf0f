//! Content loading errors

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// What went wrong with a single front-matter field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    Missing,
    Empty,
    InvalidType {
        expected: &'static str,
        found: &'static str,
    },
    InvalidEnum {
        value: String,
    },
    InvalidDate {
        value: String,
    },
}

/// A field-level schema violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub issue: FieldIssue,
}

impl FieldError {
    pub fn new(field: &'static str, issue: FieldIssue) -> Self {
        Self { field, issue }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.issue {
            FieldIssue::Missing => write!(f, "{}: required", self.field),
            FieldIssue::Empty => write!(f, "{}: must not be empty", self.field),
            FieldIssue::InvalidType { expected, found } => {
                write!(f, "{}: expected {}, found {}", self.field, expected, found)
            }
            FieldIssue::InvalidEnum { value } => write!(
                f,
                "{}: '{}' is not one of {}",
                self.field,
                value,
                crate::consts::CATEGORIES.join(", ")
            ),
            FieldIssue::InvalidDate { value } => {
                write!(f, "{}: '{}' is not a valid date", self.field, value)
            }
        }
    }
}

/// Errors raised while loading a content collection
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {path:?}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Invalid front-matter in {path:?}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("Validation failed for {path:?}: {}", join_errors(.errors))]
    Validation {
        path: PathBuf,
        errors: Vec<FieldError>,
    },

    #[error("Duplicate id '{id}' for {first:?} and {second:?}")]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl ContentError {
    /// Field errors, if this is a validation failure
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ContentError::Validation { errors, .. } => errors,
            _ => &[],
        }
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
