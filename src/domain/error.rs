// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Record not found: {0}")]
    RecordNotFound(i64),
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),
}

/// Rejection of a whole tag batch. Nothing from the batch is added.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Skills must be {max} characters or less: {}", .tags.join(", "))]
    TagTooLong { tags: Vec<String>, max: usize },
    #[error("Duplicate skills detected: {}", .0.join(", "))]
    DuplicateTag(Vec<String>),
}

/// One violated rule of a lesson or question draft.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be between {min} and {max} characters, got {actual}")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
    #[error("{0} cannot be only numbers")]
    OnlyDigits(&'static str),
    #[error("{0} can only contain letters and numbers")]
    InvalidCharacters(&'static str),
    #[error("Minimum {min} tags required, got {actual}")]
    TooFewTags { min: usize, actual: usize },
    #[error("Maximum {max} tags allowed, got {actual}")]
    TooManyTags { max: usize, actual: usize },
    #[error("Unknown {field}: {value}")]
    UnknownReference { field: &'static str, value: String },
}
