use crate::validation::EmailValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradebookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not save students to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid email format! Please use format: name@domain.com ({0})")]
    InvalidEmail(EmailValidationError),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("A student with email {0} already exists!")]
    DuplicateEmail(String),

    #[error("Please enter a valid number.")]
    InvalidNumber(String),

    #[error("Invalid choice.")]
    InvalidChoice(i64),

    #[error("Grade must be between 0 and 100.")]
    GradeOutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, GradebookError>;
