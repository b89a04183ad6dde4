//! Errors for the Gradle quick-fix component.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildfixError {
    #[error("not a file URI: {0}")]
    InvalidUri(String),

    #[error("invalid command arguments: {0}")]
    InvalidArguments(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BuildfixError>;
