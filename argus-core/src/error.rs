// Error types for argument validation

use crate::HttpStatus;
use thiserror::Error;

/// A single failed check, carried as the payload of the call-abort path.
///
/// Constructed at the point of detection and propagated as-is to the
/// boundary; never mutated after construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationFailure {
    /// HTTP-equivalent status code, 500 unless the call site overrides it
    pub code: u16,

    /// Human-readable failure message naming the offending field
    pub message: String,
}

impl ValidationFailure {
    /// Create a failure with the default internal-server-error code
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: HttpStatus::InternalServerError.value(),
            message: message.into(),
        }
    }

    /// Create a failure with an explicit status code
    pub fn with_code(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Errors raised while verifying a call's arguments
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("Type descriptor not found: {0}")]
    DescriptorNotFound(String),
}

impl Error {
    /// The validation failure, if this error is one
    pub fn as_failure(&self) -> Option<&ValidationFailure> {
        match self {
            Error::Validation(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Assert-style helper: logs and returns a failure when `status` is false.
///
/// Mirrors the log-then-raise policy at the point of detection.
pub fn ensure(status: bool, message: impl Into<String>) -> Result<(), ValidationFailure> {
    if status {
        Ok(())
    } else {
        let message = message.into();
        tracing::error!("{}", message);
        Err(ValidationFailure::new(message))
    }
}

/// Like [`ensure`], with an explicit status code
pub fn ensure_code(
    status: bool,
    code: u16,
    message: impl Into<String>,
) -> Result<(), ValidationFailure> {
    if status {
        Ok(())
    } else {
        let message = message.into();
        tracing::error!("{}", message);
        Err(ValidationFailure::with_code(code, message))
    }
}
