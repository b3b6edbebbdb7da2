// Boundary conversion of validation failures into response envelopes

use argus_core::{Error, ResponseEnvelope, ValidationFailure};

/// Catches exactly the validation failure type at the boundary and turns
/// it into the uniform response envelope
#[derive(Debug, Default, Clone, Copy)]
pub struct ExceptionResolver;

impl ExceptionResolver {
    pub fn new() -> Self {
        Self
    }

    /// Log the failure and convert it; the message is duplicated into the
    /// payload slot for wire compatibility
    pub fn resolve(&self, failure: &ValidationFailure) -> ResponseEnvelope<String> {
        tracing::error!("{}", failure.message);
        ResponseEnvelope::from_failure(failure)
    }

    /// Resolve only validation failures; anything else stays fatal for the
    /// call and is left to the caller
    pub fn try_resolve(&self, error: &Error) -> Option<ResponseEnvelope<String>> {
        error.as_failure().map(|failure| self.resolve(failure))
    }
}
