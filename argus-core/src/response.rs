// Uniform success/failure response envelope

use crate::{HttpStatus, ValidationFailure};
use serde::{Deserialize, Serialize};

/// The wrapper returned across the API boundary for both outcomes.
///
/// Serializes as `{"code":...,"msg":...,"data":...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    /// Status code
    pub code: u16,

    /// Outcome message
    pub msg: String,

    /// Payload, absent on bare-status responses
    pub data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    /// Envelope with a code and message, no payload
    pub fn new(code: u16, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }

    /// Successful envelope carrying a payload
    pub fn ok(data: T) -> Self {
        Self {
            code: HttpStatus::Ok.value(),
            msg: HttpStatus::Ok.reason().to_string(),
            data: Some(data),
        }
    }

    /// Set the payload
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }
}

impl ResponseEnvelope<String> {
    /// Failure envelope; the message is duplicated into the payload slot
    /// (kept for wire compatibility).
    pub fn from_failure(failure: &ValidationFailure) -> Self {
        Self {
            code: failure.code,
            msg: failure.message.clone(),
            data: Some(failure.message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope() {
        let envelope = ResponseEnvelope::ok("payload");
        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.msg, "OK");
        assert_eq!(envelope.data, Some("payload"));
    }

    #[test]
    fn test_failure_envelope_duplicates_message() {
        let failure = ValidationFailure::new("[name] must not be empty");
        let envelope = ResponseEnvelope::from_failure(&failure);
        assert_eq!(envelope.code, 500);
        assert_eq!(envelope.msg, "[name] must not be empty");
        assert_eq!(envelope.data.as_deref(), Some("[name] must not be empty"));
    }

    #[test]
    fn test_envelope_serialization_shape() {
        let failure = ValidationFailure::new("oops");
        let envelope = ResponseEnvelope::from_failure(&failure);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"code": 500, "msg": "oops", "data": "oops"})
        );
    }
}
