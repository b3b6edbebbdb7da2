// Argus - declarative request-argument validation with interception
//
// Rules are attached to field and parameter declarations; an interceptor
// verifies each marked argument before the handler runs and aborts the
// call with a structured failure on the first violation.

// Re-export the validation core
pub use argus_core::*;

// Re-export the interception adapter
pub use argus_intercept::*;
