//! Validation core for Argus
//!
//! Declarative request-argument validation: rules are attached to field and
//! parameter declarations, arguments are extracted per marker, and a
//! fixed-order evaluator aborts on the first violation.
//!
//! # Examples
//!
//! ## Validating a single value
//!
//! ```
//! use argus_core::{evaluate, RegexChoice, RuleDescriptor};
//! use serde_json::json;
//!
//! let rule = RuleDescriptor::new("email")
//!     .max_length(64)
//!     .regex(RegexChoice::Email);
//!
//! assert!(evaluate(&rule, &json!("user@example.com")).is_ok());
//! assert!(evaluate(&rule, &json!("not-an-email")).is_err());
//! ```
//!
//! ## Validating a composite argument
//!
//! ```
//! use argus_core::{describe, verify_parameter, Marker, RuleDescriptor, TypeDescriptor};
//! use serde_json::json;
//!
//! describe::register(
//!     TypeDescriptor::new("docs.User")
//!         .field(RuleDescriptor::new("name").max_length(32)),
//! );
//!
//! let markers = [Marker::Entity { descriptor: "docs.User".to_string() }];
//! assert!(verify_parameter(&markers, &json!({"name": "alice"})).is_ok());
//! assert!(verify_parameter(&markers, &json!({"name": ""})).is_err());
//! ```

mod catalog;
pub mod describe;
mod error;
mod evaluate;
mod extract;
mod response;
mod rules;
mod status;

pub use catalog::*;
pub use describe::{Describe, TypeDescriptor};
pub use error::*;
pub use evaluate::*;
pub use extract::*;
pub use response::*;
pub use rules::*;
pub use status::*;
