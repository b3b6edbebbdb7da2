//! Call interception adapter for Argus
//!
//! Receives a method's declared parameters, their markers, and the resolved
//! argument values from the interception collaborator, verifies each
//! argument, and either lets the call proceed unchanged or aborts it with
//! the first validation failure.
//!
//! # Examples
//!
//! ```
//! use argus_core::{Marker, RuleDescriptor};
//! use argus_intercept::{MethodMetadata, ParameterSpec, VerifyInterceptor};
//! use serde_json::json;
//!
//! let metadata = MethodMetadata::new("register").parameter(
//!     ParameterSpec::new("email")
//!         .marker(Marker::Field(RuleDescriptor::new("email").max_length(64))),
//! );
//!
//! let interceptor = VerifyInterceptor::new();
//! assert!(interceptor.check(&metadata, &[json!("a@b.com")]).is_ok());
//! assert!(interceptor.check(&metadata, &[json!("")]).is_err());
//! ```

mod config;
mod interceptor;
mod metadata;
mod resolver;

pub use config::*;
pub use interceptor::*;
pub use metadata::*;
pub use resolver::*;
