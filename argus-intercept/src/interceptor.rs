// Interceptor that verifies arguments before the wrapped call runs

use crate::{MethodCall, MethodMetadata};
use argus_core::{verify_parameter, Error};
use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// Execution context passed to interceptors
pub struct ExecutionContext {
    pub call: MethodCall,
}

impl ExecutionContext {
    pub fn new(call: MethodCall) -> Self {
        Self { call }
    }
}

/// The continuation of the intercepted call
pub type Next = Pin<Box<dyn Future<Output = Result<Value, Error>> + Send>>;

/// Interceptor trait wrapping handler execution
#[async_trait]
pub trait Interceptor: Send + Sync {
    /// Intercept the call; `next` runs the wrapped handler
    async fn intercept(&self, context: ExecutionContext, next: Next) -> Result<Value, Error>;
}

/// Verifies every marked parameter and aborts the call on the first
/// failure; on success the wrapped call runs and its result passes through
/// unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct VerifyInterceptor;

impl VerifyInterceptor {
    pub fn new() -> Self {
        Self
    }

    /// Check every declared parameter position, in order, against its
    /// markers. Stops at the first failing parameter; later parameters are
    /// not inspected. A position with no supplied argument reads as null.
    pub fn check(&self, metadata: &MethodMetadata, args: &[Value]) -> Result<(), Error> {
        for (index, parameter) in metadata.parameters.iter().enumerate() {
            let value = args.get(index).unwrap_or(&Value::Null);
            if let Err(err) = verify_parameter(&parameter.markers, value) {
                tracing::error!(
                    method = %metadata.name,
                    parameter = %parameter.name,
                    "argument validation failed: {}",
                    err
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Interceptor for VerifyInterceptor {
    async fn intercept(&self, context: ExecutionContext, next: Next) -> Result<Value, Error> {
        self.check(&context.call.metadata, &context.call.args)?;
        next.await
    }
}
