// Installation surface for the interception collaborator

use crate::VerifyInterceptor;

/// A verifying advice paired with the selector expression that decides
/// which methods it wraps. The expression is owned and interpreted by the
/// interception collaborator, never by this crate.
#[derive(Debug, Clone)]
pub struct PointcutAdvisor {
    pub expression: String,
    pub advice: VerifyInterceptor,
}

/// Entry point for enabling verification over a set of methods
#[derive(Debug, Clone)]
pub struct EnableVerify {
    execution: String,
}

impl EnableVerify {
    /// Enable verification for methods selected by `execution`
    pub fn new(execution: impl Into<String>) -> Self {
        Self {
            execution: execution.into(),
        }
    }

    /// Build the advisor the interception collaborator installs
    pub fn advisor(self) -> PointcutAdvisor {
        PointcutAdvisor {
            expression: self.execution,
            advice: VerifyInterceptor::new(),
        }
    }
}
