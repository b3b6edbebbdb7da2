// Declared-method metadata delivered by the interception collaborator

use argus_core::Marker;
use serde_json::Value;

/// One declared parameter and the markers attached to it, in
/// marker-declaration order
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    pub name: String,
    pub markers: Vec<Marker>,
}

impl ParameterSpec {
    /// Unmarked parameter; never inspected
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markers: Vec::new(),
        }
    }

    /// Attach a marker; order of calls is declaration order
    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }
}

/// The declared shape of an intercepted method
#[derive(Debug, Clone)]
pub struct MethodMetadata {
    pub name: String,
    pub parameters: Vec<ParameterSpec>,
}

impl MethodMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Append a declared parameter
    pub fn parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// One intercepted invocation: the declared method plus its resolved
/// argument values, positionally aligned with the parameter list
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub metadata: MethodMetadata,
    pub args: Vec<Value>,
}

impl MethodCall {
    pub fn new(metadata: MethodMetadata, args: Vec<Value>) -> Self {
        Self { metadata, args }
    }
}
