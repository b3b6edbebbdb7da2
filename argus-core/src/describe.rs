// Type descriptors: the static replacement for reflective field walking

use crate::{Error, RuleDescriptor};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// The rule-bearing fields of one named type, in declaration order.
///
/// Registered once at startup and looked up by external name when a marker
/// references the type, so no runtime reflection is needed.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    name: String,
    fields: Vec<RuleDescriptor>,
}

impl TypeDescriptor {
    /// Empty descriptor for the given external type name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a rule-bearing field; order of calls is declaration order
    pub fn field(mut self, rule: RuleDescriptor) -> Self {
        self.fields.push(rule);
        self
    }

    /// External name this descriptor is registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields, in declaration order
    pub fn fields(&self) -> &[RuleDescriptor] {
        &self.fields
    }
}

/// Types that can describe their own validation rules
pub trait Describe {
    fn describe() -> TypeDescriptor;
}

static REGISTRY: Lazy<RwLock<HashMap<String, Arc<TypeDescriptor>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Register a descriptor under its name, replacing any previous registration
pub fn register(descriptor: TypeDescriptor) {
    let descriptor = Arc::new(descriptor);
    REGISTRY
        .write()
        .insert(descriptor.name().to_string(), descriptor);
}

/// Register a self-describing type
pub fn register_type<T: Describe>() {
    register(T::describe());
}

/// Resolve a descriptor by external name.
///
/// An unknown name is a fatal lookup error for the call, never a
/// validation failure.
pub fn lookup(name: &str) -> Result<Arc<TypeDescriptor>, Error> {
    REGISTRY
        .read()
        .get(name)
        .cloned()
        .ok_or_else(|| Error::DescriptorNotFound(name.to_string()))
}
