use std::collections::HashMap;

use rpcguard_errors::ErrorObject;
use rpcguard_typecheck::{validate, validate_any, Descriptor, Handler, TypeMismatch, Value};

use crate::error::{RegistryError, Result};

/// Expected shape for one positional parameter: a single descriptor or
/// an ordered union of alternatives.
#[derive(Debug, Clone)]
pub enum ParamSpec {
    One(Descriptor),
    AnyOf(Vec<Descriptor>),
}

impl ParamSpec {
    /// Check a value against this parameter's shape.
    pub fn validate(&self, value: &Value) -> std::result::Result<(), TypeMismatch> {
        match self {
            ParamSpec::One(descriptor) => validate(value, *descriptor),
            ParamSpec::AnyOf(descriptors) => validate_any(value, descriptors),
        }
    }
}

impl From<Descriptor> for ParamSpec {
    fn from(descriptor: Descriptor) -> Self {
        ParamSpec::One(descriptor)
    }
}

pub(crate) struct Method {
    pub(crate) params: Vec<ParamSpec>,
    pub(crate) handler: Handler,
}

/// Name-keyed registry of RPC methods and their parameter shapes.
///
/// Built once at startup, then shared read-only across calls; dispatch
/// never mutates it.
#[derive(Default)]
pub struct MethodTable {
    pub(crate) methods: HashMap<String, Method>,
}

impl MethodTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a method from a handler value.
    ///
    /// The handler must satisfy the `callable` descriptor; anything else
    /// is rejected before it can be dispatched to.
    pub fn register(
        &mut self,
        name: &str,
        params: Vec<ParamSpec>,
        handler: Value,
    ) -> Result<()> {
        if name.is_empty() {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        if self.methods.contains_key(name) {
            return Err(RegistryError::DuplicateMethod(name.to_string()));
        }

        let handler = match handler {
            Value::Callable(handler) => handler,
            other => {
                return Err(RegistryError::HandlerNotCallable(TypeMismatch {
                    value: other.render(),
                    expected: vec![Descriptor::Callable],
                    reference: Descriptor::Callable.reference(),
                }))
            }
        };

        self.methods.insert(name.to_string(), Method { params, handler });
        Ok(())
    }

    /// Register a method from a plain function.
    pub fn register_fn<F>(&mut self, name: &str, params: Vec<ParamSpec>, f: F) -> Result<()>
    where
        F: Fn(&[Value]) -> std::result::Result<Value, ErrorObject> + Send + Sync + 'static,
    {
        self.register(name, params, Value::callable(f))
    }

    /// True when a method with this name is registered.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Registered method names, sorted.
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
