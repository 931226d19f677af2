//! JSON-RPC 2.0 envelope types.
//!
//! The four standard codes (-32700, -32600, -32601, -32602) are a wire
//! compatibility contract with any JSON-RPC 2.0 client; responses embed
//! the taxonomy's error-object shape untouched.

use rpcguard_errors::ErrorObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version expected in every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// An inbound call: method name plus positional parameters.
///
/// Transport decoding happens upstream; this type starts where the bytes
/// are already JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Request {
    /// Protocol version tag. Absent or non-`"2.0"` is an invalid request.
    #[serde(default)]
    pub jsonrpc: Option<String>,
    /// Method name to dispatch on.
    pub method: String,
    /// Positional parameters, possibly empty.
    #[serde(default)]
    pub params: Vec<Value>,
    /// Caller correlation id, echoed back verbatim.
    #[serde(default)]
    pub id: Option<Value>,
}

impl Request {
    /// Build a well-formed request with a null id.
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: Some(JSONRPC_VERSION.to_string()),
            method: method.into(),
            params,
            id: None,
        }
    }

    /// Attach a correlation id.
    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// An outbound reply: exactly one of `result` or `error`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    /// Always `"2.0"`.
    pub jsonrpc: String,
    /// Present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Present on failure; code and message come from the fixed taxonomy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
    /// The request's correlation id, echoed back.
    pub id: Option<Value>,
}

impl Response {
    /// A success reply.
    pub fn result(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// A failure reply wrapping a taxonomy error object.
    pub fn error(id: Option<Value>, error: ErrorObject) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }

    /// True when the reply carries an error member.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
