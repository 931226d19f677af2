use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON-RPC error object: stable numeric code, short message, optional
/// diagnostic payload.
///
/// The process-wide table in [`crate::codes`] holds one constant per
/// reserved code; callers attach per-call context with [`with_data`].
///
/// [`with_data`]: ErrorObject::with_data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    /// Numeric error code. The `-32700..-32600` range is fixed by the
    /// JSON-RPC 2.0 standard and must survive the wire verbatim.
    pub code: i64,
    /// Short, stable message for the code.
    pub message: Cow<'static, str>,
    /// Optional diagnostic payload carried in the `data` member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorObject {
    /// Create an error object with no diagnostic payload.
    pub const fn new(code: i64, message: &'static str) -> Self {
        Self {
            code,
            message: Cow::Borrowed(message),
            data: None,
        }
    }

    /// Attach a diagnostic payload, consuming the table entry copy.
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// True when the `data` member would be rendered by [`get_error`].
    ///
    /// An empty string and `null` count as absent.
    pub fn has_data(&self) -> bool {
        match &self.data {
            None | Some(Value::Null) => false,
            Some(Value::String(text)) => !text.is_empty(),
            Some(_) => true,
        }
    }
}

impl fmt::Display for ErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)?;
        if self.has_data() {
            match &self.data {
                Some(Value::String(text)) => write!(f, ": {text}")?,
                Some(other) => write!(f, ": {other}")?,
                None => {}
            }
        }
        Ok(())
    }
}

/// An error object promoted to a propagatable error value.
///
/// Rendering is the error object's own: `"<message> (<code>)"`, with
/// `": <data>"` appended only when a payload is present.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct RpcError(pub ErrorObject);

impl RpcError {
    /// The numeric code of the underlying error object.
    pub fn code(&self) -> i64 {
        self.0.code
    }
}

impl From<ErrorObject> for RpcError {
    fn from(object: ErrorObject) -> Self {
        Self(object)
    }
}

/// Turn a table entry into an error value ready to be returned or logged.
///
/// Total over any well-formed error object; this function cannot fail.
pub fn get_error(object: &ErrorObject) -> RpcError {
    RpcError(object.clone())
}
