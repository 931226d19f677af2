//! The untyped value model seen at the RPC boundary.
//!
//! A superset of the JSON data model extended with the domain kinds the
//! checker must tell apart: binary buffers, byte-value wrappers, and
//! callables. Integral and fractional numbers share one kind; integer
//! descriptors test the numeric value, never the literal it came from.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use rpcguard_errors::ErrorObject;

use crate::bytes::ByteValue;

/// Signature carried by callable values.
///
/// The error side is the shared error-object vocabulary: a failing
/// handler returns a taxonomy entry the boundary can put on the wire.
pub type Handler = Arc<dyn Fn(&[Value]) -> Result<Value, ErrorObject> + Send + Sync>;

/// An arbitrary runtime value awaiting classification.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    /// Fixed-width binary content, distinct from a generic array.
    Buffer(Bytes),
    /// The domain byte wrapper, distinct from a raw hex string.
    Bytes(ByteValue),
    /// An invocable value.
    Callable(Handler),
}

impl Value {
    /// Wrap a handler function as a callable value.
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, ErrorObject> + Send + Sync + 'static,
    {
        Value::Callable(Arc::new(f))
    }

    /// Short name of the runtime kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Buffer(_) => "buffer",
            Value::Bytes(_) => "byte value",
            Value::Callable(_) => "callable",
        }
    }

    /// Display form used in failure diagnoses.
    ///
    /// Strings render quoted; every other kind renders as-is.
    pub fn render(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(flag) => flag.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(text) => format!("\"{text}\""),
            Value::Array(items) => {
                let parts: Vec<String> = items.iter().map(Value::render).collect();
                format!("[{}]", parts.join(", "))
            }
            Value::Object(entries) => {
                let parts: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("{key}: {}", value.render()))
                    .collect();
                format!("{{{}}}", parts.join(", "))
            }
            Value::Buffer(content) => format!("<buffer {} bytes>", content.len()),
            Value::Bytes(value) => value.hex(),
            Value::Callable(_) => "<callable>".to_string(),
        }
    }

    /// Lift a borrowed JSON value into the domain model.
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(*flag),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(text) => Value::String(text.clone()),
            serde_json::Value::Array(items) => {
                Value::Array(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::from_json(value)))
                    .collect(),
            ),
        }
    }

    /// Lower a value back to JSON for the wire.
    ///
    /// Buffers and byte values lower to their hex rendering; callables
    /// have no wire form and return `None`.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Value::Null => Some(serde_json::Value::Null),
            Value::Bool(flag) => Some(serde_json::Value::Bool(*flag)),
            Value::Number(n) => serde_json::Number::from_f64(*n).map(serde_json::Value::Number),
            Value::String(text) => Some(serde_json::Value::String(text.clone())),
            Value::Array(items) => items
                .iter()
                .map(Value::to_json)
                .collect::<Option<Vec<_>>>()
                .map(serde_json::Value::Array),
            Value::Object(entries) => entries
                .iter()
                .map(|(key, value)| value.to_json().map(|json| (key.clone(), json)))
                .collect::<Option<serde_json::Map<_, _>>>()
                .map(serde_json::Value::Object),
            Value::Buffer(content) => Some(serde_json::Value::String(
                ByteValue::from_slice(content).hex(),
            )),
            Value::Bytes(value) => Some(serde_json::Value::String(value.hex())),
            Value::Callable(_) => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(flag) => f.debug_tuple("Bool").field(flag).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(text) => f.debug_tuple("String").field(text).finish(),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Object(entries) => f.debug_tuple("Object").field(entries).finish(),
            Value::Buffer(content) => f.debug_tuple("Buffer").field(content).finish(),
            Value::Bytes(value) => f.debug_tuple("Bytes").field(value).finish(),
            Value::Callable(_) => f.write_str("Callable(<fn>)"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Buffer(a), Value::Buffer(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::from_json(&json)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::String(text)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<ByteValue> for Value {
    fn from(value: ByteValue) -> Self {
        Value::Bytes(value)
    }
}

impl From<Bytes> for Value {
    fn from(content: Bytes) -> Self {
        Value::Buffer(content)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn strings_render_quoted_others_as_is() {
        assert_eq!(Value::from("2").render(), "\"2\"");
        assert_eq!(Value::from(2i64).render(), "2");
        assert_eq!(Value::from(2.222).render(), "2.222");
        assert_eq!(Value::Null.render(), "null");
        assert_eq!(
            Value::from(vec![Value::from(1i64), Value::from("x")]).render(),
            "[1, \"x\"]"
        );
    }

    #[test]
    fn byte_values_render_as_hex() {
        let value = Value::from(ByteValue::from_hex("0x2344").expect("valid hex should parse"));
        assert_eq!(value.render(), "0x2344");
        assert_eq!(value.kind(), "byte value");
    }

    #[test]
    fn json_lifts_to_matching_kinds() {
        let lifted = Value::from(json!({
            "count": 3,
            "label": "peers",
            "flags": [true, false],
            "nested": { "empty": null }
        }));

        let Value::Object(entries) = &lifted else {
            panic!("object json should lift to an object value");
        };
        assert_eq!(entries["count"], Value::Number(3.0));
        assert_eq!(entries["label"], Value::from("peers"));
        assert_eq!(
            entries["flags"],
            Value::Array(vec![Value::Bool(true), Value::Bool(false)])
        );
    }

    #[test]
    fn to_json_lowers_buffers_to_hex() {
        let buffer = Value::from(Bytes::from_static(&[0x01, 0x02]));
        assert_eq!(buffer.to_json(), Some(json!("0x0102")));

        let wrapped = Value::from(ByteValue::from_slice(&[0xab]));
        assert_eq!(wrapped.to_json(), Some(json!("0xab")));
    }

    #[test]
    fn callables_have_no_wire_form() {
        let handler = Value::callable(|_params| Ok(Value::Null));
        assert_eq!(handler.to_json(), None);
        assert_eq!(handler.render(), "<callable>");
    }

    #[test]
    fn callable_equality_is_identity() {
        let a = Value::callable(|_params| Ok(Value::Null));
        let b = a.clone();
        let c = Value::callable(|_params| Ok(Value::Null));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
