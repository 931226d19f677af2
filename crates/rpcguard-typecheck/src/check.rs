//! The conformance predicate.

use crate::descriptor::Descriptor;
use crate::value::Value;

/// Decide whether `value` conforms to `descriptor`.
///
/// Pure predicate over its arguments: no side effects, never fails, same
/// answer on every call. Exactly one arm per descriptor variant, so a new
/// variant cannot be added without deciding its rule here.
pub fn check(value: &Value, descriptor: Descriptor) -> bool {
    match descriptor {
        Descriptor::Number => matches!(value, Value::Number(_)),
        Descriptor::String => matches!(value, Value::String(_)),
        Descriptor::Hex => matches!(value, Value::String(text) if is_hex_string(text)),
        Descriptor::Int => matches!(value, Value::Number(n) if is_integer_valued(*n)),
        Descriptor::Uint => {
            matches!(value, Value::Number(n) if is_integer_valued(*n) && *n >= 0.0)
        }
        Descriptor::Uint8 => {
            matches!(value, Value::Number(n) if is_integer_valued(*n) && *n >= 0.0 && *n <= 255.0)
        }
        // Buffers are iterable but are not arrays.
        Descriptor::Array => matches!(value, Value::Array(_)),
        Descriptor::Buffer => matches!(value, Value::Buffer(_)),
        // Object is the structural superset: arrays, buffers, and byte
        // values all qualify; primitives and callables do not.
        Descriptor::Object => matches!(
            value,
            Value::Object(_) | Value::Array(_) | Value::Buffer(_) | Value::Bytes(_)
        ),
        Descriptor::Callable => matches!(value, Value::Callable(_)),
        Descriptor::Bytes => matches!(value, Value::Bytes(_)),
    }
}

/// Integer test on the numeric value, not the literal: 2.0 passes, 2.222
/// fails, non-finite numbers fail.
fn is_integer_valued(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

/// `0x` prefix followed by hex digits only; an empty digit run is fine.
fn is_hex_string(text: &str) -> bool {
    match text.strip_prefix("0x") {
        Some(digits) => digits.chars().all(|ch| ch.is_ascii_hexdigit()),
        None => false,
    }
}
