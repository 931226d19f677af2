//! Validation: a failed check with a diagnosis attached.

use serde_json::json;

use crate::check::check;
use crate::descriptor::{Descriptor, TYPES_REFERENCE};
use crate::value::Value;

pub type Result<T> = std::result::Result<T, TypeMismatch>;

/// A value failed to conform to the expected shape(s).
///
/// Carries the full diagnosis: the offending value's display form, the
/// descriptor(s) it was checked against, and a documentation link. The
/// rendered message always contains the `is an invalid value` marker and
/// ends with a non-empty `More information:` suffix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{value} is an invalid value for {}. More information: {reference}", expected_label(.expected))]
pub struct TypeMismatch {
    /// Display form of the offending value (strings quoted).
    pub value: String,
    /// The descriptor(s) the value was checked against, in input order.
    pub expected: Vec<Descriptor>,
    /// Documentation link for the first expected shape.
    pub reference: &'static str,
}

impl TypeMismatch {
    /// Diagnosis payload in wire form, suitable for an error object's
    /// `data` member.
    pub fn data(&self) -> serde_json::Value {
        let expected: Vec<&'static str> =
            self.expected.iter().map(Descriptor::name).collect();
        json!({
            "value": self.value,
            "expected": expected,
            "reference": self.reference,
        })
    }
}

fn expected_label(expected: &[Descriptor]) -> String {
    match expected {
        [] => "any known type".to_string(),
        [single] => format!("type {single}"),
        many => {
            let names: Vec<&'static str> = many.iter().map(Descriptor::name).collect();
            format!("any of the types {}", names.join(", "))
        }
    }
}

/// Check `value` against `descriptor`, returning a diagnosis on mismatch.
pub fn validate(value: &Value, descriptor: Descriptor) -> Result<()> {
    if check(value, descriptor) {
        return Ok(());
    }

    Err(TypeMismatch {
        value: value.render(),
        expected: vec![descriptor],
        reference: descriptor.reference(),
    })
}

/// Union composition: conforms when any descriptor in the list accepts
/// the value. Short-circuits on the first hit; list order never changes
/// the outcome, only which shape leads the diagnosis.
pub fn validate_any(value: &Value, descriptors: &[Descriptor]) -> Result<()> {
    if descriptors.iter().any(|descriptor| check(value, *descriptor)) {
        return Ok(());
    }

    let reference = descriptors
        .first()
        .map(Descriptor::reference)
        .unwrap_or(TYPES_REFERENCE);

    Err(TypeMismatch {
        value: value.render(),
        expected: descriptors.to_vec(),
        reference,
    })
}
