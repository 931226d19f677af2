//! The closed set of accepted value shapes.

use std::fmt;
use std::str::FromStr;

/// Documentation root linked from every failure diagnosis.
pub const TYPES_REFERENCE: &str = "https://docs.3leaps.dev/rpcguard/types";

/// An immutable tag naming one accepted value shape.
///
/// Descriptors are stateless: declare them once, reuse them across every
/// call. The enumeration is closed; `check` matches exhaustively, so a
/// new variant fails to compile until every operation handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Descriptor {
    /// Any numeric value, integral or fractional.
    Number,
    /// Any textual value.
    String,
    /// Text of the form `0x` + hex digits (the digit run may be empty).
    Hex,
    /// Numeric with no fractional part, any sign.
    Int,
    /// Numeric, no fractional part, non-negative.
    Uint,
    /// Unsigned integer within [0, 255].
    Uint8,
    /// An ordered sequence, excluding binary buffers.
    Array,
    /// Fixed-width binary content.
    Buffer,
    /// Any structural value; arrays and buffers qualify.
    Object,
    /// An invocable value.
    Callable,
    /// The domain byte wrapper, never a raw string.
    Bytes,
}

impl Descriptor {
    /// Every variant, in declaration order.
    pub const ALL: [Descriptor; 11] = [
        Descriptor::Number,
        Descriptor::String,
        Descriptor::Hex,
        Descriptor::Int,
        Descriptor::Uint,
        Descriptor::Uint8,
        Descriptor::Array,
        Descriptor::Buffer,
        Descriptor::Object,
        Descriptor::Callable,
        Descriptor::Bytes,
    ];

    /// Human-readable name used in diagnoses.
    pub fn name(&self) -> &'static str {
        match self {
            Descriptor::Number => "number",
            Descriptor::String => "string",
            Descriptor::Hex => "hex string",
            Descriptor::Int => "signed integer",
            Descriptor::Uint => "unsigned integer",
            Descriptor::Uint8 => "unsigned integer (8-bit)",
            Descriptor::Array => "array",
            Descriptor::Buffer => "buffer",
            Descriptor::Object => "object",
            Descriptor::Callable => "callable",
            Descriptor::Bytes => "byte value",
        }
    }

    /// Documentation link for this shape. Never empty.
    pub fn reference(&self) -> &'static str {
        match self {
            Descriptor::Number => "https://docs.3leaps.dev/rpcguard/types#number",
            Descriptor::String => "https://docs.3leaps.dev/rpcguard/types#string",
            Descriptor::Hex => "https://docs.3leaps.dev/rpcguard/types#hex-string",
            Descriptor::Int => "https://docs.3leaps.dev/rpcguard/types#signed-integer",
            Descriptor::Uint => "https://docs.3leaps.dev/rpcguard/types#unsigned-integer",
            Descriptor::Uint8 => "https://docs.3leaps.dev/rpcguard/types#unsigned-integer-8",
            Descriptor::Array => "https://docs.3leaps.dev/rpcguard/types#array",
            Descriptor::Buffer => "https://docs.3leaps.dev/rpcguard/types#binary-buffer",
            Descriptor::Object => "https://docs.3leaps.dev/rpcguard/types#object",
            Descriptor::Callable => "https://docs.3leaps.dev/rpcguard/types#callable",
            Descriptor::Bytes => "https://docs.3leaps.dev/rpcguard/types#byte-value",
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The text did not name a known descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type descriptor {0:?}")]
pub struct UnknownDescriptor(pub String);

impl FromStr for Descriptor {
    type Err = UnknownDescriptor;

    /// Accepts the kebab-case shape names plus their long spellings.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "number" => Ok(Descriptor::Number),
            "string" => Ok(Descriptor::String),
            "hex" | "hex-string" => Ok(Descriptor::Hex),
            "int" | "signed-integer" => Ok(Descriptor::Int),
            "uint" | "unsigned-integer" => Ok(Descriptor::Uint),
            "uint8" | "unsigned-integer-8" => Ok(Descriptor::Uint8),
            "array" => Ok(Descriptor::Array),
            "buffer" | "binary-buffer" => Ok(Descriptor::Buffer),
            "object" => Ok(Descriptor::Object),
            "callable" => Ok(Descriptor::Callable),
            "bytes" | "byte-value" => Ok(Descriptor::Bytes),
            other => Err(UnknownDescriptor(other.to_string())),
        }
    }
}
