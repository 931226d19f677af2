//! Type descriptors and conformance checks for untyped RPC values.
//!
//! Classify arbitrary inbound values against a closed set of shape
//! variants before they reach a handler. Catch malformed parameters at
//! the boundary, with a diagnosis the caller can put on the wire.
//!
//! The engine is three pure functions over immutable data: [`check`]
//! answers yes/no, [`validate`] and [`validate_any`] turn a no into a
//! structured [`TypeMismatch`].

pub mod bytes;
pub mod check;
pub mod descriptor;
pub mod validate;
pub mod value;

pub use bytes::{Address, ByteValue, HexError};
pub use check::check;
pub use descriptor::{Descriptor, UnknownDescriptor};
pub use validate::{validate, validate_any, Result, TypeMismatch};
pub use value::{Handler, Value};
