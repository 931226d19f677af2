//! JSON-RPC method table and validating dispatch boundary.
//!
//! The boundary layer in front of a handler: look up the method, check
//! every parameter against its declared shape, and turn any failure into
//! a taxonomy error object before a handler ever runs. Handlers are
//! opaque callables; transport, authentication, and business logic live
//! elsewhere.

pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod registry;

pub use envelope::{Request, Response, JSONRPC_VERSION};
pub use error::{RegistryError, Result};
pub use registry::{MethodTable, ParamSpec};
