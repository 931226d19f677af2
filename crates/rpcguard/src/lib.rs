//! Request validation and error reporting for JSON-RPC services.
//!
//! rpcguard decides whether an arbitrary, untyped value conforms to a
//! declared shape, and turns a refusal into a precise, machine- and
//! human-readable diagnosis wrapped in a fixed JSON-RPC error taxonomy.
//!
//! # Crate Structure
//!
//! - [`errors`] — Fixed JSON-RPC 2.0 error objects and the formatter
//! - [`typecheck`] — Type descriptors, values, and conformance checks
//! - [`router`] — Method table and validating dispatch (behind `router` feature)

/// Re-export error taxonomy types.
pub mod errors {
    pub use rpcguard_errors::*;
}

/// Re-export type descriptor and checker types.
pub mod typecheck {
    pub use rpcguard_typecheck::*;
}

/// Re-export dispatch types (requires `router` feature).
#[cfg(feature = "router")]
pub mod router {
    pub use rpcguard_router::*;
}
