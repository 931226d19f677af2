//! Fixed JSON-RPC 2.0 error objects plus protocol extensions.
//!
//! Every error a conforming server may emit lives in one read-only table,
//! initialized at process start and shared by reference across callers.
//! Wrap one of the table entries, never invent codes ad hoc.

pub mod codes;
pub mod object;

pub use codes::{
    code_name, is_server_error, is_standard, lookup, ALL, ID_ERROR, INTERNAL_ERROR,
    INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, NONCE_ERROR, PARSE_ERROR, SERVER_ERROR,
    SIGNATURE_ERROR,
};
pub use object::{get_error, ErrorObject, RpcError};
