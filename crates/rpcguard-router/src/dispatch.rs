//! The validating dispatch flow.
//!
//! One pass per inbound call: envelope check, method lookup, arity check,
//! per-parameter shape validation, handler invocation. Every failure maps
//! to a fixed taxonomy entry; dispatch itself is total and never panics.

use rpcguard_errors::{INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND};
use rpcguard_typecheck::Value;
use serde_json::json;
use tracing::debug;

use crate::envelope::{Request, Response, JSONRPC_VERSION};
use crate::registry::MethodTable;

impl MethodTable {
    /// Dispatch one request to its handler, validating parameters first.
    ///
    /// Handlers returning `Err` pass their error object through to the
    /// response unchanged; the reserved authentication codes (-32001,
    /// -32002, -32003) travel this path.
    pub fn dispatch(&self, request: &Request) -> Response {
        let id = request.id.clone();

        if request.jsonrpc.as_deref() != Some(JSONRPC_VERSION) {
            debug!(method = %request.method, "rejecting envelope without jsonrpc 2.0 tag");
            return Response::error(
                id,
                INVALID_REQUEST.with_data(format!("expected jsonrpc {JSONRPC_VERSION:?}")),
            );
        }

        let Some(method) = self.methods.get(&request.method) else {
            debug!(method = %request.method, "unknown method");
            return Response::error(id, METHOD_NOT_FOUND.with_data(request.method.clone()));
        };

        if request.params.len() != method.params.len() {
            return Response::error(
                id,
                INVALID_PARAMS.with_data(json!({
                    "expected": method.params.len(),
                    "actual": request.params.len(),
                })),
            );
        }

        let params: Vec<Value> = request.params.iter().map(Value::from_json).collect();
        for (position, (spec, value)) in method.params.iter().zip(&params).enumerate() {
            if let Err(mismatch) = spec.validate(value) {
                debug!(
                    method = %request.method,
                    position,
                    error = %mismatch,
                    "parameter failed validation"
                );
                let mut data = mismatch.data();
                if let Some(entries) = data.as_object_mut() {
                    entries.insert("position".to_string(), json!(position));
                    entries.insert("message".to_string(), json!(mismatch.to_string()));
                }
                return Response::error(id, INVALID_PARAMS.with_data(data));
            }
        }

        match (method.handler)(&params) {
            Ok(result) => match result.to_json() {
                Some(result) => Response::result(id, result),
                None => Response::error(
                    id,
                    INTERNAL_ERROR.with_data("handler returned a value with no wire form"),
                ),
            },
            Err(error) => Response::error(id, error),
        }
    }
}
