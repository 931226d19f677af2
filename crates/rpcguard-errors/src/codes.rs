//! The reserved error-code table.
//!
//! Codes -32700 through -32602 and -32603 are fixed by the JSON-RPC 2.0
//! standard. Codes -32000..-32099 are implementation-defined server
//! errors; -32001..-32003 are reserved for the request-authentication
//! layer and carry no trigger conditions here.

use crate::object::ErrorObject;

/// Request bytes did not parse as JSON.
pub const PARSE_ERROR: ErrorObject = ErrorObject::new(-32700, "Parse error");

/// Envelope was not a valid JSON-RPC 2.0 request.
pub const INVALID_REQUEST: ErrorObject = ErrorObject::new(-32600, "Invalid Request");

/// No handler registered for the requested method.
pub const METHOD_NOT_FOUND: ErrorObject = ErrorObject::new(-32601, "Method not found");

/// A parameter did not conform to its declared shape.
pub const INVALID_PARAMS: ErrorObject = ErrorObject::new(-32602, "Invalid params");

/// Unexpected server-side failure while handling a valid request.
pub const INTERNAL_ERROR: ErrorObject = ErrorObject::new(-32603, "Internal error");

/// Generic implementation-defined server error.
pub const SERVER_ERROR: ErrorObject = ErrorObject::new(-32000, "Server error");

/// Identity rejected by the authentication layer.
pub const ID_ERROR: ErrorObject = ErrorObject::new(-32001, "Id error");

/// Stale or replayed nonce rejected by the authentication layer.
pub const NONCE_ERROR: ErrorObject = ErrorObject::new(-32002, "Nonce error");

/// Signature rejected by the authentication layer.
pub const SIGNATURE_ERROR: ErrorObject = ErrorObject::new(-32003, "Signature error");

/// Every reserved entry, ordered standard codes first.
pub const ALL: [ErrorObject; 9] = [
    PARSE_ERROR,
    INVALID_REQUEST,
    METHOD_NOT_FOUND,
    INVALID_PARAMS,
    INTERNAL_ERROR,
    SERVER_ERROR,
    ID_ERROR,
    NONCE_ERROR,
    SIGNATURE_ERROR,
];

/// Look up the table entry for a code.
pub fn lookup(code: i64) -> Option<&'static ErrorObject> {
    static TABLE: [ErrorObject; 9] = ALL;
    match code {
        -32700 => Some(&TABLE[0]),
        -32600 => Some(&TABLE[1]),
        -32601 => Some(&TABLE[2]),
        -32602 => Some(&TABLE[3]),
        -32603 => Some(&TABLE[4]),
        -32000 => Some(&TABLE[5]),
        -32001 => Some(&TABLE[6]),
        -32002 => Some(&TABLE[7]),
        -32003 => Some(&TABLE[8]),
        _ => None,
    }
}

/// Returns a short name for a reserved code.
pub fn code_name(code: i64) -> &'static str {
    match code {
        -32700 => "PARSE_ERROR",
        -32600 => "INVALID_REQUEST",
        -32601 => "METHOD_NOT_FOUND",
        -32602 => "INVALID_PARAMS",
        -32603 => "INTERNAL_ERROR",
        -32000 => "SERVER_ERROR",
        -32001 => "ID_ERROR",
        -32002 => "NONCE_ERROR",
        -32003 => "SIGNATURE_ERROR",
        _ => "UNRESERVED",
    }
}

/// True for the four codes fixed verbatim by the JSON-RPC 2.0 wire contract.
pub fn is_standard(code: i64) -> bool {
    matches!(code, -32700 | -32600 | -32601 | -32602)
}

/// True for codes in the implementation-defined server error range.
pub fn is_server_error(code: i64) -> bool {
    (-32099..=-32000).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_codes_are_fixed() {
        assert_eq!(PARSE_ERROR.code, -32700);
        assert_eq!(PARSE_ERROR.message, "Parse error");
        assert_eq!(INVALID_REQUEST.code, -32600);
        assert_eq!(INVALID_REQUEST.message, "Invalid Request");
        assert_eq!(METHOD_NOT_FOUND.code, -32601);
        assert_eq!(METHOD_NOT_FOUND.message, "Method not found");
        assert_eq!(INVALID_PARAMS.code, -32602);
        assert_eq!(INVALID_PARAMS.message, "Invalid params");
    }

    #[test]
    fn extension_codes_sit_in_server_range() {
        for object in [&SERVER_ERROR, &ID_ERROR, &NONCE_ERROR, &SIGNATURE_ERROR] {
            assert!(is_server_error(object.code), "code {}", object.code);
        }
        assert!(!is_server_error(INTERNAL_ERROR.code));
    }

    #[test]
    fn table_entries_carry_no_data() {
        for object in &ALL {
            assert!(object.data.is_none(), "{} has data", object.code);
        }
    }

    #[test]
    fn lookup_finds_every_entry() {
        for object in &ALL {
            assert_eq!(lookup(object.code), Some(object));
        }
        assert_eq!(lookup(0), None);
        assert_eq!(lookup(-32004), None);
    }

    #[test]
    fn code_names_match_table() {
        assert_eq!(code_name(-32602), "INVALID_PARAMS");
        assert_eq!(code_name(-32002), "NONCE_ERROR");
        assert_eq!(code_name(42), "UNRESERVED");
    }

    #[test]
    fn standard_predicate_excludes_internal_error() {
        assert!(is_standard(-32700));
        assert!(is_standard(-32602));
        assert!(!is_standard(-32603));
        assert!(!is_standard(-32000));
    }
}
