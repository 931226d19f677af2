use rpcguard_typecheck::TypeMismatch;

/// Errors that can occur while building a method table.
///
/// Dispatch itself never fails; only registration does.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// Method names must be non-empty.
    #[error("invalid method name: {0:?}")]
    InvalidName(String),

    /// A method with this name is already registered.
    #[error("method {0:?} already registered")]
    DuplicateMethod(String),

    /// The supplied handler is not a callable value.
    #[error("handler rejected: {0}")]
    HandlerNotCallable(#[from] TypeMismatch),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
