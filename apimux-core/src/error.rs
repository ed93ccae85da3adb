//! Error types for apimux.
//!
//! Modules report failures as [`BoxError`], so a module's own error type
//! survives dispatch unchanged and dispatchers can be nested without
//! re-wrapping. [`RpcError`] is the taxonomy shared by the dispatcher and
//! module authors who have no error type of their own:
//!
//! - [`RpcError::NotImplemented`] - the only error a dispatcher originates
//! - the remaining variants - parameter and availability failures for modules
//!
//! [`error_code`] classifies any boxed error into a JSON-RPC code.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Standard JSON-RPC error codes.
pub mod error_codes {
    /// The method does not exist.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
    /// Method exists but its backend is unavailable.
    pub const NOT_AVAILABLE: i32 = -32000;
    /// Method exists but is not ready to serve yet.
    pub const NOT_READY: i32 = -32001;
    /// Method exists but the requested variant is unsupported.
    pub const NOT_SUPPORTED: i32 = -32002;
}

/// Errors shared between the dispatcher and module implementations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    /// No reserved handler and no registered module claims the method.
    #[error("{0} method not implemented")]
    NotImplemented(String),

    /// Fewer parameters than the method requires.
    #[error("insufficient params, want {want} have {have}")]
    InsufficientParams {
        /// Required parameter count.
        want: usize,
        /// Supplied parameter count.
        have: usize,
    },

    /// A parameter had the wrong JSON type.
    #[error("invalid type on field {field}: {expected}")]
    InvalidType {
        /// Offending field or position.
        field: String,
        /// Description of the expected type.
        expected: String,
    },

    /// A parameter could not be decoded.
    #[error("could not decode, {0}")]
    DecodeParam(String),

    /// A parameter decoded but failed validation.
    #[error("{field} not valid, {reason}")]
    Validation {
        /// Offending field.
        field: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The method is known but its backend is not available.
    #[error("{method} method not available: {reason}")]
    NotAvailable {
        /// Requested method.
        method: String,
        /// Why it is unavailable.
        reason: String,
    },

    /// The method is known but not ready to serve.
    #[error("{0} method not ready")]
    NotReady(String),

    /// The method is known but the requested variant is unsupported.
    #[error("{0} not supported")]
    NotSupported(String),
}

impl RpcError {
    /// Create a boxed [`RpcError::NotImplemented`] for `method`.
    pub fn not_implemented(method: impl Into<String>) -> BoxError {
        Box::new(RpcError::NotImplemented(method.into()))
    }

    /// The JSON-RPC error code for this error.
    pub fn code(&self) -> i32 {
        match self {
            RpcError::NotImplemented(_) => error_codes::METHOD_NOT_FOUND,
            RpcError::InsufficientParams { .. }
            | RpcError::InvalidType { .. }
            | RpcError::DecodeParam(_)
            | RpcError::Validation { .. } => error_codes::INVALID_PARAMS,
            RpcError::NotAvailable { .. } => error_codes::NOT_AVAILABLE,
            RpcError::NotReady(_) => error_codes::NOT_READY,
            RpcError::NotSupported(_) => error_codes::NOT_SUPPORTED,
        }
    }

    /// If `err` is a not-implemented error, return the requested method name.
    pub fn as_not_implemented(err: &BoxError) -> Option<&str> {
        match err.downcast_ref::<RpcError>() {
            Some(RpcError::NotImplemented(method)) => Some(method.as_str()),
            _ => None,
        }
    }
}

/// Classify a boxed error into a JSON-RPC error code.
///
/// Errors that are not an [`RpcError`] map to [`error_codes::INTERNAL_ERROR`].
pub fn error_code(err: &BoxError) -> i32 {
    err.downcast_ref::<RpcError>()
        .map(RpcError::code)
        .unwrap_or(error_codes::INTERNAL_ERROR)
}
