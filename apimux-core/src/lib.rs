//! # apimux-core
//!
//! Core traits for the apimux merged API dispatcher.
//!
//! This crate has minimal dependencies and is meant to be imported by module
//! implementations that don't need the full `apimux-std` dispatcher.
//!
//! # Pieces
//!
//! - [`Module`] / [`DynModule`] - a provider of named methods
//! - [`Request`] - a method name plus opaque positional parameters
//! - [`RequestObserver`] - a diagnostic collaborator injected into dispatchers
//! - [`Router`] - method-name lookup
//!
//! # Error Types
//!
//! - [`BoxError`] - the currency modules report failures in
//! - [`RpcError`] - shared taxonomy, including `NotImplemented`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod module;
mod observer;
mod request;
mod router;

// Re-exports
pub use error::{BoxError, RpcError, error_code, error_codes};
pub use module::{BoxFuture, DynModule, Module, ModuleResult};
pub use observer::RequestObserver;
pub use request::Request;
pub use router::{RouteResult, Router};

/// Re-exported so module implementations and generated code share one JSON type.
pub use serde_json::Value;
