//! # apimux-std
//!
//! Standard implementations for the apimux merged API dispatcher.
//!
//! This crate provides:
//! - **Dispatch**: [`Dispatcher`], [`DispatcherBuilder`]
//! - **Method tables**: [`HashMapRouter`](routing::HashMapRouter)
//! - **Module helpers**: [`FnModule`]
//! - **Observability**: [`LoggingObserver`](observers::LoggingObserver),
//!   [`TracedModule`](observers::TracedModule)
//! - **Distributed registration**: `collected` (with the `inventory` feature)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use apimux_core;

// Modules
pub mod dispatcher;
pub mod fn_module;
pub mod observers;
pub mod routing;
pub mod testing;

#[cfg(feature = "inventory")]
pub mod collected;

#[cfg(all(test, feature = "tracing"))]
mod capture;

#[cfg(feature = "inventory")]
pub use inventory;

pub use dispatcher::{
    Dispatcher, DispatcherBuilder, MERGED_API_NAME, MERGED_API_VERSION, MODULES_METHOD,
};
pub use fn_module::FnModule;
