//! # apimux - Merged API Dispatcher
//!
//! `apimux` merges several independently implemented API modules into a
//! single callable surface. Each request names a method; the dispatcher
//! forwards it to the module that advertised that method, answers the
//! reserved `modules` introspection call itself, and reports anything else
//! as not implemented.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use apimux::prelude::*;
//! use serde_json::json;
//!
//! let net = FnModule::new("net", "1.0")
//!     .method("net_version", |_req| async { Ok(json!("1")) });
//!
//! let dispatcher = Dispatcher::builder()
//!     .register(eth)
//!     .register(net)
//!     .observer(LoggingObserver::new())
//!     .build();
//!
//! let modules = dispatcher.execute(&Request::method_only("modules")).await?;
//! assert_eq!(modules, json!({ "eth": "1.0", "net": "1.0" }));
//! ```
//!
//! A [`Dispatcher`] is itself a [`Module`], so dispatchers nest.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use apimux_core::{
    // Error types
    BoxError,
    // Module
    BoxFuture,
    DynModule,
    // Observation
    RequestObserver,
    Module,
    ModuleResult,
    // Request
    Request,
    // Router Traits
    RouteResult,
    Router,
    RpcError,
    Value,
    error_code,
    error_codes,
};

// Dispatch
pub use apimux_std::{
    Dispatcher, DispatcherBuilder, FnModule, MERGED_API_NAME, MERGED_API_VERSION, MODULES_METHOD,
};

/// Method table implementations.
pub mod routing {
    pub use apimux_std::routing::HashMapRouter;
}

/// Standard observability implementations.
pub mod observers {
    pub use apimux_std::observers::{LoggingObserver, TracedModule};
}

pub use observers::{LoggingObserver, TracedModule};

/// Testing utilities.
pub mod testing {
    pub use apimux_std::testing::{FailingModule, RecordingModule, RecordingObserver};
}

/// Distributed module registration.
#[cfg(feature = "inventory")]
pub mod collected {
    pub use apimux_std::collected::{CollectedModule, collect_modules};
}

#[cfg(feature = "inventory")]
pub use apimux_std::submit_module;

/// Prelude module - common imports for apimux.
///
/// # Usage
///
/// ```rust,ignore
/// use apimux::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Dispatcher, DynModule, FnModule, LoggingObserver, Module, ModuleResult, Request,
        RequestObserver, RpcError, Value,
    };
}

#[cfg(feature = "macros")]
pub use apimux_macros::module;
