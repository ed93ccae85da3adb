//! # Module
//!
//! A module is an independently implemented provider of one or more named
//! methods. The dispatcher merges any number of modules into one surface and
//! forwards each request to the module that advertised its method.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`Module`] uses `impl Future` returns so implementors can write plain
//! `async fn execute`. The dispatcher stores modules behind `Arc<dyn DynModule>`;
//! every `Module` is a [`DynModule`] through a blanket implementation.

use crate::{error::BoxError, request::Request};
use serde_json::Value;
use std::{future::Future, pin::Pin, sync::Arc};

/// The outcome of executing a request.
pub type ModuleResult = Result<Value, BoxError>;

/// A boxed, sendable future.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A provider of named, remotely callable methods.
///
/// # Example
///
/// ```rust,ignore
/// struct Net;
///
/// impl Module for Net {
///     fn name(&self) -> &str { "net" }
///     fn version(&self) -> &str { "1.0" }
///     fn methods(&self) -> Vec<String> { vec!["net_version".into()] }
///
///     async fn execute(&self, request: &Request) -> ModuleResult {
///         match request.method.as_str() {
///             "net_version" => Ok(json!("1")),
///             other => Err(RpcError::not_implemented(other)),
///         }
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an API module",
    label = "missing `Module` implementation",
    note = "Modules must implement `name`, `version`, `methods` and `execute`."
)]
pub trait Module: Send + Sync + 'static {
    /// Unique module name, reported by the `modules` introspection call.
    fn name(&self) -> &str;

    /// Module version string.
    fn version(&self) -> &str;

    /// Method names this module can execute, in advertisement order.
    fn methods(&self) -> Vec<String>;

    /// Execute a request routed to this module.
    fn execute(&self, request: &Request) -> impl Future<Output = ModuleResult> + Send;
}

/// Dynamic object-safe version of [`Module`].
pub trait DynModule: Send + Sync + 'static {
    /// See [`Module::name`].
    fn module_name(&self) -> &str;

    /// See [`Module::version`].
    fn module_version(&self) -> &str;

    /// See [`Module::methods`].
    fn module_methods(&self) -> Vec<String>;

    /// See [`Module::execute`].
    fn execute_dyn<'a>(&'a self, request: &'a Request) -> BoxFuture<'a, ModuleResult>;
}

impl<T: Module> DynModule for T {
    fn module_name(&self) -> &str {
        Module::name(self)
    }

    fn module_version(&self) -> &str {
        Module::version(self)
    }

    fn module_methods(&self) -> Vec<String> {
        Module::methods(self)
    }

    fn execute_dyn<'a>(&'a self, request: &'a Request) -> BoxFuture<'a, ModuleResult> {
        Box::pin(Module::execute(self, request))
    }
}

impl Module for Arc<dyn DynModule> {
    fn name(&self) -> &str {
        self.as_ref().module_name()
    }

    fn version(&self) -> &str {
        self.as_ref().module_version()
    }

    fn methods(&self) -> Vec<String> {
        self.as_ref().module_methods()
    }

    async fn execute(&self, request: &Request) -> ModuleResult {
        self.as_ref().execute_dyn(request).await
    }
}

impl Module for Box<dyn DynModule> {
    fn name(&self) -> &str {
        self.as_ref().module_name()
    }

    fn version(&self) -> &str {
        self.as_ref().module_version()
    }

    fn methods(&self) -> Vec<String> {
        self.as_ref().module_methods()
    }

    async fn execute(&self, request: &Request) -> ModuleResult {
        self.as_ref().execute_dyn(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RpcError;
    use serde_json::json;

    struct Net;

    impl Module for Net {
        fn name(&self) -> &str {
            "net"
        }

        fn version(&self) -> &str {
            "1.0"
        }

        fn methods(&self) -> Vec<String> {
            vec!["net_version".into()]
        }

        async fn execute(&self, request: &Request) -> ModuleResult {
            match request.method.as_str() {
                "net_version" => Ok(json!("1")),
                other => Err(RpcError::not_implemented(other)),
            }
        }
    }

    #[tokio::test]
    async fn test_arc_dyn_module_delegates() {
        let module: Arc<dyn DynModule> = Arc::new(Net);

        assert_eq!(module.name(), "net");
        assert_eq!(module.version(), "1.0");
        assert_eq!(module.methods(), vec!["net_version".to_string()]);

        let value = module
            .execute(&Request::method_only("net_version"))
            .await
            .unwrap();
        assert_eq!(value, json!("1"));
    }

    #[tokio::test]
    async fn test_box_dyn_module_passes_errors_through() {
        let module: Box<dyn DynModule> = Box::new(Net);

        let err = module
            .execute(&Request::method_only("net_peerCount"))
            .await
            .unwrap_err();
        assert_eq!(RpcError::as_not_implemented(&err), Some("net_peerCount"));
    }
}
