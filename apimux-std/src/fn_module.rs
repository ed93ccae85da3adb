//! Closure-backed modules.

use apimux_core::{Module, ModuleResult, Request, RpcError};
use futures::future::{BoxFuture, FutureExt};
use std::{collections::HashMap, fmt, future::Future};

type MethodFn = Box<dyn Fn(Request) -> BoxFuture<'static, ModuleResult> + Send + Sync>;

/// A module assembled from async closures, one per method.
///
/// Methods are advertised in the order they were first added. Adding a
/// method name again replaces its handler.
///
/// # Example
///
/// ```rust,ignore
/// let net = FnModule::new("net", "1.0")
///     .method("net_version", |_req| async { Ok(json!("1")) })
///     .method("net_listening", |_req| async { Ok(json!(true)) });
/// ```
pub struct FnModule {
    name: String,
    version: String,
    order: Vec<String>,
    handlers: HashMap<String, MethodFn>,
}

impl FnModule {
    /// Create a module with no methods.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            order: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Add a method handler.
    pub fn method<F, Fut>(mut self, method: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ModuleResult> + Send + 'static,
    {
        let method = method.into();
        if !self.handlers.contains_key(&method) {
            self.order.push(method.clone());
        }
        self.handlers
            .insert(method, Box::new(move |request| handler(request).boxed()));
        self
    }
}

impl Module for FnModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn methods(&self) -> Vec<String> {
        self.order.clone()
    }

    async fn execute(&self, request: &Request) -> ModuleResult {
        match self.handlers.get(request.method.as_str()) {
            Some(handler) => handler(request.clone()).await,
            None => Err(RpcError::not_implemented(request.method.as_str())),
        }
    }
}

impl fmt::Debug for FnModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnModule")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("methods", &self.order)
            .finish()
    }
}
