//! Merged API dispatcher.
//!
//! A [`Dispatcher`] merges any number of modules into one callable surface.
//! It is built once through [`DispatcherBuilder`] and is read-only afterwards,
//! so it can be shared across tasks without locking.
//!
//! Resolution order for a request:
//!
//! 1. the reserved `modules` method answers with the module registry
//! 2. the method table routes to the module that advertised the method
//! 3. anything else fails with [`RpcError::NotImplemented`]

use crate::routing::HashMapRouter;
use apimux_core::{
    DynModule, Module, ModuleResult, Request, RequestObserver, RouteResult, Router, RpcError,
    Value,
};
use std::{collections::BTreeMap, fmt, sync::Arc};

/// Name reported by a dispatcher unless overridden.
pub const MERGED_API_NAME: &str = "merged";

/// Version reported by a dispatcher unless overridden.
pub const MERGED_API_VERSION: &str = "1.0";

/// Reserved method answered by the dispatcher itself.
pub const MODULES_METHOD: &str = "modules";

/// A dispatcher routing requests to the module that owns each method.
pub struct Dispatcher {
    name: String,
    version: String,
    modules: BTreeMap<String, String>,
    methods: HashMapRouter<Arc<dyn DynModule>>,
    observer: Option<Arc<dyn RequestObserver>>,
}

impl Dispatcher {
    /// Build a dispatcher from modules in registration order.
    ///
    /// When two modules advertise the same method, the later one wins.
    pub fn new<I>(modules: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn DynModule>>,
    {
        DispatcherBuilder::new().extend(modules).build()
    }

    /// Create a new builder.
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// Module name to version for every registered module.
    pub fn modules(&self) -> &BTreeMap<String, String> {
        &self.modules
    }

    /// Name of the module that services `method`, if any.
    pub fn owner_of(&self, method: &str) -> Option<&str> {
        self.methods
            .route(method)
            .matched()
            .map(|module| module.module_name())
    }

    /// Check whether `method` is routed to a module.
    pub fn contains(&self, method: &str) -> bool {
        self.methods.contains(method)
    }

    /// Number of dispatchable methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Check whether no method is dispatchable.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    fn handle_reserved(&self, request: &Request) -> Option<Value> {
        match request.method.as_str() {
            MODULES_METHOD => Some(Value::Object(
                self.modules
                    .iter()
                    .map(|(name, version)| (name.clone(), Value::String(version.clone())))
                    .collect(),
            )),
            _ => None,
        }
    }
}

impl Module for Dispatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn methods(&self) -> Vec<String> {
        self.methods.keys().map(str::to_owned).collect()
    }

    async fn execute(&self, request: &Request) -> ModuleResult {
        if let Some(observer) = &self.observer {
            observer.on_request(request);
        }

        if let Some(result) = self.handle_reserved(request) {
            return Ok(result);
        }

        match self.methods.route(&request.method) {
            RouteResult::Matched(module) => module.execute_dyn(request).await,
            RouteResult::NotFound => {
                #[cfg(feature = "tracing")]
                tracing::trace!(dispatcher = %self.name, method = %request.method, "method not implemented");

                Err(RpcError::not_implemented(request.method.as_str()))
            }
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("modules", &self.modules)
            .field("methods", &self.methods.len())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// Builder for constructing a [`Dispatcher`].
pub struct DispatcherBuilder {
    name: String,
    version: String,
    modules: Vec<Arc<dyn DynModule>>,
    observer: Option<Arc<dyn RequestObserver>>,
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatcherBuilder {
    /// Create a new empty dispatcher builder.
    pub fn new() -> Self {
        Self {
            name: MERGED_API_NAME.to_string(),
            version: MERGED_API_VERSION.to_string(),
            modules: Vec::new(),
            observer: None,
        }
    }

    /// Register a module.
    pub fn register<M: Module>(self, module: M) -> Self {
        self.register_arc(Arc::new(module))
    }

    /// Register a module that is already shared.
    pub fn register_arc(mut self, module: Arc<dyn DynModule>) -> Self {
        self.modules.push(module);
        self
    }

    /// Register several shared modules in order.
    pub fn extend<I>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn DynModule>>,
    {
        self.modules.extend(modules);
        self
    }

    /// Set the observer notified of every request.
    pub fn observer<O: RequestObserver>(self, observer: O) -> Self {
        self.observer_arc(Arc::new(observer))
    }

    /// Set an observer that is already shared.
    pub fn observer_arc(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Override the name the dispatcher reports as a module.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Override the version the dispatcher reports as a module.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Build the dispatcher.
    pub fn build(self) -> Dispatcher {
        let mut modules = BTreeMap::new();
        let mut methods = HashMapRouter::new();

        for module in self.modules {
            modules.insert(
                module.module_name().to_string(),
                module.module_version().to_string(),
            );

            for method in module.module_methods() {
                #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
                let previous = methods.insert(method.as_str(), module.clone());

                #[cfg(feature = "tracing")]
                {
                    if let Some(previous) = previous.filter(|p| !Arc::ptr_eq(p, &module)) {
                        tracing::warn!(
                            method = %method,
                            previous = %previous.module_name(),
                            module = %module.module_name(),
                            "method overridden by later module"
                        );
                    }
                }
            }
        }

        Dispatcher {
            name: self.name,
            version: self.version,
            modules,
            methods,
            observer: self.observer,
        }
    }
}
