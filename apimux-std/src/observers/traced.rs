//! Traced module - span instrumentation for module execution.

use apimux_core::{Module, ModuleResult, Request};

#[cfg(feature = "tracing")]
use tracing::Instrument;

/// A module wrapper that instruments every execution with a `tracing` span.
///
/// The span carries the module name and the requested method, so records
/// emitted inside the module are attributed to the call that caused them.
/// Without the `tracing` feature the wrapper is transparent.
pub struct TracedModule<M> {
    inner: M,
}

impl<M> TracedModule<M> {
    /// Wrap a module.
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Get a reference to the inner module.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Unwrap the inner module.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: Clone> Clone for TracedModule<M> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<M: Module> Module for TracedModule<M> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn version(&self) -> &str {
        self.inner.version()
    }

    fn methods(&self) -> Vec<String> {
        self.inner.methods()
    }

    #[cfg(feature = "tracing")]
    async fn execute(&self, request: &Request) -> ModuleResult {
        let span = tracing::info_span!(
            "module_execute",
            module = %self.inner.name(),
            method = %request.method,
        );

        self.inner.execute(request).instrument(span).await
    }

    #[cfg(not(feature = "tracing"))]
    async fn execute(&self, request: &Request) -> ModuleResult {
        self.inner.execute(request).await
    }
}
