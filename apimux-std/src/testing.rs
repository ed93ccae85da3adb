//! Testing utilities for apimux.
//!
//! This module provides utilities to make testing dispatchers and the code
//! around them easier.
//!
//! # Features
//!
//! - [`RecordingModule`]: A module that records every request it receives
//! - [`FailingModule`]: A module that fails every request with a fixed error
//! - [`RecordingObserver`]: An observer that records every request it sees

use apimux_core::{Module, ModuleResult, Request, RequestObserver, RpcError, Value};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn owned_methods<I, S>(methods: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    methods.into_iter().map(Into::into).collect()
}

// ============================================================================
// Recording Module
// ============================================================================

/// A module that records all requests it receives.
///
/// Clones share the same record, so a clone kept by the test can inspect
/// what the registered copy received. By default every method answers with
/// the module name, which makes routing visible in results.
///
/// # Example
///
/// ```rust,ignore
/// let net = RecordingModule::new("net", "1.0", ["net_version"]);
/// let dispatcher = Dispatcher::builder().register(net.clone()).build();
///
/// dispatcher.execute(&Request::method_only("net_version")).await?;
/// assert_eq!(net.count(), 1);
/// ```
#[derive(Clone)]
pub struct RecordingModule {
    name: String,
    version: String,
    methods: Vec<String>,
    response: Value,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl RecordingModule {
    /// Create a recording module advertising `methods`.
    pub fn new<I, S>(name: impl Into<String>, version: impl Into<String>, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        Self {
            response: Value::String(name.clone()),
            name,
            version: version.into(),
            methods: owned_methods(methods),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer every request with `response` instead of the module name.
    pub fn with_response(mut self, response: Value) -> Self {
        self.response = response;
        self
    }

    /// Get a clone of the recorded requests.
    pub fn requests(&self) -> Vec<Request> {
        lock(&self.requests).clone()
    }

    /// Get the number of recorded requests.
    pub fn count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Clear all recorded requests.
    pub fn clear(&self) {
        lock(&self.requests).clear();
    }
}

impl Module for RecordingModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn methods(&self) -> Vec<String> {
        self.methods.clone()
    }

    async fn execute(&self, request: &Request) -> ModuleResult {
        lock(&self.requests).push(request.clone());
        Ok(self.response.clone())
    }
}

// ============================================================================
// Failing Module
// ============================================================================

/// A module that fails every request with the same [`RpcError`].
pub struct FailingModule {
    name: String,
    version: String,
    methods: Vec<String>,
    error: RpcError,
}

impl FailingModule {
    /// Create a failing module advertising `methods`.
    pub fn new<I, S>(
        name: impl Into<String>,
        version: impl Into<String>,
        methods: I,
        error: RpcError,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            version: version.into(),
            methods: owned_methods(methods),
            error,
        }
    }
}

impl Module for FailingModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn methods(&self) -> Vec<String> {
        self.methods.clone()
    }

    async fn execute(&self, _request: &Request) -> ModuleResult {
        Err(Box::new(self.error.clone()))
    }
}

// ============================================================================
// Recording Observer
// ============================================================================

/// An observer that records every request it is notified of.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    requests: Arc<Mutex<Vec<Request>>>,
}

impl RecordingObserver {
    /// Create a new recording observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the observed requests.
    pub fn requests(&self) -> Vec<Request> {
        lock(&self.requests).clone()
    }

    /// Get the number of observed requests.
    pub fn count(&self) -> usize {
        lock(&self.requests).len()
    }
}

impl RequestObserver for RecordingObserver {
    fn on_request(&self, request: &Request) {
        lock(&self.requests).push(request.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_recording_module_shares_record_across_clones() {
        let module = RecordingModule::new("eth", "1.0", ["eth_getBalance"]);
        let shared = module.clone();

        let req = Request::new("eth_getBalance", vec![json!("0x407d")]);
        let result = module.execute(&req).await.unwrap();

        assert_eq!(result, json!("eth"));
        assert_eq!(shared.requests(), vec![req]);

        shared.clear();
        assert_eq!(module.count(), 0);
    }

    #[tokio::test]
    async fn test_recording_module_custom_response() {
        let module = RecordingModule::new("net", "1.0", ["net_version"]).with_response(json!("1"));
        let result = module
            .execute(&Request::method_only("net_version"))
            .await
            .unwrap();
        assert_eq!(result, json!("1"));
    }

    #[tokio::test]
    async fn test_failing_module() {
        let module = FailingModule::new(
            "txpool",
            "1.0",
            ["txpool_status"],
            RpcError::NotReady("txpool_status".into()),
        );
        let err = module
            .execute(&Request::method_only("txpool_status"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "txpool_status method not ready");
    }
}
