//! Logging observer - request diagnostics for dispatchers.

use apimux_core::{Request, RequestObserver};

/// An observer that logs each request's method and parameters.
///
/// Logs through `tracing` at debug level when the `tracing` feature is
/// enabled; otherwise it does nothing.
///
/// # Example
///
/// ```rust,ignore
/// use apimux::{Dispatcher, LoggingObserver};
///
/// let dispatcher = Dispatcher::builder()
///     .register(eth)
///     .observer(LoggingObserver::named("public_rpc"))
///     .build();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoggingObserver {
    name: &'static str,
}

impl LoggingObserver {
    /// Create a new `LoggingObserver` with a default name.
    pub fn new() -> Self {
        Self { name: "dispatch" }
    }

    /// Create a new `LoggingObserver` with a custom name.
    ///
    /// The name identifies the dispatcher in log records.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name used in log records.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestObserver for LoggingObserver {
    fn on_request(&self, request: &Request) {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                name = %self.name,
                method = %request.method,
                params = ?request.params,
                "dispatching request"
            );
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = request;
        }
    }
}
