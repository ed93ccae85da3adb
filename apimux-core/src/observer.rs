//! Request observation.
//!
//! An observer sees every request before the dispatcher resolves it. It is
//! injected at construction and has no influence on the result.

use crate::request::Request;

/// A diagnostic collaborator notified of each incoming request.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot observe requests",
    label = "missing `RequestObserver` implementation",
    note = "Implement `on_request`, or pass a `Fn(&Request)` closure."
)]
pub trait RequestObserver: Send + Sync + 'static {
    /// Called before a request is dispatched.
    fn on_request(&self, request: &Request);
}

// Blanket impl for closures
impl<F> RequestObserver for F
where
    F: Fn(&Request) + Send + Sync + 'static,
{
    fn on_request(&self, request: &Request) {
        (self)(request)
    }
}
