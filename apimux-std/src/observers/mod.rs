//! Standard observability implementations.

pub mod logging;
pub mod traced;

pub use logging::LoggingObserver;
pub use traced::TracedModule;
