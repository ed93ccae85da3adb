//! Distributed module registration via `inventory`.
//!
//! Modules defined across crates can submit themselves with
//! [`submit_module!`](crate::submit_module) and be gathered at startup with
//! [`collect_modules`] or [`DispatcherBuilder::collected`].

use crate::dispatcher::DispatcherBuilder;
use apimux_core::DynModule;
use std::sync::Arc;

/// A module factory submitted to the distributed collection.
pub struct CollectedModule {
    /// Constructs the module instance.
    pub factory: fn() -> Arc<dyn DynModule>,
    /// Registration priority. Higher priorities register later and win
    /// method collisions.
    pub priority: i32,
    /// Name for debugging and tie-breaking.
    pub name: &'static str,
}

impl CollectedModule {
    /// Create a new collected module entry.
    pub const fn new(
        factory: fn() -> Arc<dyn DynModule>,
        priority: i32,
        name: &'static str,
    ) -> Self {
        Self {
            factory,
            priority,
            name,
        }
    }
}

inventory::collect!(CollectedModule);

/// Instantiate every submitted module in registration order.
///
/// Entries are ordered by ascending priority, then by name, so the result
/// does not depend on link order.
pub fn collect_modules() -> Vec<Arc<dyn DynModule>> {
    let mut entries: Vec<&CollectedModule> = inventory::iter::<CollectedModule>
        .into_iter()
        .collect();

    entries.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.name.cmp(b.name)));

    entries.into_iter().map(|entry| (entry.factory)()).collect()
}

impl DispatcherBuilder {
    /// Register every module submitted through [`submit_module!`](crate::submit_module).
    pub fn collected(self) -> Self {
        self.extend(collect_modules())
    }
}

/// Submit a module factory to the distributed collection.
///
/// ```rust,ignore
/// fn net() -> Arc<dyn DynModule> {
///     Arc::new(FnModule::new("net", "1.0").method("net_version", |_| async { Ok(json!("1")) }))
/// }
///
/// apimux::submit_module!(net);
/// apimux::submit_module!(net_override, priority = 10);
/// ```
#[macro_export]
macro_rules! submit_module {
    ($factory:path) => {
        $crate::submit_module!($factory, priority = 0);
    };
    ($factory:path, priority = $priority:expr) => {
        $crate::inventory::submit! {
            $crate::collected::CollectedModule::new($factory, $priority, stringify!($factory))
        }
    };
}
