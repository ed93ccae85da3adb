//! HashMap-based method table.
//!
//! This is the default router that requires no external dependencies.

use apimux_core::{RouteResult, Router};
use std::collections::HashMap;

/// A router backed by `HashMap`, keyed by method name.
///
/// Insertion replaces any previous value for the same name, which gives the
/// dispatcher its last-registered-wins semantics.
pub struct HashMapRouter<V> {
    map: HashMap<String, V>,
}

impl<V> HashMapRouter<V> {
    /// Create a new empty router.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Create a router from an existing HashMap.
    pub fn from_map(map: HashMap<String, V>) -> Self {
        Self { map }
    }

    /// Insert a route, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.map.insert(key.into(), value)
    }

    /// Iterate over all routed keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the router is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<V> Default for HashMapRouter<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Router<str, V> for HashMapRouter<V>
where
    V: Send + Sync + 'static,
{
    fn route(&self, key: &str) -> RouteResult<'_, V> {
        match self.map.get(key) {
            Some(v) => RouteResult::Matched(v),
            None => RouteResult::NotFound,
        }
    }
}
