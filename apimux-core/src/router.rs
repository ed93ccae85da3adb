//! Routing abstraction layer.
//!
//! A router maps a method name to whatever services it. The dispatcher's
//! method table is one implementation; others can be swapped in behind the
//! same trait.

/// Result of a routing lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult<'a, V> {
    /// Route matched, contains the value.
    Matched(&'a V),
    /// No matching route found.
    NotFound,
}

impl<'a, V> RouteResult<'a, V> {
    /// Returns true if the route was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched(_))
    }

    /// Returns the matched value, if any.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            RouteResult::Matched(v) => Some(v),
            RouteResult::NotFound => None,
        }
    }
}

/// A router that maps keys to values.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot route `{K}` keys",
    label = "missing `Router` implementation",
    note = "Implement `Router<{K}, {V}>` to provide method lookup."
)]
pub trait Router<K: ?Sized, V>: Send + Sync + 'static {
    /// Look up a value by key.
    fn route(&self, key: &K) -> RouteResult<'_, V>;

    /// Check if a key exists in the router.
    fn contains(&self, key: &K) -> bool {
        self.route(key).is_matched()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_result_helpers() {
        let val = 42;
        let matched = RouteResult::Matched(&val);
        let not_found: RouteResult<i32> = RouteResult::NotFound;

        assert!(matched.is_matched());
        assert!(!not_found.is_matched());

        assert_eq!(matched.matched(), Some(&42));
        assert_eq!(not_found.matched(), None);
    }
}
