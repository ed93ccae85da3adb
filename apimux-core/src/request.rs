//! Request type passed through the dispatcher.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A method-named call with positional parameters.
///
/// The dispatcher only reads `method`; `params` are handed to the owning
/// module verbatim.
///
/// # Example
///
/// ```rust,ignore
/// let req = Request::new("eth_getBalance", vec![json!("0x407d"), json!("latest")]);
/// assert_eq!(req.param(1), Some(&json!("latest")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Method name used for routing.
    pub method: String,
    /// Positional parameters, opaque to the dispatcher.
    #[serde(default)]
    pub params: Vec<Value>,
}

impl Request {
    /// Create a request with parameters.
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// Create a request with no parameters.
    pub fn method_only(method: impl Into<String>) -> Self {
        Self::new(method, Vec::new())
    }

    /// Get the parameter at `index`, if present.
    pub fn param(&self, index: usize) -> Option<&Value> {
        self.params.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_param_access() {
        let req = Request::new("eth_getBalance", vec![json!("0x407d"), json!("latest")]);
        assert_eq!(req.param(0), Some(&json!("0x407d")));
        assert_eq!(req.param(2), None);
    }

    #[test]
    fn test_missing_params_deserialize_to_empty() {
        let req: Request = serde_json::from_value(json!({ "method": "modules" })).unwrap();
        assert_eq!(req, Request::method_only("modules"));
    }
}
