#![allow(dead_code)]

use apimux::{FnModule, Module, ModuleResult, Request, RpcError, Value};
use serde_json::json;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Modules
// ============================================================================

/// A hand-written module with parameter checking.
pub struct Eth {
    pub calls: Arc<AtomicUsize>,
}

impl Eth {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Module for Eth {
    fn name(&self) -> &str {
        "eth"
    }

    fn version(&self) -> &str {
        "1.0"
    }

    fn methods(&self) -> Vec<String> {
        vec!["eth_getBalance".into(), "eth_blockNumber".into()]
    }

    async fn execute(&self, request: &Request) -> ModuleResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match request.method.as_str() {
            "eth_getBalance" => {
                let address = request.param(0).ok_or(RpcError::InsufficientParams {
                    want: 1,
                    have: request.params.len(),
                })?;
                let address = address.as_str().ok_or_else(|| RpcError::InvalidType {
                    field: "address".into(),
                    expected: "string".into(),
                })?;
                Ok(json!({ "address": address, "balance": "0x0" }))
            }
            "eth_blockNumber" => Ok(json!("0x4b7")),
            other => Err(RpcError::not_implemented(other)),
        }
    }
}

pub fn net() -> FnModule {
    FnModule::new("net", "1.0").method("net_version", |_req| async { Ok(json!("1")) })
}

pub fn web3() -> FnModule {
    FnModule::new("web3", "1.0")
        .method("web3_clientVersion", |_req| async { Ok(json!("apimux/v0.1.0")) })
}

pub fn sorted(mut methods: Vec<String>) -> Vec<String> {
    methods.sort();
    methods
}

pub fn object(pairs: &[(&str, &str)]) -> Value {
    Value::Object(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect(),
    )
}
