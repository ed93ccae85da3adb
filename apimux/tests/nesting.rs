//! Dispatchers merged into other dispatchers, and shared across tasks.

use apimux::{
    Dispatcher, LoggingObserver, MERGED_API_NAME, MERGED_API_VERSION, Module, Request, RpcError,
    TracedModule,
};
use futures::future::join_all;
use serde_json::json;
use std::sync::Arc;

mod common;
use common::{Eth, net, object, sorted, web3};

#[tokio::test]
async fn test_dispatcher_is_a_module() {
    let inner = Dispatcher::builder().register(net()).register(web3()).build();
    assert_eq!(inner.name(), MERGED_API_NAME);
    assert_eq!(inner.version(), MERGED_API_VERSION);

    let outer = Dispatcher::builder()
        .register(Eth::new())
        .register(inner)
        .build();

    assert_eq!(
        sorted(outer.methods()),
        vec![
            "eth_blockNumber",
            "eth_getBalance",
            "net_version",
            "web3_clientVersion"
        ]
    );
    assert_eq!(outer.owner_of("net_version"), Some(MERGED_API_NAME));

    let version = outer
        .execute(&Request::method_only("net_version"))
        .await
        .unwrap();
    assert_eq!(version, json!("1"));

    // The outer registry lists the nested dispatcher, not its members.
    let modules = outer
        .execute(&Request::method_only("modules"))
        .await
        .unwrap();
    assert_eq!(modules, object(&[("eth", "1.0"), ("merged", "1.0")]));
}

#[tokio::test]
async fn test_nested_not_implemented_keeps_method_name() {
    let inner = Dispatcher::builder().name("private").register(net()).build();
    let outer = Dispatcher::builder().register(inner).build();

    let err = outer
        .execute(&Request::method_only("admin_nodeInfo"))
        .await
        .unwrap_err();
    assert_eq!(RpcError::as_not_implemented(&err), Some("admin_nodeInfo"));
}

#[tokio::test]
async fn test_traced_and_logged_dispatch() {
    let dispatcher = Dispatcher::builder()
        .register(TracedModule::new(Eth::new()))
        .observer(LoggingObserver::named("public"))
        .build();

    let block = dispatcher
        .execute(&Request::method_only("eth_blockNumber"))
        .await
        .unwrap();
    assert_eq!(block, json!("0x4b7"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_dispatch() {
    let dispatcher = Arc::new(
        Dispatcher::builder()
            .register(Eth::new())
            .register(net())
            .build(),
    );

    let tasks = (0..32).map(|i| {
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            let method = if i % 2 == 0 { "net_version" } else { "eth_blockNumber" };
            dispatcher.execute(&Request::method_only(method)).await
        })
    });

    for (i, joined) in join_all(tasks).await.into_iter().enumerate() {
        let value = joined.unwrap().unwrap();
        let expected = if i % 2 == 0 { json!("1") } else { json!("0x4b7") };
        assert_eq!(value, expected);
    }
}
