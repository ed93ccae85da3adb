//! Procedural macros for apimux.

use proc_macro::TokenStream;

mod module;

/// Implement `Module` for a type from an annotated inherent `impl` block.
///
/// Every `async fn` marked `#[method]` becomes a dispatchable method, named
/// after the function unless `#[method(name = "...")]` says otherwise.
/// Methods take `(&self, &Request)` and return `Result<T, E>` where
/// `T: Into<Value>` and `E: Into<BoxError>`.
///
/// ```rust,ignore
/// struct Net;
///
/// #[apimux::module(name = "net", version = "1.0")]
/// impl Net {
///     #[method(name = "net_version")]
///     async fn version(&self, _req: &Request) -> Result<Value, BoxError> {
///         Ok(json!("1"))
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn module(attr: TokenStream, item: TokenStream) -> TokenStream {
    module::module_impl(attr, item)
}
