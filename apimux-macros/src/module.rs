//! The `#[module]` attribute macro.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, FnArg, Ident, ImplItem, ItemImpl, LitStr, Meta, Token, Type,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments for the `#[module]` macro.
struct ModuleArgs {
    name: String,
    version: String,
}

impl Parse for ModuleArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;
        let mut version = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    let lit: LitStr = input.parse()?;
                    name = Some(lit.value());
                }
                "version" => {
                    let lit: LitStr = input.parse()?;
                    version = Some(lit.value());
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let name = name.ok_or_else(|| {
            syn::Error::new(input.span(), "missing `name = \"...\"` for #[module]")
        })?;

        Ok(ModuleArgs {
            name,
            version: version.unwrap_or_else(|| "1.0".to_string()),
        })
    }
}

/// Arguments for a `#[method(...)]` marker.
struct MethodArgs {
    name: Option<String>,
}

impl Parse for MethodArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    let lit: LitStr = input.parse()?;
                    name = Some(lit.value());
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(MethodArgs { name })
    }
}

fn is_method_attr(attr: &Attribute) -> bool {
    attr.path().is_ident("method")
}

/// Read the advertised name from a `#[method]` marker.
fn method_name(attr: &Attribute, fn_name: &Ident) -> syn::Result<String> {
    match &attr.meta {
        Meta::Path(_) => Ok(fn_name.to_string()),
        Meta::List(_) => {
            let args: MethodArgs = attr.parse_args()?;
            Ok(args.name.unwrap_or_else(|| fn_name.to_string()))
        }
        Meta::NameValue(nv) => Err(syn::Error::new_spanned(
            nv,
            "expected #[method] or #[method(name = \"...\")]",
        )),
    }
}

/// Check the `(&self, request: &Request)` shape of a method.
fn check_signature(sig: &syn::Signature) -> syn::Result<()> {
    if sig.asyncness.is_none() {
        return Err(syn::Error::new_spanned(
            sig.fn_token,
            "module method must be async",
        ));
    }

    let mut inputs = sig.inputs.iter();
    match inputs.next() {
        Some(FnArg::Receiver(recv)) if recv.reference.is_some() && recv.mutability.is_none() => {}
        _ => {
            return Err(syn::Error::new_spanned(
                &sig.inputs,
                "module method must take `&self` first",
            ));
        }
    }

    match (inputs.next(), inputs.next()) {
        (Some(FnArg::Typed(pat_type)), None) if matches!(&*pat_type.ty, Type::Reference(_)) => {
            Ok(())
        }
        _ => Err(syn::Error::new_spanned(
            &sig.inputs,
            "module method must be `async fn(&self, request: &Request)`",
        )),
    }
}

/// Implementation of the `#[module]` macro.
pub fn module_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ModuleArgs);
    let mut input = parse_macro_input!(item as ItemImpl);

    if let Some((_, path, _)) = &input.trait_ {
        return syn::Error::new_spanned(path, "#[module] goes on an inherent impl block")
            .to_compile_error()
            .into();
    }

    let mut names = Vec::new();
    let mut idents = Vec::new();

    for impl_item in &mut input.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };

        let Some(pos) = method.attrs.iter().position(is_method_attr) else {
            continue;
        };
        let marker = method.attrs.remove(pos);

        let name = match method_name(&marker, &method.sig.ident) {
            Ok(name) => name,
            Err(e) => return e.to_compile_error().into(),
        };
        if let Err(e) = check_signature(&method.sig) {
            return e.to_compile_error().into();
        }
        if names.contains(&name) {
            return syn::Error::new_spanned(
                &method.sig.ident,
                format!("method `{}` is declared twice", name),
            )
            .to_compile_error()
            .into();
        }

        names.push(name);
        idents.push(method.sig.ident.clone());
    }

    let self_ty = &input.self_ty;
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();
    let module_name = &args.name;
    let module_version = &args.version;

    let expanded = quote! {
        #input

        impl #impl_generics ::apimux::Module for #self_ty #where_clause {
            fn name(&self) -> &str {
                #module_name
            }

            fn version(&self) -> &str {
                #module_version
            }

            fn methods(&self) -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![#(::std::string::String::from(#names)),*]
            }

            async fn execute(&self, __request: &::apimux::Request) -> ::apimux::ModuleResult {
                match __request.method.as_str() {
                    #(
                        #names => self
                            .#idents(__request)
                            .await
                            .map(::core::convert::Into::into)
                            .map_err(::core::convert::Into::into),
                    )*
                    __other => ::core::result::Result::Err(::apimux::RpcError::not_implemented(__other)),
                }
            }
        }
    };

    TokenStream::from(expanded)
}
