//! `#[core_async::test]` and `#[core_async::main]`.
//!
//! Native expansions drive the body with `core_async::runtime::block_on`;
//! wasm32 expansions hand the async fn to `wasm_bindgen_test`. The test macro
//! accepts `timeout_ms = N`, which fails the test when the body overruns.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, ItemFn, LitInt};

#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut timeout_ms: Option<u64> = None;
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("timeout_ms") {
            let lit: LitInt = meta.value()?.parse()?;
            timeout_ms = Some(lit.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported core_async::test argument; expected `timeout_ms = N`"))
        }
    });
    parse_macro_input!(attr with parser);

    let input = parse_macro_input!(item as ItemFn);
    match require_async(&input) {
        Ok(()) => expand_test(input, timeout_ms).into(),
        Err(err) => err.to_compile_error().into(),
    }
}

#[proc_macro_attribute]
pub fn main(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        let tokens = TokenStream2::from(attr);
        return syn::Error::new_spanned(tokens, "core_async::main does not accept arguments")
            .to_compile_error()
            .into();
    }

    let input = parse_macro_input!(item as ItemFn);
    match require_async(&input) {
        Ok(()) => expand_main(input).into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn require_async(input: &ItemFn) -> syn::Result<()> {
    if input.sig.asyncness.is_none() {
        return Err(syn::Error::new_spanned(
            input.sig.fn_token,
            "core_async attribute macros require `async fn`",
        ));
    }
    Ok(())
}

fn guarded_body(block: &syn::Block, timeout_ms: Option<u64>) -> TokenStream2 {
    match timeout_ms {
        Some(ms) => quote! {
            async move {
                match core_async::time::timeout(
                    core_async::time::Duration::from_millis(#ms),
                    async move #block,
                )
                .await
                {
                    Ok(output) => output,
                    Err(_) => panic!("test exceeded its {}ms timeout", #ms),
                }
            }
        },
        None => quote!(async move #block),
    }
}

fn expand_test(input: ItemFn, timeout_ms: Option<u64>) -> TokenStream2 {
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = input;

    let mut sync_sig = sig.clone();
    sync_sig.asyncness = None;
    let body = guarded_body(&block, timeout_ms);

    quote! {
        #[cfg(not(target_arch = "wasm32"))]
        #(#attrs)*
        #[test]
        #vis #sync_sig {
            core_async::runtime::block_on(#body)
        }

        #[cfg(target_arch = "wasm32")]
        #(#attrs)*
        #[core_async::test_support::wasm_bindgen_test]
        #vis #sig {
            (#body).await
        }
    }
}

fn expand_main(input: ItemFn) -> TokenStream2 {
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = input;

    let mut sync_sig = sig.clone();
    sync_sig.asyncness = None;

    quote! {
        #[cfg(not(target_arch = "wasm32"))]
        #(#attrs)*
        #vis #sync_sig {
            core_async::runtime::block_on(async move #block)
        }

        #[cfg(target_arch = "wasm32")]
        #(#attrs)*
        #vis #sig #block
    }
}
