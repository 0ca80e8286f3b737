// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, Result, parse_macro_input};

use crate::utils::bail;

/// Attribute macro that annotates every error a function returns.
///
/// Supports:
/// - `#[annotate]` (message defaults to `error in function <name>`)
/// - `#[annotate("simple message")]`
/// - `#[annotate("param interpolation: {param}")]`
/// - `#[annotate("failed to read file: {}", path.display())]`
#[cfg_attr(test, mutants::skip)] // procedural macro API cannot be used in tests directly
pub fn annotate(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = proc_macro2::TokenStream::from(args);
    let input = parse_macro_input!(input as ItemFn);

    impl_annotate_attribute(args, input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn impl_annotate_attribute(message_args: proc_macro2::TokenStream, mut fn_definition: ItemFn) -> Result<proc_macro2::TokenStream> {
    let message_expr = if message_args.is_empty() {
        let fn_name = &fn_definition.sig.ident;
        quote! { concat!("error in function ", stringify!(#fn_name)) }
    } else {
        message_expr(message_args)?
    };

    check_return_type(&fn_definition.sig.output)?;
    let body = &fn_definition.block;

    // The body runs with its error type pinned to `Annotated` so `?` inside it resolves, then
    // any error is annotated once more on the way out.
    let run_body = if fn_definition.sig.asyncness.is_some() {
        quote! { (async #body).await }
    } else {
        quote! { (|| #body)() }
    };

    let block = quote! {
        {
            let errwrap_result: ::core::result::Result<_, ::errwrap::Annotated> = #run_body;
            ::errwrap::WrapErr::wrap_err_with(errwrap_result, || #message_expr)
        }
    };

    fn_definition.block = syn::parse2(block)?;

    Ok(quote! { #fn_definition })
}

/// Turns the attribute arguments into the message expression.
///
/// A lone string literal is used as is unless it holds a `{..}` placeholder. Anything else is
/// handed to `format!` unchanged, so argument errors surface with `format!`'s own diagnostics.
fn message_expr(args: proc_macro2::TokenStream) -> Result<proc_macro2::TokenStream> {
    let mut tokens = args.clone().into_iter();
    let Some(proc_macro2::TokenTree::Literal(first)) = tokens.next() else {
        bail!("annotate requires a string literal or format expression");
    };
    let syn::Lit::Str(format) = syn::Lit::new(first) else {
        bail!("annotate requires a string literal or format expression");
    };

    let text = format.value();
    let placeholder = text.find('{').is_some_and(|open| text[open..].contains('}'));
    if tokens.next().is_some() || placeholder {
        Ok(quote! { format!(#args) })
    } else {
        Ok(quote! { #format })
    }
}

fn check_return_type(output: &syn::ReturnType) -> Result<()> {
    match output {
        // whether it is really `Result<_, Annotated>` is left to the type checker
        syn::ReturnType::Type(_, _) => Ok(()),
        syn::ReturnType::Default => {
            bail!("annotate can only be applied to functions returning Result")
        }
    }
}
