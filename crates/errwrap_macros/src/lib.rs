// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Procedural macros to support the [`errwrap`](https://docs.rs/errwrap) crate. See `errwrap` for more information.
//!
//! # Macros
//!
//! - `#[annotate("message")]` - Annotate every error returned by a function

use proc_macro::TokenStream;

mod annotate;
mod utils;

/// Attribute macro that annotates the errors returned by a function.
///
/// The function must return `Result<T, errwrap::Annotated>`. On failure the error is wrapped
/// once more with the given message and the stack of the function itself.
///
/// See the main `errwrap` crate documentation for detailed usage examples.
#[proc_macro_attribute]
#[cfg_attr(test, mutants::skip)]
pub fn annotate(args: TokenStream, input: TokenStream) -> TokenStream {
    annotate::annotate(args, input)
}
