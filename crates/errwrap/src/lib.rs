// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Annotate errors with context as they propagate.
//!
//! `errwrap` wraps an existing error in a new one that carries a human-readable message and a
//! snapshot of the call stack taken where the annotation happened. The wrapped error renders as
//! `"<message>: <cause>"`, keeps the original error reachable through
//! [`Error::source`](std::error::Error::source), and exposes the captured frames for
//! diagnostics.
//!
//! # Key Features
//!
//! - [**`wrap`**](wrap): Annotate an `Option` of an error; `None` stays `None`
//! - [**`wrapf!`**](wrapf): Same as `wrap`, with a formatted message whose arguments are only
//!   evaluated when there is an error
//! - [**`WrapErr`**](WrapErr): `wrap_err` and `wrap_err_with` for any `Result`
//! - [**`#[annotate("...")]`**](annotate): Annotate every error returned by a function
//! - [**`Annotated`**](Annotated): The annotated error, with access to the message, the cause and the stack
//! - [**`AnnotatedBuilder`**](AnnotatedBuilder): Control how many frames are captured
//!
//! # Quick Start
//!
//! ```rust
//! use errwrap::{Annotated, WrapErr};
//!
//! fn flush() -> Result<(), std::io::Error> {
//!     Err(std::io::Error::other("disk full"))
//! }
//!
//! fn commit() -> Result<(), Annotated> {
//!     flush().wrap_err("flush failed")?;
//!     Ok(())
//! }
//!
//! let err = commit().wrap_err("commit failed").unwrap_err();
//! assert_eq!(err.to_string(), "commit failed: flush failed: disk full");
//! assert!(err.find_source::<std::io::Error>().is_some());
//! ```
//!
//! # Absent Errors
//!
//! Annotating "no error" yields "no error", so call sites can annotate unconditionally:
//!
//! ```rust
//! use errwrap::{wrap, wrapf};
//!
//! let maybe: Option<std::io::Error> = None;
//! assert!(wrap(maybe, "flush failed").is_none());
//!
//! let maybe: Option<std::io::Error> = None;
//! assert!(wrapf!(maybe, "lookup {:?} failed", "key1").is_none());
//! ```
//!
//! # Stack Traces
//!
//! Every [`Annotated`] holds a [`StackTrace`] of at most [`MAX_DEPTH`] raw program-counter
//! addresses. The first frame is the code that called the annotating operation. This crate does
//! not symbolize frames; pass [`Frame::as_ptr`] to a symbolizer such as `backtrace::resolve`
//! when a human-readable trace is needed.
//!
//! ```rust
//! let err = errwrap::wrap(Some("disk full"), "flush failed").unwrap();
//! for frame in err.stack() {
//!     println!("{frame:?}");
//! }
//! ```
//!
//! # Function Annotation
//!
//! The [`#[annotate("message")]`](annotate) attribute annotates any error a function returns.
//! The function must return `Result<T, Annotated>`. The message supports `format!` syntax,
//! including inline parameter interpolation, and is only formatted on failure:
//!
//! ```rust
//! use errwrap::{Annotated, WrapErr, annotate};
//!
//! #[annotate("failed to load {name}")]
//! fn load(name: &str) -> Result<String, Annotated> {
//!     std::fs::read_to_string(name).wrap_err("read failed")
//! }
//!
//! let err = load("missing.toml").unwrap_err();
//! assert!(err.to_string().starts_with("failed to load missing.toml: read failed: "));
//! ```
//!
//! # Logging
//!
//! Each annotation emits a `TRACE` level [`tracing`](https://docs.rs/tracing) event named
//! `error annotated`, carrying the `annotation`, `cause` and `frames` fields.

#[doc(hidden)]
extern crate self as errwrap;

mod annotated;
mod builder;
mod macros;
mod message;
mod stack;
mod wrap;
mod wrap_err;

pub use annotated::Annotated;
pub use builder::AnnotatedBuilder;
pub use errwrap_macros::annotate;
pub use message::MessageWrap;
pub use stack::{Frame, MAX_DEPTH, StackTrace};
pub use wrap::wrap;
pub use wrap_err::WrapErr;

#[doc(hidden)]
pub mod __private {
    pub use crate::wrap::wrap_fmt;
}
