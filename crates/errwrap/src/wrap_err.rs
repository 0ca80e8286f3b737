// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;

use crate::stack::MAX_DEPTH;
use crate::{Annotated, MessageWrap, StackTrace};

/// Annotates the error of a `Result`, leaving `Ok` values untouched.
///
/// This is the `Result` form of [`wrap`](crate::wrap): an `Ok` plays the role of the absent
/// error and passes through without capturing anything.
///
/// ```rust
/// use errwrap::WrapErr;
///
/// fn read_config(path: &str) -> Result<String, errwrap::Annotated> {
///     std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read {path}"))
/// }
///
/// let err = read_config("/does/not/exist").unwrap_err();
/// assert!(err.to_string().starts_with("failed to read /does/not/exist: "));
/// ```
pub trait WrapErr<T> {
    /// Annotates the error with `message`.
    ///
    /// # Errors
    ///
    /// Returns the annotated error if `self` is an error.
    fn wrap_err(self, message: impl Into<Cow<'static, str>>) -> Result<T, Annotated>;

    /// Annotates the error with the message returned by `message_fn`.
    ///
    /// `message_fn` is only called if `self` is an error.
    ///
    /// # Errors
    ///
    /// Returns the annotated error if `self` is an error.
    fn wrap_err_with<F, M>(self, message_fn: F) -> Result<T, Annotated>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>;
}

impl<T, E> WrapErr<T> for Result<T, E>
where
    E: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
    #[inline(never)]
    fn wrap_err(self, message: impl Into<Cow<'static, str>>) -> Result<T, Annotated> {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => {
                let stack = StackTrace::capture(1, MAX_DEPTH);
                Err(Annotated::from_parts(MessageWrap::new(cause.into(), message.into()), stack))
            }
        }
    }

    #[inline(never)]
    fn wrap_err_with<F, M>(self, message_fn: F) -> Result<T, Annotated>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => {
                let stack = StackTrace::capture(1, MAX_DEPTH);
                Err(Annotated::from_parts(MessageWrap::new(cause.into(), message_fn().into()), stack))
            }
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn ok_passes_through() {
        let result: Result<u32, std::io::Error> = Ok(7);
        assert_eq!(result.wrap_err("never shown").unwrap(), 7);
    }

    #[test]
    fn lazy_message_not_built_for_ok() {
        let calls = Cell::new(0);
        let result: Result<u32, std::io::Error> = Ok(7);
        let value = result
            .wrap_err_with(|| {
                calls.set(calls.get() + 1);
                "never shown"
            })
            .unwrap();
        assert_eq!(value, 7);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn lazy_message_built_once_for_err() {
        let calls = Cell::new(0);
        let result: Result<(), _> = Err(std::io::Error::other("disk full"));
        let err = result
            .wrap_err_with(|| {
                calls.set(calls.get() + 1);
                format!("flush {} failed", "journal")
            })
            .unwrap_err();
        assert_eq!(calls.get(), 1);
        assert_eq!(err.to_string(), "flush journal failed: disk full");
    }

    #[test]
    fn string_errors_are_accepted() {
        let result: Result<(), String> = Err(String::from("disk full"));
        let err = result.wrap_err("flush failed").unwrap_err();
        assert_eq!(err.to_string(), "flush failed: disk full");
    }

    #[test]
    fn annotated_errors_nest() {
        let result: Result<(), _> = Err("disk full");
        let err = result.wrap_err("flush failed").wrap_err("commit failed").unwrap_err();
        assert_eq!(err.to_string(), "commit failed: flush failed: disk full");
        assert_eq!(err.cause().to_string(), "flush failed: disk full");
    }
}
