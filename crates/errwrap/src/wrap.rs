// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use crate::stack::MAX_DEPTH;
use crate::{Annotated, MessageWrap, StackTrace};

/// Annotates `cause` with `message` and the caller's stack.
///
/// Returns `None` when there is no cause, so a possibly absent error can be annotated without
/// checking it first. Nothing is captured or allocated in that case.
///
/// ```rust
/// let err = errwrap::wrap(Some("disk full"), "flush failed").unwrap();
/// assert_eq!(err.to_string(), "flush failed: disk full");
///
/// let none = errwrap::wrap(None::<std::io::Error>, "flush failed");
/// assert!(none.is_none());
/// ```
#[inline(never)]
#[must_use]
pub fn wrap<E, M>(cause: Option<E>, message: M) -> Option<Annotated>
where
    E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    M: Into<Cow<'static, str>>,
{
    let cause = cause?;
    let stack = StackTrace::capture(1, MAX_DEPTH);
    Some(Annotated::from_parts(MessageWrap::new(cause.into(), message.into()), stack))
}

/// Expansion target of [`wrapf!`](crate::wrapf); the absent case never reaches here.
#[doc(hidden)]
#[inline(never)]
#[must_use]
pub fn wrap_fmt<E>(cause: E, args: fmt::Arguments<'_>) -> Annotated
where
    E: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
    let stack = StackTrace::capture(1, MAX_DEPTH);
    let message = args.as_str().map_or_else(|| Cow::Owned(args.to_string()), Cow::Borrowed);
    Annotated::from_parts(MessageWrap::new(cause.into(), message), stack)
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_cause_stays_absent() {
        assert!(wrap(None::<std::io::Error>, "flush failed").is_none());
        assert!(wrap(None::<&str>, String::from("flush failed")).is_none());
    }

    #[test]
    fn present_cause_is_wrapped() {
        let err = wrap(Some("disk full"), "flush failed").unwrap();
        assert_eq!(err.to_string(), "flush failed: disk full");
        assert_eq!(err.message(), "flush failed");
    }

    #[test]
    fn literal_format_message() {
        let err = wrap_fmt("disk full", format_args!("flush failed"));
        assert_eq!(err.to_string(), "flush failed: disk full");
    }

    #[test]
    fn formatted_message() {
        let key = "key1";
        let err = wrap_fmt("not found", format_args!("lookup {key:?} failed"));
        assert_eq!(err.to_string(), "lookup \"key1\" failed: not found");
    }
}
