// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::fmt;

use tracing::{Level, event};

use crate::{AnnotatedBuilder, MessageWrap, StackTrace};

/// Boxed so that `Annotated` stays pointer-sized.
struct Inner {
    wrap: MessageWrap,
    stack: StackTrace,
}

/// An error annotated with a context message and the call stack at the point of annotation.
///
/// `Annotated` is produced by [`wrap`](crate::wrap), [`wrapf!`](crate::wrapf),
/// [`WrapErr`](crate::WrapErr) and [`AnnotatedBuilder`]. It renders exactly like the
/// [`MessageWrap`] it holds, `"<message>: <cause>"`, and its
/// [`source`](StdError::source) is the original cause, so generic chain walkers pass through it
/// transparently.
///
/// Annotating an `Annotated` again nests the values, so the rendering of a chain reads from the
/// outermost message down to the original error:
///
/// ```rust
/// use errwrap::WrapErr;
///
/// let result: Result<(), _> = Err("disk full");
/// let err = result
///     .wrap_err("flush failed")
///     .wrap_err("commit failed")
///     .unwrap_err();
///
/// assert_eq!(err.to_string(), "commit failed: flush failed: disk full");
/// assert_eq!(err.root_cause().to_string(), "disk full");
/// ```
pub struct Annotated {
    data: Box<Inner>,
}

impl Annotated {
    pub(crate) fn from_parts(wrap: MessageWrap, stack: StackTrace) -> Self {
        event!(
            Level::TRACE,
            message = "error annotated",
            annotation = wrap.message(),
            cause = %wrap.cause(),
            frames = stack.len()
        );

        Self {
            data: Box::new(Inner { wrap, stack }),
        }
    }

    /// Creates a new [`AnnotatedBuilder`] for configuring how an error is annotated.
    #[must_use]
    pub const fn builder() -> AnnotatedBuilder {
        AnnotatedBuilder::new()
    }

    /// Returns the message attached by this annotation.
    #[must_use]
    pub fn message(&self) -> &str {
        self.data.wrap.message()
    }

    /// Returns the error that was annotated.
    ///
    /// This is the same reference returned by [`Error::source`](StdError::source).
    #[must_use]
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.data.wrap.cause()
    }

    /// Returns the message and cause pair this error renders from.
    #[must_use]
    pub fn inner(&self) -> &MessageWrap {
        &self.data.wrap
    }

    /// Consumes the error, discarding the captured stack.
    #[must_use]
    pub fn into_inner(self) -> MessageWrap {
        self.data.wrap
    }

    /// Returns the call stack captured when this error was annotated.
    #[must_use]
    pub fn stack(&self) -> &StackTrace {
        &self.data.stack
    }

    /// Returns the innermost error of the cause chain.
    #[must_use]
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self.cause();
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    /// Finds the first error of type `T` in the cause chain.
    ///
    /// Only the chain below this error is searched, not the error itself.
    #[must_use]
    pub fn find_source<T: StdError + 'static>(&self) -> Option<&T> {
        let mut source = self.source();
        while let Some(err) = source {
            if let Some(target) = err.downcast_ref::<T>() {
                return Some(target);
            }
            source = err.source();
        }
        None
    }
}

impl fmt::Display for Annotated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data.wrap, f)
    }
}

impl fmt::Debug for Annotated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Annotated")
            .field("message", &self.message())
            .field("cause", &self.cause())
            .field("stack", &self.data.stack)
            .finish()
    }
}

impl StdError for Annotated {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.data.wrap.source()
    }
}

impl AsRef<dyn StdError + Send + Sync> for Annotated {
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }
}
