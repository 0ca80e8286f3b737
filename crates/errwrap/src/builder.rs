// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;

use crate::stack::MAX_DEPTH;
use crate::{Annotated, MessageWrap, StackTrace};

/// Builder for [`Annotated`] errors with a non-default capture configuration.
///
/// ```rust
/// use errwrap::Annotated;
///
/// let err = Annotated::builder()
///     .message("flush failed")
///     .max_depth(4)
///     .build("disk full");
///
/// assert_eq!(err.to_string(), "flush failed: disk full");
/// assert!(err.stack().len() <= 4);
/// ```
///
/// Without a [`message`](Self::message) the annotation is empty and the error renders as
/// `": <cause>"`.
#[derive(Debug, Clone)]
pub struct AnnotatedBuilder {
    message: Cow<'static, str>,
    max_depth: usize,
}

impl AnnotatedBuilder {
    /// Creates a builder with an empty message that records up to [`MAX_DEPTH`] frames.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: Cow::Borrowed(""),
            max_depth: MAX_DEPTH,
        }
    }

    /// Sets the message attached by the annotation.
    #[must_use]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Limits how many frames are recorded. The value is clamped to `1..=MAX_DEPTH`.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.clamp(1, MAX_DEPTH);
        self
    }

    /// Annotates `cause`, capturing the stack of the code calling `build`.
    #[inline(never)]
    #[must_use]
    pub fn build<E>(self, cause: E) -> Annotated
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        let stack = StackTrace::capture(1, self.max_depth);
        Annotated::from_parts(MessageWrap::new(cause.into(), self.message), stack)
    }
}

impl Default for AnnotatedBuilder {
    fn default() -> Self {
        Self::new()
    }
}
