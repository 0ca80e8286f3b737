// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// A cause paired with the message that was attached to it.
///
/// Renders as `"<message>: <cause>"`. The cause is reachable through
/// [`cause`](Self::cause) and through [`Error::source`](StdError::source); both return the
/// same reference.
pub struct MessageWrap {
    cause: Box<dyn StdError + Send + Sync + 'static>,
    message: Cow<'static, str>,
}

impl MessageWrap {
    pub(crate) fn new(cause: Box<dyn StdError + Send + Sync + 'static>, message: Cow<'static, str>) -> Self {
        Self { cause, message }
    }

    /// Returns the message attached to the cause.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the error this message was attached to.
    #[must_use]
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    /// Consumes the wrapper and returns the cause it was holding.
    #[must_use]
    pub fn into_cause(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.cause
    }
}

impl fmt::Display for MessageWrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.cause)
    }
}

impl fmt::Debug for MessageWrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageWrap")
            .field("message", &self.message)
            .field("cause", &self.cause)
            .finish()
    }
}

impl StdError for MessageWrap {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_ref())
    }
}
