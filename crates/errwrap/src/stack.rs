// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Call stack snapshots taken at the point of annotation.

use std::ffi::c_void;
use std::fmt;
use std::slice;

use smallvec::SmallVec;

/// The maximum number of frames recorded for a single annotation.
pub const MAX_DEPTH: usize = 32;

/// A single program-counter address captured from the call stack.
///
/// Frames are raw addresses. Resolving them to function names or source locations is left to
/// external tooling such as [`backtrace::resolve`](https://docs.rs/backtrace).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame(usize);

impl Frame {
    /// Returns the instruction pointer of this frame.
    #[must_use]
    pub const fn ip(self) -> usize {
        self.0
    }

    /// Returns the instruction pointer as a raw pointer, the form symbolizers usually expect.
    #[must_use]
    pub fn as_ptr(self) -> *mut c_void {
        std::ptr::without_provenance_mut(self.0)
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// An immutable, bounded snapshot of the call stack.
///
/// The first frame is the code that called the annotating operation; frames that belong to
/// this crate are never recorded. At most [`MAX_DEPTH`] frames are kept.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StackTrace {
    frames: SmallVec<[Frame; MAX_DEPTH]>,
}

impl StackTrace {
    /// Captures the current thread's call stack.
    ///
    /// `skip` is the number of frames between this function and the external caller, i.e. the
    /// public entry points of this crate that call `capture` directly. Those must be marked
    /// `#[inline(never)]` so the count holds in optimized builds.
    #[inline(never)]
    #[cfg_attr(test, mutants::skip)] // frame addresses are not observable in a stable way
    pub(crate) fn capture(skip: usize, max_depth: usize) -> Self {
        let own = Self::capture as fn(usize, usize) -> Self;
        let own = (own as *const ()).addr();
        let limit = max_depth.clamp(1, MAX_DEPTH);
        let mut frames: SmallVec<[Frame; MAX_DEPTH]> = SmallVec::new();
        let mut found = false;
        let mut remaining = skip;

        backtrace::trace(|frame| {
            if !found {
                found = is_frame_of(frame, own);
            } else if remaining > 0 {
                remaining -= 1;
            } else {
                frames.push(Frame(frame.ip().addr()));
                return frames.len() < limit;
            }
            true
        });

        // The walker could not identify our own frame (no unwind info for it), so record from
        // the top rather than returning an empty trace.
        if !found {
            backtrace::trace(|frame| {
                frames.push(Frame(frame.ip().addr()));
                frames.len() < limit
            });
        }

        Self { frames }
    }

    /// Returns the captured frames, innermost (the caller) first.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns an iterator over the captured frames, innermost first.
    pub fn iter(&self) -> slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Returns the number of captured frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if no frames were captured.
    ///
    /// This only happens on platforms where stack walking is unsupported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Returns `true` if `frame` executes the function starting at `function`.
fn is_frame_of(frame: &backtrace::Frame, function: usize) -> bool {
    if frame.symbol_address().addr() == function {
        return true;
    }

    // Apple's compact unwind info reports the instruction pointer as the symbol address
    let mut hit = false;
    if cfg!(target_vendor = "apple") {
        backtrace::resolve_frame(frame, |symbol| {
            hit |= symbol.addr().is_some_and(|addr| addr.addr() == function);
        });
    }
    hit
}

impl fmt::Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.frames.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a StackTrace {
    type Item = &'a Frame;
    type IntoIter = slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
