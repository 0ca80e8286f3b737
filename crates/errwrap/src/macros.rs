// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Annotates a possibly absent error with a formatted message and the caller's stack.
///
/// The first argument is an `Option` of anything convertible into a boxed error; the rest
/// follow [`format!`] syntax. Evaluates to `Option<Annotated>`.
///
/// When the cause is `None` the result is `None` and the format arguments are never evaluated.
///
/// # Examples
///
/// ```rust
/// use errwrap::wrapf;
///
/// let err = wrapf!(Some("not found"), "lookup {:?} failed", "key1").unwrap();
/// assert_eq!(err.to_string(), "lookup \"key1\" failed: not found");
/// ```
///
/// ```rust
/// use errwrap::wrapf;
///
/// fn expensive() -> String {
///     unreachable!("not evaluated when there is no cause")
/// }
///
/// let none = wrapf!(None::<std::io::Error>, "lookup {} failed", expensive());
/// assert!(none.is_none());
/// ```
#[macro_export]
macro_rules! wrapf {
    ($cause:expr, $($arg:tt)+) => {
        match $cause {
            ::core::option::Option::Some(cause) => {
                ::core::option::Option::Some($crate::__private::wrap_fmt(cause, ::core::format_args!($($arg)+)))
            }
            ::core::option::Option::None => ::core::option::Option::None,
        }
    };
}
