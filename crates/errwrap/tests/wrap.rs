// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tests for annotating errors with `wrap`, `wrapf!` and `WrapErr`.

use std::error::Error as StdError;

use errwrap::{Annotated, MessageWrap, WrapErr, wrap, wrapf};

#[derive(Debug, thiserror::Error)]
#[error("not found")]
struct NotFound;

#[derive(Debug, thiserror::Error)]
#[error("storage unavailable")]
struct StorageError {
    #[source]
    source: std::io::Error,
}

#[test]
fn flush_failed_scenario() {
    let err = wrap(Some(std::io::Error::other("disk full")), "flush failed").unwrap();
    assert_eq!(err.to_string(), "flush failed: disk full");

    let cause = err.cause().downcast_ref::<std::io::Error>().unwrap();
    assert_eq!(cause.to_string(), "disk full");
}

#[test]
fn lookup_failed_scenario() {
    let err = wrapf!(Some(NotFound), "lookup {:?} failed", "key1").unwrap();
    assert_eq!(err.to_string(), "lookup \"key1\" failed: not found");
    assert!(err.cause().downcast_ref::<NotFound>().is_some());
}

#[test]
fn absent_cause_is_absent() {
    assert!(wrap(None::<NotFound>, "flush failed").is_none());
    assert!(wrapf!(None::<NotFound>, "lookup {:?} failed", "key1").is_none());
}

#[test]
fn cause_and_source_return_the_original_box() {
    let cause: Box<dyn StdError + Send + Sync> = Box::new(NotFound);
    let original = std::ptr::from_ref(cause.as_ref()).cast::<()>();

    let err = wrap(Some(cause), "lookup failed").unwrap();

    let via_cause = std::ptr::from_ref(err.cause()).cast::<()>();
    let via_source = std::ptr::from_ref(err.source().unwrap()).cast::<()>();
    let via_inner = std::ptr::from_ref(err.inner().source().unwrap()).cast::<()>();
    assert_eq!(via_cause, original);
    assert_eq!(via_source, original);
    assert_eq!(via_inner, original);
}

#[test]
fn chained_annotations_render_outermost_first() {
    let inner = wrap(Some("disk full"), "flush failed");
    let outer = wrap(inner, "commit failed").unwrap();
    assert_eq!(outer.to_string(), "commit failed: flush failed: disk full");

    let inner = wrap(Some(std::io::Error::other("io")), "inner");
    let outer = wrap(inner, "outer").unwrap();
    assert_eq!(outer.to_string(), "outer: inner: io");
}

#[test]
fn chain_walkers_pass_through_annotations() {
    let storage = StorageError {
        source: std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out"),
    };
    let err = Err::<(), _>(storage)
        .wrap_err("load failed")
        .wrap_err("request failed")
        .unwrap_err();

    let mut messages = Vec::new();
    let mut current: Option<&(dyn StdError + 'static)> = Some(&err);
    while let Some(e) = current {
        messages.push(e.to_string());
        current = e.source();
    }
    assert_eq!(
        messages,
        [
            "request failed: load failed: storage unavailable",
            "load failed: storage unavailable",
            "storage unavailable",
            "timed out",
        ]
    );

    assert_eq!(err.find_source::<Annotated>().unwrap().message(), "load failed");
    assert!(err.find_source::<StorageError>().is_some());
    assert_eq!(
        err.find_source::<std::io::Error>().unwrap().kind(),
        std::io::ErrorKind::TimedOut
    );
    assert_eq!(err.root_cause().to_string(), "timed out");
}

#[test]
fn message_wrap_is_not_a_separate_chain_link() {
    let err = wrap(Some(NotFound), "lookup failed").unwrap();
    assert!(err.find_source::<MessageWrap>().is_none());
    assert_eq!(err.inner().to_string(), err.to_string());
}

#[test]
fn question_mark_with_wrap_err() {
    fn open(path: &str) -> Result<String, Annotated> {
        let contents = std::fs::read_to_string(path).wrap_err_with(|| format!("failed to open {path}"))?;
        Ok(contents)
    }

    let err = open("/definitely/not/here.txt").unwrap_err();
    assert!(err.to_string().starts_with("failed to open /definitely/not/here.txt: "));
    assert_eq!(
        err.find_source::<std::io::Error>().unwrap().kind(),
        std::io::ErrorKind::NotFound
    );
}

#[test]
fn builder_sets_message() {
    let err = Annotated::builder().message("flush failed").max_depth(8).build(NotFound);
    assert_eq!(err.to_string(), "flush failed: not found");
    assert!(err.stack().len() <= 8);
}
