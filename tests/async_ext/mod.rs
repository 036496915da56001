//! Tests for the async boundary.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::future::FusedFuture;
use lazy_rail::prelude_async::*;

/// Raises on the second poll, after returning `Pending` once.
struct FailsOnSecondPoll {
    polled: bool,
}

impl Future for FailsOnSecondPoll {
    type Output = u32;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<u32> {
        if self.polled {
            Signal::Plain.fail("second poll")
        }
        self.polled = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

#[tokio::test]
async fn success_passes_through() {
    let result = async { 42 }.with_boundary(Boundary::ErrorOnly).await;

    assert_eq!(result.unwrap(), 42);
}

#[tokio::test]
async fn raised_failure_resolves_to_err() {
    let result = async { Signal::WithCaller.raise(Err::<u32, _>("async failure")) }
        .with_boundary(Boundary::CatchAllTraced)
        .await;

    let err = result.unwrap_err();
    assert!(err.is::<CallerError>());
    assert!(err.to_string().ends_with("async failure"));
}

#[tokio::test]
async fn failure_after_pending_is_absorbed() {
    let result = FailsOnSecondPoll { polled: false }.with_boundary(Boundary::ErrorOnly).await;

    assert_eq!(result.unwrap_err().to_string(), "second poll");
}

#[tokio::test]
async fn panics_inside_the_future_become_panic_errors() {
    let result = async {
        let items: Vec<u8> = Vec::new();
        items[1]
    }
    .with_boundary(Boundary::CatchAllTraced)
    .await;

    let err = result.unwrap_err();
    assert!(err.is::<PanicError>());
    assert!(err.is_interrupted());
}

#[tokio::test]
async fn rejected_payloads_keep_unwinding() {
    let handle = tokio::spawn(async {
        async { Signal::Plain.raise(Err::<u8, _>("plain")) }
            .with_boundary(Boundary::WrappedOnly)
            .await
    });

    let join_err = handle.await.expect_err("plain failure escapes WrappedOnly");
    assert!(join_err.is_panic());
}

#[tokio::test]
async fn resolved_future_reports_termination() {
    let mut future = Box::pin(async { 1 }.with_boundary(Boundary::CatchAll));
    assert!(!future.is_terminated());

    let value = (&mut future).await;
    assert_eq!(value.unwrap(), 1);
    assert!(future.is_terminated());
}

#[test]
fn default_boundary_is_captured_at_construction() {
    let future = async {}.with_default_boundary();

    assert_eq!(future.boundary(), lazy_rail::default_boundary());
}
