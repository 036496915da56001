//! Future wrapper that polls its inner future inside a boundary.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::boundary::Boundary;
use crate::types::Failure;

pin_project! {
    /// A Future wrapper that runs every `poll` of the inner future inside a [`Boundary`].
    ///
    /// A signal raised while the inner future is being polled resolves this
    /// future to `Err(failure)` if the boundary absorbs it. Payloads the boundary
    /// rejects keep unwinding out of `poll`.
    ///
    /// Once it has resolved, the inner future is never polled again, even if it
    /// was interrupted halfway through a poll.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_rail::prelude_async::*;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let result = async { raise(Err::<u8, _>("lost connection")) }
    ///     .with_boundary(Boundary::CatchAll)
    ///     .await;
    ///
    /// assert!(result.unwrap_err().to_string().ends_with("lost connection"));
    /// # });
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct BoundaryFuture<F> {
        #[pin]
        inner: F,
        boundary: Boundary,
        done: bool,
    }
}

impl<F> BoundaryFuture<F> {
    /// Creates a new `BoundaryFuture` guarding `inner` with `boundary`.
    #[inline]
    pub fn new(inner: F, boundary: Boundary) -> Self {
        Self { inner, boundary, done: false }
    }

    /// Returns the boundary guarding this future.
    #[inline]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }
}

impl<F: Future> Future for BoundaryFuture<F> {
    type Output = Result<F::Output, Failure>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(!*this.done, "BoundaryFuture polled after completion");

        let inner = this.inner;
        let polled = match this.boundary.run(|| inner.poll(cx)) {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(value)) => Ok(value),
            Err(failure) => Err(failure),
        };

        *this.done = true;
        Poll::Ready(polled)
    }
}

impl<F: Future> FusedFuture for BoundaryFuture<F> {
    #[inline]
    fn is_terminated(&self) -> bool {
        self.done
    }
}
