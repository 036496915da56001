//! Tower integration for lazy-rail.
//!
//! This module provides a Tower `Layer` and `Service` that run the wrapped
//! service inside a [`Boundary`], so signals raised from `poll_ready`, `call`
//! or the response future come back as ordinary service errors.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! lazy-rail = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use lazy_rail::tower::BoundaryLayer;
//! use lazy_rail::Boundary;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(BoundaryLayer::new(Boundary::CatchAllTraced))
//!     .service(my_service);
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::async_ext::BoundaryFuture;
use crate::boundary::Boundary;
use crate::types::Failure;

/// A Tower [`Layer`] that guards services with a [`Boundary`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundaryLayer {
    boundary: Boundary,
}

impl BoundaryLayer {
    /// Creates a new `BoundaryLayer` with the given boundary.
    #[inline]
    pub const fn new(boundary: Boundary) -> Self {
        Self { boundary }
    }

    /// Returns the boundary applied to wrapped services.
    #[inline]
    pub const fn boundary(&self) -> Boundary {
        self.boundary
    }
}

impl<S> Layer<S> for BoundaryLayer {
    type Service = BoundaryService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        BoundaryService::new(inner, self.boundary)
    }
}

/// A Tower [`Service`] that runs its inner service inside a [`Boundary`].
///
/// The inner service's errors are converted into [`Failure`] as well, so
/// callers see one error type whether the failure was returned or raised.
#[derive(Clone, Debug)]
pub struct BoundaryService<S> {
    inner: S,
    boundary: Boundary,
}

impl<S> BoundaryService<S> {
    /// Creates a new `BoundaryService` wrapping the given service.
    #[inline]
    pub const fn new(inner: S, boundary: Boundary) -> Self {
        Self { inner, boundary }
    }

    /// Returns a reference to the inner service.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner service.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Returns the boundary guarding the inner service.
    #[inline]
    pub const fn boundary(&self) -> Boundary {
        self.boundary
    }
}

impl<S, Request> Service<Request> for BoundaryService<S>
where
    S: Service<Request>,
    S::Error: Into<Failure>,
{
    type Response = S::Response;
    type Error = Failure;
    type Future = BoundaryServiceFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        let inner = &mut self.inner;
        match self.boundary.run(|| inner.poll_ready(cx)) {
            Ok(ready) => ready.map_err(Into::into),
            Err(failure) => Poll::Ready(Err(failure)),
        }
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let boundary = self.boundary;
        let inner = &mut self.inner;
        match boundary.run(|| inner.call(request)) {
            Ok(future) => BoundaryServiceFuture::running(future, boundary),
            Err(failure) => BoundaryServiceFuture::failed(failure),
        }
    }
}

pin_project! {
    #[project = StateProj]
    enum State<F> {
        Running { #[pin] future: BoundaryFuture<F> },
        Failed { failure: Option<Failure> },
    }
}

pin_project! {
    /// Future returned by [`BoundaryService`].
    ///
    /// Resolves to the inner response, the inner error converted into a
    /// [`Failure`], or a failure absorbed by the boundary.
    #[must_use = "futures do nothing unless polled"]
    pub struct BoundaryServiceFuture<F> {
        #[pin]
        state: State<F>,
    }
}

impl<F> BoundaryServiceFuture<F> {
    #[inline]
    fn running(future: F, boundary: Boundary) -> Self {
        Self { state: State::Running { future: BoundaryFuture::new(future, boundary) } }
    }

    #[inline]
    fn failed(failure: Failure) -> Self {
        Self { state: State::Failed { failure: Some(failure) } }
    }
}

impl<F, T, E> Future for BoundaryServiceFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: Into<Failure>,
{
    type Output = Result<T, Failure>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project().state.project() {
            StateProj::Running { future } => future.poll(cx).map(|outcome| match outcome {
                Ok(Ok(response)) => Ok(response),
                Ok(Err(error)) => Err(error.into()),
                Err(failure) => Err(failure),
            }),
            StateProj::Failed { failure } => match failure.take() {
                Some(failure) => Poll::Ready(Err(failure)),
                None => panic!("BoundaryServiceFuture polled after completion"),
            },
        }
    }
}

impl<F, T, E> FusedFuture for BoundaryServiceFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: Into<Failure>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        match &self.state {
            State::Running { future } => future.is_terminated(),
            State::Failed { failure } => failure.is_none(),
        }
    }
}

/// Extension trait for easily wrapping services with a boundary.
pub trait ServiceBoundaryExt<Request>: Service<Request> + Sized {
    /// Wraps this service so signals raised inside it become service errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use lazy_rail::tower::ServiceBoundaryExt;
    /// use lazy_rail::Boundary;
    ///
    /// let guarded = my_service.with_boundary(Boundary::ErrorOnly);
    /// ```
    fn with_boundary(self, boundary: Boundary) -> BoundaryService<Self> {
        BoundaryService::new(self, boundary)
    }
}

impl<S, Request> ServiceBoundaryExt<Request> for S where S: Service<Request> {}
