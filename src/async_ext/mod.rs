//! Async extensions for lazy-rail.
//!
//! A boundary only sees the frames of the `poll` call it wraps, so async code
//! installs it around the future instead of around a closure.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! lazy-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use lazy_rail::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> Result<User, Failure> {
//!     async move {
//!         let row = raise(db.fetch(id).await);
//!         raise(User::try_from(row))
//!     }
//!     .with_default_boundary()
//!     .await
//! }
//! ```

use core::future::Future;

use crate::boundary::Boundary;
use crate::defaults::default_boundary;

mod boundary_future;

pub use boundary_future::BoundaryFuture;

/// Extension trait for guarding any future with a boundary.
pub trait FutureBoundaryExt: Future + Sized {
    /// Polls this future inside `boundary`.
    #[inline]
    fn with_boundary(self, boundary: Boundary) -> BoundaryFuture<Self> {
        BoundaryFuture::new(self, boundary)
    }

    /// Polls this future inside the boundary that is the default at the time of the call.
    #[inline]
    fn with_default_boundary(self) -> BoundaryFuture<Self> {
        BoundaryFuture::new(self, default_boundary())
    }
}

impl<F: Future> FutureBoundaryExt for F {}
