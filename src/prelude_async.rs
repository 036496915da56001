//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus the async-specific items.
//!
//! # Usage
//!
//! ```ignore
//! use lazy_rail::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> Result<User, Failure> {
//!     async move { raise(fetch_from_db(id).await) }
//!         .with_default_boundary()
//!         .await
//! }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros**: [`raise!`], [`ensure!`]
//! - **Functions**: [`raise`], [`fail`], [`catch`], [`catch_result`]
//! - **Types**: [`Failure`], [`Signal`], [`Boundary`], [`Policy`]
//!
//! ## Async-Specific
//!
//! - **Traits**: [`FutureBoundaryExt`](crate::async_ext::FutureBoundaryExt) - `.with_boundary()` for futures
//! - **Types**: [`BoundaryFuture`](crate::async_ext::BoundaryFuture)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{BoundaryFuture, FutureBoundaryExt};
