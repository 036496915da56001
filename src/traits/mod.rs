//! Traits for inspecting propagated failures.
//!
//! - [`FailureExt`]: walks the cause chain of a failure, finds the raising call
//!   site and detects panic-derived failures.
//!
//! # Examples
//!
//! ```
//! use lazy_rail::traits::FailureExt;
//! use lazy_rail::{Boundary, Failure};
//!
//! let err: Failure = Boundary::CatchAllTraced
//!     .run(|| -> () { panic!("bad index") })
//!     .unwrap_err();
//!
//! assert!(err.is_interrupted());
//! assert_eq!(err.root_cause().to_string(), "panic");
//! ```

pub mod failure_ext;

pub use failure_ext::FailureExt;
