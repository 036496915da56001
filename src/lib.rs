//! Lazy error propagation: raise a failure anywhere, catch it at a scoped boundary.
//!
//! Instead of checking and returning an error at every level of a deep call
//! chain, a [`Signal`] turns a failed `Result` into an unwind and a
//! [`Boundary`] installed around the protected scope turns that unwind back into
//! an ordinary failure value. Both come in variants that decide how much
//! provenance to attach and which interruptions to intercept; see their
//! module docs for the full tables.
//!
//! The unqualified [`raise`] and [`catch`] use process-wide defaults
//! ([`Signal::WithCaller`] and [`Boundary::CatchAllTraced`] unless rebound).
//!
//! Signals are built on unwinding, so they do nothing useful in crates compiled
//! with `panic = "abort"`.
//!
//! # Examples
//!
//! ## Catching into an output slot
//!
//! ```
//! use lazy_rail::{catch, raise, Failure};
//!
//! fn parse_pair(input: &str) -> (i32, i32) {
//!     let (a, b) = raise(input.split_once(',').ok_or("missing comma"));
//!     (raise(a.trim().parse::<i32>()), raise(b.trim().parse::<i32>()))
//! }
//!
//! let mut err: Option<Failure> = None;
//! let pair = catch(&mut err, || parse_pair("3, x"));
//!
//! assert!(pair.is_none());
//! let message = err.unwrap().to_string();
//! assert!(message.contains(".rs:"));
//! assert!(message.ends_with("invalid digit found in string"));
//! ```
//!
//! ## Panics become failures
//!
//! ```
//! use lazy_rail::{Boundary, FailureExt};
//!
//! let items: Vec<u8> = Vec::new();
//! let err = Boundary::CatchAllTraced.run(|| items[3]).unwrap_err();
//!
//! assert!(err.is_interrupted());
//! assert!(err.to_string().contains("recovered"));
//! ```
//!
//! ## Explicit policies
//!
//! ```
//! use lazy_rail::{Boundary, Policy, Signal};
//!
//! let policy = Policy::new(Signal::Plain, Boundary::ErrorOnly);
//! let err = policy.run(|| policy.raise(Err::<(), _>("denied"))).unwrap_err();
//!
//! assert_eq!(err.to_string(), "denied");
//! ```

/// Boundary variants and the catch scope
pub mod boundary;
/// Process-wide default bindings and the unqualified call sites
pub mod defaults;
/// Shorthand macros for raising failures
pub mod macros;
/// Signal and boundary pairs chosen together
pub mod policy;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Signal variants
pub mod signal;
/// Traits for inspecting propagated failures
pub mod traits;
/// Failure wrappers and payload classification
pub mod types;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use boundary::{Boundary, Decision};
pub use defaults::*;
pub use policy::{ParsePolicyError, Policy};
pub use signal::Signal;
pub use traits::*;
pub use types::{
    is_interrupted, CallSite, CallerError, ErrorVec, Failure, Interrupted, PanicError,
    PanicMessage, Payload, Shape, INTERRUPTED,
};
