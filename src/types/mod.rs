//! Error model shared by signals and boundaries.
//!
//! A [`Failure`] is any boxed error. Two wrapper shapes attach provenance to it:
//!
//! - [`CallerError`] records the call site of the signal that first raised it.
//! - [`PanicError`] records a recovered panic payload and a stack snapshot. Its
//!   cause is always the shared [`INTERRUPTED`] sentinel.
//!
//! [`Payload`] classifies whatever a boundary catches into one of these shapes.
//!
//! # Examples
//!
//! ```
//! use lazy_rail::{CallerError, Failure};
//! use std::error::Error;
//!
//! let failure: Failure = "disk full".into();
//! let err = CallerError::new(failure);
//!
//! assert!(err.to_string().ends_with("disk full"));
//! assert_eq!(err.source().unwrap().to_string(), "disk full");
//! ```
use smallvec::SmallVec;
use std::error::Error;

pub mod caller_error;
pub mod panic_error;
pub mod payload;

pub use caller_error::*;
pub use panic_error::*;
pub use payload::*;

/// The failure capability: any thread-safe error, boxed.
///
/// `&str`, `String` and every `E: Error + Send + Sync + 'static` convert into it
/// through `Into`, so signals accept plain `Result<T, E>` values.
pub type Failure = Box<dyn Error + Send + Sync + 'static>;

/// SmallVec-backed collection used when walking cause chains.
///
/// Uses inline storage for up to 4 links, which covers a caller wrapper, the
/// wrapped failure and a couple of nested sources without allocating.
pub type ErrorVec<E> = SmallVec<[E; 4]>;
