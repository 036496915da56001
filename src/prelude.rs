//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use lazy_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`raise!`], [`ensure!`]
//! - **Functions**: [`raise`], [`fail`], [`catch`], [`catch_result`]
//! - **Types**: [`Failure`], [`Signal`], [`Boundary`], [`Policy`], [`CallerError`], [`PanicError`]
//! - **Traits**: [`FailureExt`]
//!
//! # Examples
//!
//! ## Early return without `?`
//!
//! ```
//! use lazy_rail::prelude::*;
//!
//! fn config_port(text: &str) -> Result<u16, Failure> {
//!     catch_result(|| {
//!         let line = text.lines().find(|l| l.starts_with("port=")).ok_or("no port line");
//!         let line = raise(line);
//!         raise(line["port=".len()..].parse::<u16>())
//!     })
//! }
//!
//! assert_eq!(config_port("host=a\nport=80").unwrap(), 80);
//! assert!(config_port("host=a").unwrap_err().to_string().ends_with("no port line"));
//! ```

// Macros, plus the `raise` function that shares the macro's name
pub use crate::{ensure, raise};

// Unqualified call sites
pub use crate::defaults::{catch, catch_result, fail};

// Core types
pub use crate::boundary::Boundary;
pub use crate::policy::Policy;
pub use crate::signal::Signal;
pub use crate::types::{CallerError, Failure, PanicError};

// Traits
pub use crate::traits::FailureExt;
