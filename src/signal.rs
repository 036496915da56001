//! Signals turn a failed `Result` into an unwind towards the nearest boundary.
//!
//! A signal unwinds with [`std::panic::resume_unwind`], so the process panic
//! hook is not invoked and raising a failure prints nothing on stderr.
//!
//! # Examples
//!
//! ```
//! use lazy_rail::{Boundary, Signal};
//!
//! fn parse(input: &str) -> u32 {
//!     Signal::WithCaller.raise(input.parse::<u32>())
//! }
//!
//! let err = Boundary::CatchAll.run(|| parse("4x")).unwrap_err();
//! assert!(err.to_string().contains("invalid digit"));
//! ```
use crate::types::payload::Raised;
use crate::types::{CallerError, Failure, PanicError};
use core::fmt::{self, Display};
use std::panic;

/// How a signal packages the failure it raises.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Signal {
    /// Raise the failure unchanged.
    Plain,
    /// Wrap the failure in a [`CallerError`] naming the raising line.
    ///
    /// Failures that are already a `CallerError` or a
    /// [`PanicError`](crate::PanicError) are raised unchanged.
    #[default]
    WithCaller,
}

impl Signal {
    pub(crate) const ALL: [Self; 2] = [Self::Plain, Self::WithCaller];

    /// Returns the `Ok` value, or unwinds with the `Err` value.
    #[track_caller]
    #[inline]
    pub fn raise<T, E>(self, result: Result<T, E>) -> T
    where
        E: Into<Failure>,
    {
        match result {
            Ok(value) => value,
            Err(error) => self.fail(error),
        }
    }

    /// Unwinds with `error`.
    #[track_caller]
    pub fn fail<E>(self, error: E) -> !
    where
        E: Into<Failure>,
    {
        let failure = self.package(error.into());
        panic::resume_unwind(Box::new(Raised(failure)))
    }

    /// Applies this variant's wrapping to `failure` without unwinding.
    #[track_caller]
    pub fn package(self, failure: Failure) -> Failure {
        match self {
            Self::Plain => failure,
            Self::WithCaller if is_wrapped(&failure) => failure,
            Self::WithCaller => Box::new(CallerError::new(failure)),
        }
    }

    /// Name used by [`FromStr`](core::str::FromStr) and `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::WithCaller => "with_caller",
        }
    }

    pub(crate) const fn to_bits(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::Plain,
            _ => Self::WithCaller,
        }
    }
}

impl Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn is_wrapped(failure: &Failure) -> bool {
    failure.is::<CallerError>() || failure.is::<PanicError>()
}
