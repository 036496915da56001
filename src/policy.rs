//! A house style: one signal variant paired with one boundary variant.
//!
//! Passing a [`Policy`] around makes the propagation style explicit at each
//! call site. [`Policy::install`] publishes it as the process-wide default used
//! by [`raise`](crate::raise) and [`catch`](crate::catch).
//!
//! Policies parse from `"signal/boundary"` strings, and with the `serde`
//! feature they (de)serialize as `{ "signal": ..., "boundary": ... }`, so the
//! style can live in a configuration file.
//!
//! # Examples
//!
//! ```
//! use lazy_rail::{Boundary, Policy, Signal};
//!
//! let policy: Policy = "plain/error_only".parse().unwrap();
//! assert_eq!(policy, Policy::new(Signal::Plain, Boundary::ErrorOnly));
//!
//! let err = policy.run(|| policy.raise(Err::<(), _>("closed"))).unwrap_err();
//! assert_eq!(err.to_string(), "closed");
//! ```
use crate::boundary::Boundary;
use crate::signal::Signal;
use crate::types::Failure;
use core::fmt::{self, Display};
use core::str::FromStr;
use std::error::Error;

/// A signal variant and a boundary variant chosen together.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Policy {
    pub signal: Signal,
    pub boundary: Boundary,
}

impl Policy {
    #[inline]
    pub const fn new(signal: Signal, boundary: Boundary) -> Self {
        Self { signal, boundary }
    }

    /// Reads the current process-wide defaults.
    #[inline]
    pub fn current() -> Self {
        Self::new(crate::defaults::default_signal(), crate::defaults::default_boundary())
    }

    /// Publishes this policy as the process-wide default.
    #[inline]
    pub fn install(self) {
        crate::defaults::set_default_signal(self.signal);
        crate::defaults::set_default_boundary(self.boundary);
    }

    /// See [`Signal::raise`].
    #[track_caller]
    #[inline]
    pub fn raise<T, E>(self, result: Result<T, E>) -> T
    where
        E: Into<Failure>,
    {
        self.signal.raise(result)
    }

    /// See [`Signal::fail`].
    #[track_caller]
    #[inline]
    pub fn fail<E>(self, error: E) -> !
    where
        E: Into<Failure>,
    {
        self.signal.fail(error)
    }

    /// See [`Boundary::run`].
    #[inline]
    pub fn run<R, F>(self, body: F) -> Result<R, Failure>
    where
        F: FnOnce() -> R,
    {
        self.boundary.run(body)
    }

    /// See [`Boundary::guard`].
    #[inline]
    pub fn guard<R, F>(self, slot: Option<&mut Option<Failure>>, body: F) -> Option<R>
    where
        F: FnOnce() -> R,
    {
        self.boundary.guard(slot, body)
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.signal, self.boundary)
    }
}

/// Error returned when a signal, boundary or policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError {
    kind: &'static str,
    input: String,
}

impl ParsePolicyError {
    fn new(kind: &'static str, input: &str) -> Self {
        Self { kind, input: input.to_owned() }
    }

    /// The text that failed to parse.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.input)
    }
}

impl Error for ParsePolicyError {}

impl FromStr for Signal {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Signal::ALL
            .into_iter()
            .find(|signal| signal.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParsePolicyError::new("signal", s))
    }
}

impl FromStr for Boundary {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Boundary::ALL
            .into_iter()
            .find(|boundary| boundary.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParsePolicyError::new("boundary", s))
    }
}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (signal, boundary) = s.split_once('/').ok_or_else(|| ParsePolicyError::new("policy", s))?;
        Ok(Self::new(signal.parse()?, boundary.parse()?))
    }
}
