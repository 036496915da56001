//! Process-wide default signal and boundary.
//!
//! The unqualified [`raise`], [`fail`], [`catch`] and [`catch_result`] read
//! these defaults on every call, so a codebase can pick its house style once
//! at startup. The initial defaults are [`Signal::WithCaller`] and
//! [`Boundary::CatchAllTraced`].
//!
//! Both slots are atomics, so rebinding is memory safe from any thread, but
//! nothing orders a rebinding against concurrent call sites: a thread may still
//! observe the previous value. Rebind during startup, before other threads use
//! the defaults, or pass an explicit [`Policy`](crate::Policy) instead.
//!
//! # Examples
//!
//! ```
//! use lazy_rail::{catch, raise, Failure};
//!
//! fn read_port(raw: &str) -> Result<u16, Failure> {
//!     let mut err = None;
//!     let port = catch(&mut err, || raise(raw.parse::<u16>()));
//!     port.ok_or_else(|| err.unwrap())
//! }
//!
//! assert_eq!(read_port("8080").unwrap(), 8080);
//! assert!(read_port("http").is_err());
//! ```
use crate::boundary::Boundary;
use crate::signal::Signal;
use crate::types::Failure;
use core::sync::atomic::{AtomicU8, Ordering};

static DEFAULT_SIGNAL: AtomicU8 = AtomicU8::new(Signal::WithCaller.to_bits());
static DEFAULT_BOUNDARY: AtomicU8 = AtomicU8::new(Boundary::CatchAllTraced.to_bits());

/// Returns the signal used by [`raise`] and [`fail`].
#[inline]
pub fn default_signal() -> Signal {
    Signal::from_bits(DEFAULT_SIGNAL.load(Ordering::Relaxed))
}

/// Returns the boundary used by [`catch`] and [`catch_result`].
#[inline]
pub fn default_boundary() -> Boundary {
    Boundary::from_bits(DEFAULT_BOUNDARY.load(Ordering::Relaxed))
}

/// Rebinds the default signal, returning the previous one.
pub fn set_default_signal(signal: Signal) -> Signal {
    let previous = Signal::from_bits(DEFAULT_SIGNAL.swap(signal.to_bits(), Ordering::Relaxed));
    #[cfg(feature = "tracing")]
    tracing::debug!(%previous, current = %signal, "default signal rebound");
    previous
}

/// Rebinds the default boundary, returning the previous one.
pub fn set_default_boundary(boundary: Boundary) -> Boundary {
    let previous = Boundary::from_bits(DEFAULT_BOUNDARY.swap(boundary.to_bits(), Ordering::Relaxed));
    #[cfg(feature = "tracing")]
    tracing::debug!(%previous, current = %boundary, "default boundary rebound");
    previous
}

/// Returns the `Ok` value, or unwinds through the default signal.
#[track_caller]
#[inline]
pub fn raise<T, E>(result: Result<T, E>) -> T
where
    E: Into<Failure>,
{
    default_signal().raise(result)
}

/// Unwinds with `error` through the default signal.
#[track_caller]
#[inline]
pub fn fail<E>(error: E) -> !
where
    E: Into<Failure>,
{
    default_signal().fail(error)
}

/// Runs `body` inside the default boundary, writing an absorbed failure into `slot`.
///
/// See [`Boundary::guard`].
#[inline]
pub fn catch<R, F>(slot: &mut Option<Failure>, body: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    default_boundary().guard(Some(slot), body)
}

/// Runs `body` inside the default boundary.
///
/// See [`Boundary::run`].
#[inline]
pub fn catch_result<R, F>(body: F) -> Result<R, Failure>
where
    F: FnOnce() -> R,
{
    default_boundary().run(body)
}
