//! Boundaries intercept unwinds and turn accepted payloads back into failures.
//!
//! A boundary wraps a closure. When the closure returns normally the boundary
//! does nothing. When it unwinds, the boundary classifies the payload and
//! either absorbs it (the unwind stops here and the failure is handed back) or
//! re-raises it unchanged so an enclosing boundary can decide.
//!
//! | Variant | Absorbs | Re-raises |
//! |---|---|---|
//! | [`ErrorOnly`](Boundary::ErrorOnly) | any failure | foreign panics |
//! | [`CatchAll`](Boundary::CatchAll) | everything, panics as [`PanicMessage`] | nothing |
//! | [`CatchAllTraced`](Boundary::CatchAllTraced) | everything, panics as [`PanicError`] | nothing |
//! | [`WrappedOnly`](Boundary::WrappedOnly) | [`CallerError`](crate::CallerError) and [`PanicError`] | everything else |
//!
//! Narrow variants are fail-fast: a payload nobody absorbs terminates the
//! thread like any other panic.
//!
//! # Examples
//!
//! ```
//! use lazy_rail::{Boundary, Failure, Signal};
//!
//! fn load() -> Option<String> {
//!     let mut err: Option<Failure> = None;
//!     let value = Boundary::CatchAllTraced.guard(Some(&mut err), || {
//!         let raw = Signal::WithCaller.raise(std::fs::read_to_string("/definitely/missing"));
//!         raw.trim().to_owned()
//!     });
//!     assert!(err.is_some());
//!     value
//! }
//!
//! assert_eq!(load(), None);
//! ```
use crate::types::{Failure, PanicError, PanicMessage, Payload, Shape};
use core::any::Any;
use core::fmt::{self, Display};
use std::panic::{self, AssertUnwindSafe};

mod trace;

/// Which payloads a boundary absorbs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Boundary {
    /// Absorb failures; re-raise foreign panics.
    ErrorOnly,
    /// Absorb everything; foreign panics become a [`PanicMessage`].
    CatchAll,
    /// Absorb everything; foreign panics become a [`PanicError`] with a stack trace.
    #[default]
    CatchAllTraced,
    /// Absorb only caller- or panic-wrapped failures; re-raise the rest, plain failures included.
    WrappedOnly,
}

/// Outcome of [`Boundary::decide`].
#[derive(Debug)]
pub enum Decision {
    /// Stop the unwind and hand back this failure.
    Absorb(Failure),
    /// Continue the unwind with this payload.
    Reraise(Box<dyn Any + Send>),
}

impl Boundary {
    pub(crate) const ALL: [Self; 4] =
        [Self::ErrorOnly, Self::CatchAll, Self::CatchAllTraced, Self::WrappedOnly];

    /// Returns `true` if this boundary absorbs payloads of `shape`.
    pub const fn absorbs(self, shape: Shape) -> bool {
        match (self, shape) {
            (_, Shape::Caller | Shape::Panic) => true,
            (Self::ErrorOnly | Self::CatchAll | Self::CatchAllTraced, Shape::Plain) => true,
            (Self::CatchAll | Self::CatchAllTraced, Shape::Foreign) => true,
            (Self::ErrorOnly, Shape::Foreign) => false,
            (Self::WrappedOnly, Shape::Plain | Shape::Foreign) => false,
        }
    }

    /// Decides whether this boundary absorbs `payload`.
    pub fn decide(self, payload: Payload) -> Decision {
        match (self, payload) {
            (Self::ErrorOnly | Self::CatchAll | Self::CatchAllTraced, Payload::Plain(failure)) => {
                Decision::Absorb(failure)
            },
            (_, Payload::Caller(caller)) => Decision::Absorb(caller),
            (_, Payload::Panic(panic)) => Decision::Absorb(panic),
            (Self::CatchAll, Payload::Foreign(raw)) => {
                Decision::Absorb(Box::new(PanicMessage::from_payload(&*raw)))
            },
            (Self::CatchAllTraced, Payload::Foreign(raw)) => {
                Decision::Absorb(Box::new(PanicError::new(raw, trace::take())))
            },
            (Self::ErrorOnly, Payload::Foreign(raw)) => Decision::Reraise(raw),
            (Self::WrappedOnly, payload @ (Payload::Plain(_) | Payload::Foreign(_))) => {
                Decision::Reraise(payload.into_raw())
            },
        }
    }

    /// Runs `body` inside this boundary.
    ///
    /// Returns `Err` with the absorbed failure if `body` unwinds with a payload
    /// this boundary accepts. Any other payload keeps unwinding.
    ///
    /// `body` is treated as unwind safe: state it mutates may be observed half
    /// updated after a failure, just as with an early `return`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_rail::{Boundary, Signal};
    ///
    /// let ok = Boundary::ErrorOnly.run(|| Signal::Plain.raise(Ok::<_, String>(7)));
    /// assert_eq!(ok.unwrap(), 7);
    ///
    /// let err = Boundary::ErrorOnly.run(|| Signal::Plain.raise(Err::<i32, _>("nope")));
    /// assert_eq!(err.unwrap_err().to_string(), "nope");
    /// ```
    pub fn run<R, F>(self, body: F) -> Result<R, Failure>
    where
        F: FnOnce() -> R,
    {
        let _armed = (self == Self::CatchAllTraced).then(trace::arm);

        let raw = match panic::catch_unwind(AssertUnwindSafe(body)) {
            Ok(value) => return Ok(value),
            Err(raw) => raw,
        };

        let shape = Shape::of(&*raw);
        if !self.absorbs(shape) {
            #[cfg(feature = "tracing")]
            tracing::trace!(boundary = %self, payload = shape.name(), "re-raising interruption");
            panic::resume_unwind(raw);
        }

        match self.decide(Payload::classify(raw)) {
            Decision::Absorb(failure) => {
                trace::clear();
                #[cfg(feature = "tracing")]
                tracing::debug!(boundary = %self, payload = shape.name(), "absorbed interruption");
                Err(failure)
            },
            Decision::Reraise(raw) => panic::resume_unwind(raw),
        }
    }

    /// Runs `body` inside this boundary, writing an absorbed failure into `slot`.
    ///
    /// Returns the body's value on normal exit, leaving `slot` untouched.
    /// On absorption the failure is assigned to `slot` and `None` is returned.
    /// A `None` slot detaches the boundary: `body` runs without interception.
    pub fn guard<R, F>(self, slot: Option<&mut Option<Failure>>, body: F) -> Option<R>
    where
        F: FnOnce() -> R,
    {
        let Some(slot) = slot else {
            return Some(body());
        };

        match self.run(body) {
            Ok(value) => Some(value),
            Err(failure) => {
                *slot = Some(failure);
                None
            },
        }
    }

    /// Name used by [`FromStr`](core::str::FromStr) and `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ErrorOnly => "error_only",
            Self::CatchAll => "catch_all",
            Self::CatchAllTraced => "catch_all_traced",
            Self::WrappedOnly => "wrapped_only",
        }
    }

    pub(crate) const fn to_bits(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::ErrorOnly,
            1 => Self::CatchAll,
            3 => Self::WrappedOnly,
            _ => Self::CatchAllTraced,
        }
    }
}

impl Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
