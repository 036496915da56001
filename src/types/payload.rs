//! Classification of unwind payloads caught by a boundary.
use crate::types::{CallerError, Failure, PanicError};
use core::any::Any;

/// Unwind payload carried by a raised signal.
///
/// Boundaries recognize a failure by finding this wrapper (or a bare
/// [`Failure`] thrown with `panic_any`) in the payload.
pub(crate) struct Raised(pub(crate) Failure);

/// The shape of an unwind payload, read without taking ownership of it.
///
/// Boundaries decide on the shape first, so a payload they reject is
/// re-raised in its original box.
///
/// # Examples
///
/// ```
/// use lazy_rail::{Failure, Shape};
///
/// assert_eq!(Shape::of(&"text"), Shape::Foreign);
/// assert_eq!(Shape::of(&Failure::from("boom")), Shape::Plain);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A failure without provenance.
    Plain,
    /// A failure wrapped with its call site.
    Caller,
    /// A normalized panic.
    Panic,
    /// Anything that is not a failure.
    Foreign,
}

impl Shape {
    /// Reads the shape of a raw `catch_unwind` payload.
    pub fn of(raw: &(dyn Any + Send)) -> Self {
        let failure = if let Some(Raised(failure)) = raw.downcast_ref::<Raised>() {
            failure
        } else if let Some(failure) = raw.downcast_ref::<Failure>() {
            failure
        } else {
            return Self::Foreign;
        };

        if failure.is::<CallerError>() {
            Self::Caller
        } else if failure.is::<PanicError>() {
            Self::Panic
        } else {
            Self::Plain
        }
    }

    /// Short name of the shape, used in logs and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Caller => "caller",
            Self::Panic => "panic",
            Self::Foreign => "foreign",
        }
    }
}

/// What a boundary caught, sorted by shape.
///
/// # Examples
///
/// ```
/// use lazy_rail::{Failure, Payload};
/// use std::panic;
///
/// let raw = panic::catch_unwind(|| panic::panic_any(Failure::from("boom"))).unwrap_err();
///
/// match Payload::classify(raw) {
///     Payload::Plain(failure) => assert_eq!(failure.to_string(), "boom"),
///     other => panic!("unexpected payload: {}", other.kind()),
/// }
/// ```
#[derive(Debug)]
pub enum Payload {
    /// A failure without provenance.
    Plain(Failure),
    /// A failure wrapped with the call site that raised it.
    Caller(Box<CallerError>),
    /// A panic that an earlier boundary already normalized.
    Panic(Box<PanicError>),
    /// Anything else, e.g. a runtime fault such as an out-of-bounds index.
    Foreign(Box<dyn Any + Send>),
}

impl Payload {
    /// Sorts a raw `catch_unwind` payload into its shape.
    pub fn classify(raw: Box<dyn Any + Send>) -> Self {
        let failure = match raw.downcast::<Raised>() {
            Ok(raised) => raised.0,
            Err(raw) => match raw.downcast::<Failure>() {
                Ok(failure) => *failure,
                Err(raw) => return Self::Foreign(raw),
            },
        };
        Self::from_failure(failure)
    }

    /// Sorts a failure by its wrapper type.
    pub fn from_failure(failure: Failure) -> Self {
        match failure.downcast::<CallerError>() {
            Ok(caller) => Self::Caller(caller),
            Err(failure) => match failure.downcast::<PanicError>() {
                Ok(panic) => Self::Panic(panic),
                Err(failure) => Self::Plain(failure),
            },
        }
    }

    /// Returns `true` for every shape except [`Payload::Foreign`].
    #[inline]
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Foreign(_))
    }

    /// Returns `true` for the two provenance-carrying shapes.
    #[inline]
    pub fn is_wrapped(&self) -> bool {
        matches!(self, Self::Caller(_) | Self::Panic(_))
    }

    /// The shape of this payload.
    pub fn shape(&self) -> Shape {
        match self {
            Self::Plain(_) => Shape::Plain,
            Self::Caller(_) => Shape::Caller,
            Self::Panic(_) => Shape::Panic,
            Self::Foreign(_) => Shape::Foreign,
        }
    }

    /// Short name of the shape, used in logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        self.shape().name()
    }

    /// Converts the payload into a failure, handing foreign payloads back untouched.
    pub fn into_failure(self) -> Result<Failure, Box<dyn Any + Send>> {
        match self {
            Self::Plain(failure) => Ok(failure),
            Self::Caller(caller) => Ok(caller as Failure),
            Self::Panic(panic) => Ok(panic as Failure),
            Self::Foreign(raw) => Err(raw),
        }
    }

    /// Rebuilds an unwind payload that boundaries classify back into `self`.
    pub fn into_raw(self) -> Box<dyn Any + Send> {
        match self.into_failure() {
            Ok(failure) => Box::new(Raised(failure)),
            Err(raw) => raw,
        }
    }
}

/// Renders a panic payload as text.
pub(crate) fn payload_text(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(Raised(failure)) = payload.downcast_ref::<Raised>() {
        failure.to_string()
    } else if let Some(failure) = payload.downcast_ref::<Failure>() {
        failure.to_string()
    } else {
        String::from("Box<dyn Any>")
    }
}
