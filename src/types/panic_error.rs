//! Failures built from panics that a boundary absorbed.
use crate::types::payload::payload_text;
use core::any::Any;
use core::fmt::{self, Debug, Display};
use std::error::Error;
use std::sync::{Mutex, PoisonError};

/// Marker cause shared by every [`PanicError`].
///
/// All interruption-wrapped failures report this value from
/// [`Error::source`], whatever payload they actually recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interrupted;

/// The sentinel returned as the cause of every [`PanicError`].
pub static INTERRUPTED: Interrupted = Interrupted;

impl Display for Interrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("panic")
    }
}

impl Error for Interrupted {}

/// Returns `true` when `error` is the [`INTERRUPTED`] sentinel.
///
/// # Examples
///
/// ```
/// use lazy_rail::{is_interrupted, PanicError, INTERRUPTED};
/// use std::error::Error;
///
/// let err = PanicError::new(Box::new(7_u8), "stack");
///
/// assert!(is_interrupted(err.source().unwrap()));
/// assert!(is_interrupted(&INTERRUPTED));
/// assert!(!is_interrupted(&err));
/// ```
#[inline]
pub fn is_interrupted(error: &(dyn Error + 'static)) -> bool {
    error.is::<Interrupted>()
}

/// A panic recovered by a boundary, normalized into a failure.
///
/// Keeps the raw payload (retrievable once through [`take_payload`](Self::take_payload)),
/// its rendered text and a stack snapshot taken when the panic was intercepted.
pub struct PanicError {
    recovered: String,
    payload: Mutex<Option<Box<dyn Any + Send>>>,
    stack: String,
}

impl PanicError {
    /// Wraps a recovered panic payload together with a stack trace.
    pub fn new(payload: Box<dyn Any + Send>, stack: impl Into<String>) -> Self {
        Self {
            recovered: payload_text(&*payload),
            payload: Mutex::new(Some(payload)),
            stack: stack.into(),
        }
    }

    /// Returns the payload rendered as text.
    ///
    /// String payloads render verbatim; opaque payloads render as `Box<dyn Any>`.
    #[inline]
    pub fn recovered(&self) -> &str {
        &self.recovered
    }

    /// Returns the stack snapshot captured at interception time.
    #[inline]
    pub fn stack(&self) -> &str {
        &self.stack
    }

    /// Takes the raw payload out of the error.
    ///
    /// Returns `None` once the payload has been taken.
    pub fn take_payload(&self) -> Option<Box<dyn Any + Send>> {
        self.payload.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

impl Debug for PanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanicError")
            .field("recovered", &self.recovered)
            .field("stack", &self.stack)
            .finish_non_exhaustive()
    }
}

impl Display for PanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} recovered]:\n{}\n[stack]:\n{}", INTERRUPTED, self.recovered, self.stack)
    }
}

impl Error for PanicError {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&INTERRUPTED)
    }
}

/// Minimal failure produced when a panic is absorbed without a stack trace.
///
/// # Examples
///
/// ```
/// use lazy_rail::PanicMessage;
///
/// let err = PanicMessage::new("index out of bounds");
/// assert_eq!(err.to_string(), "interruption: index out of bounds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicMessage {
    message: String,
}

impl PanicMessage {
    /// Creates a message failure from panic text.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Builds the message from a raw panic payload.
    #[inline]
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        Self::new(payload_text(payload))
    }

    /// The recovered panic text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for PanicMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "interruption: {}", self.message)
    }
}

impl Error for PanicMessage {}
