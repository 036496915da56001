//! Call-site provenance attached by [`Signal::WithCaller`](crate::Signal::WithCaller).
use crate::types::Failure;
use core::fmt::{self, Debug, Display};
use core::panic::Location;
use std::error::Error;

/// Source location of the signal that first raised a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    column: u32,
}

impl CallSite {
    /// Creates a call site from explicit coordinates.
    #[inline]
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// Captures the location of the caller.
    ///
    /// Every `#[track_caller]` frame between here and the user's code is
    /// skipped, so calling this through a signal resolves to the line that
    /// invoked the signal.
    #[track_caller]
    #[inline]
    pub fn here() -> Self {
        Self::from(Location::caller())
    }

    /// Source file of the call site.
    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Line number, starting at 1.
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Column number, starting at 1.
    #[inline]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

impl From<&'static Location<'static>> for CallSite {
    #[inline]
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }
}

impl Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A failure annotated with the call site of the signal that raised it.
///
/// Signals never wrap a failure twice: re-raising a `CallerError` keeps the
/// original call site, so the provenance always names the first raise.
///
/// # Examples
///
/// ```
/// use lazy_rail::{CallSite, CallerError};
///
/// let err = CallerError::at("timeout".into(), CallSite::new("src/net.rs", 12, 5));
///
/// assert_eq!(err.caller(), "src/net.rs:12: ");
/// assert_eq!(err.to_string(), "src/net.rs:12: timeout");
/// ```
pub struct CallerError {
    inner: Failure,
    call_site: CallSite,
}

impl CallerError {
    /// Wraps `failure` with the location of the caller.
    #[track_caller]
    #[inline]
    pub fn new(failure: Failure) -> Self {
        Self::at(failure, CallSite::here())
    }

    /// Wraps `failure` with an explicit call site.
    #[inline]
    pub fn at(failure: Failure, call_site: CallSite) -> Self {
        Self { inner: failure, call_site }
    }

    /// Returns where the failure was first raised.
    #[inline]
    pub const fn call_site(&self) -> &CallSite {
        &self.call_site
    }

    /// Returns the `"file:line: "` prefix this error prints before its cause.
    pub fn caller(&self) -> String {
        format!("{}: ", self.call_site)
    }

    /// Returns a reference to the wrapped failure.
    #[inline]
    pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Consumes the wrapper, returning the wrapped failure.
    #[inline]
    pub fn into_inner(self) -> Failure {
        self.inner
    }
}

impl Debug for CallerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallerError")
            .field("inner", &self.inner)
            .field("call_site", &self.call_site)
            .finish()
    }
}

impl Display for CallerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.call_site, self.inner)
    }
}

impl Error for CallerError {
    /// Returns the wrapped failure itself, so identity checks against it hold.
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.inner)
    }
}
