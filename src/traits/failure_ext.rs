//! Cause-chain inspection for failures produced by boundaries.
use crate::types::{is_interrupted, CallSite, CallerError, ErrorVec};
use std::error::Error;

/// Walks the [`Error::source`] chain of a failure.
///
/// Implemented for `dyn Error` and `dyn Error + Send + Sync`, so it is
/// available directly on a [`Failure`](crate::Failure).
///
/// # Examples
///
/// ```
/// use lazy_rail::{Boundary, FailureExt, Signal};
///
/// let err = Boundary::CatchAllTraced
///     .run(|| Signal::WithCaller.fail("no route"))
///     .unwrap_err();
///
/// assert_eq!(err.causes().len(), 2);
/// assert_eq!(err.root_cause().to_string(), "no route");
/// assert!(err.call_site().is_some());
/// assert!(!err.is_interrupted());
/// ```
pub trait FailureExt {
    /// Returns every link of the chain, starting with the failure itself.
    fn causes(&self) -> ErrorVec<&(dyn Error + 'static)>;

    /// Returns the innermost link of the chain.
    fn root_cause(&self) -> &(dyn Error + 'static);

    /// Returns `true` if any link is the [`INTERRUPTED`](crate::INTERRUPTED) sentinel.
    fn is_interrupted(&self) -> bool {
        self.causes().into_iter().any(is_interrupted)
    }

    /// Returns the call site of the first [`CallerError`] in the chain.
    fn call_site(&self) -> Option<&CallSite> {
        self.causes()
            .into_iter()
            .find_map(|link| link.downcast_ref::<CallerError>())
            .map(CallerError::call_site)
    }
}

fn chain<'a>(head: &'a (dyn Error + 'static)) -> ErrorVec<&'a (dyn Error + 'static)> {
    let mut links = ErrorVec::new();
    let mut current = Some(head);
    while let Some(link) = current {
        links.push(link);
        current = link.source();
    }
    links
}

impl FailureExt for dyn Error + 'static {
    fn causes(&self) -> ErrorVec<&(dyn Error + 'static)> {
        chain(self)
    }

    fn root_cause(&self) -> &(dyn Error + 'static) {
        let mut current = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }
}

impl FailureExt for dyn Error + Send + Sync + 'static {
    fn causes(&self) -> ErrorVec<&(dyn Error + 'static)> {
        chain(self)
    }

    fn root_cause(&self) -> &(dyn Error + 'static) {
        (self as &(dyn Error + 'static)).root_cause()
    }
}
