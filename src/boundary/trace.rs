//! Stack snapshots for panics absorbed by [`Boundary::CatchAllTraced`](super::Boundary).
//!
//! By the time `catch_unwind` returns, the faulting frames are gone. A panic
//! hook, installed once and chained in front of whatever hook was set before,
//! records a backtrace at the panic site in a thread-local slot that the
//! boundary then picks up.
//!
//! The hook only captures while a traced boundary is running on the panicking
//! thread, and every absorbing boundary discards the slot, so a snapshot left
//! by a panic that was already handled is never attached to a later unwind.
use core::cell::{Cell, RefCell};
use std::backtrace::Backtrace;
use std::panic;
use std::sync::Once;

thread_local! {
    static LAST_TRACE: RefCell<Option<String>> = const { RefCell::new(None) };
    static TRACED_DEPTH: Cell<usize> = const { Cell::new(0) };
}

static INSTALL: Once = Once::new();

/// Marks a traced boundary as running on this thread until dropped.
pub(crate) struct Armed(());

impl Drop for Armed {
    fn drop(&mut self) {
        let _ = TRACED_DEPTH.try_with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

fn is_armed() -> bool {
    TRACED_DEPTH.try_with(|depth| depth.get() > 0).unwrap_or(false)
}

/// Installs the recording hook (once), clears any stale snapshot on this
/// thread and enables capture until the returned guard drops.
pub(crate) fn arm() -> Armed {
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if is_armed() {
                let trace = Backtrace::force_capture().to_string();
                let _ = LAST_TRACE.try_with(|slot| {
                    if let Ok(mut slot) = slot.try_borrow_mut() {
                        *slot = Some(trace);
                    }
                });
            }
            previous(info);
        }));
    });

    clear();
    let _ = TRACED_DEPTH.try_with(|depth| depth.set(depth.get() + 1));
    Armed(())
}

/// Drops the snapshot recorded on this thread, if any.
pub(crate) fn clear() {
    let _ = LAST_TRACE.try_with(|slot| {
        if let Ok(mut slot) = slot.try_borrow_mut() {
            slot.take();
        }
    });
}

/// Takes the snapshot recorded for the last panic on this thread, or captures one here.
pub(crate) fn take() -> String {
    LAST_TRACE
        .try_with(|slot| slot.try_borrow_mut().ok().and_then(|mut slot| slot.take()))
        .ok()
        .flatten()
        .unwrap_or_else(|| Backtrace::force_capture().to_string())
}
