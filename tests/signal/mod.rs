use lazy_rail::{Boundary, CallerError, Failure, PanicError, Signal};
use std::error::Error;

#[test]
fn ok_results_pass_through_every_signal() {
    for signal in [Signal::Plain, Signal::WithCaller] {
        let mut err: Option<Failure> = None;
        let value = Boundary::CatchAllTraced.guard(Some(&mut err), || signal.raise(Ok::<_, &str>(5)));

        assert_eq!(value, Some(5));
        assert!(err.is_none(), "{signal}");
    }
}

#[test]
fn plain_signal_raises_the_failure_unwrapped() {
    let err = Boundary::ErrorOnly.run(|| Signal::Plain.fail("plain")).unwrap_err();

    assert_eq!(err.to_string(), "plain");
    assert!(!err.is::<CallerError>());
}

#[test]
fn plain_signal_preserves_failure_identity() {
    let failure: Failure = "same".into();
    let addr = &*failure as *const (dyn Error + Send + Sync) as *const ();

    let err = Boundary::ErrorOnly.run(move || Signal::Plain.fail(failure)).unwrap_err();

    assert_eq!(&*err as *const (dyn Error + Send + Sync) as *const (), addr);
}

#[test]
fn with_caller_records_the_raising_line() {
    let expected_line = line!() + 1;
    let err = Boundary::CatchAll.run(|| Signal::WithCaller.fail("x")).unwrap_err();

    let caller = err.downcast_ref::<CallerError>().expect("caller-wrapped failure");
    assert_eq!(caller.call_site().file(), file!());
    assert_eq!(caller.call_site().line(), expected_line);
    assert_eq!(err.to_string(), format!("{}:{}: x", file!(), expected_line));
}

#[test]
fn with_caller_points_past_helper_functions_only_when_they_track_the_caller() {
    #[track_caller]
    fn tracked() -> ! {
        Signal::WithCaller.fail("tracked")
    }

    fn untracked() -> ! {
        Signal::WithCaller.fail("untracked")
    }

    let expected_line = line!() + 1;
    let tracked_err = Boundary::CatchAll.run(|| tracked()).unwrap_err();
    let untracked_err = Boundary::CatchAll.run(|| untracked()).unwrap_err();

    let tracked_site = tracked_err.downcast_ref::<CallerError>().unwrap().call_site();
    let untracked_site = untracked_err.downcast_ref::<CallerError>().unwrap().call_site();
    assert_eq!(tracked_site.line(), expected_line);
    assert!(untracked_site.line() < expected_line);
}

#[test]
fn with_caller_does_not_wrap_twice() {
    let first_line = line!() + 1;
    let inner = Boundary::CatchAll.run(|| Signal::WithCaller.fail("deep")).unwrap_err();
    let single = inner.to_string();

    let reraised = Boundary::CatchAll.run(move || Signal::WithCaller.fail(inner)).unwrap_err();

    assert_eq!(reraised.to_string(), single);
    assert_eq!(reraised.to_string().matches(file!()).count(), 1);
    let caller = reraised.downcast_ref::<CallerError>().unwrap();
    assert_eq!(caller.call_site().line(), first_line);
    assert_eq!(caller.inner().to_string(), "deep");
}

#[test]
fn with_caller_leaves_panic_errors_unwrapped() {
    let panic = Boundary::CatchAllTraced.run(|| -> () { panic!("fault") }).unwrap_err();
    assert!(panic.is::<PanicError>());
    let text = panic.to_string();

    let reraised = Boundary::CatchAll.run(move || Signal::WithCaller.fail(panic)).unwrap_err();

    assert!(reraised.is::<PanicError>());
    assert_eq!(reraised.to_string(), text);
}

#[test]
fn signals_unwind_through_intermediate_frames() {
    fn level_three(fail: bool) -> u32 {
        Signal::WithCaller.raise(if fail { Err("bottom") } else { Ok(3) })
    }

    fn level_two(fail: bool) -> u32 {
        level_three(fail) * 10
    }

    fn level_one(fail: bool) -> u32 {
        level_two(fail) + 1
    }

    assert_eq!(Boundary::ErrorOnly.run(|| level_one(false)).unwrap(), 31);

    let err = Boundary::ErrorOnly.run(|| level_one(true)).unwrap_err();
    assert!(err.to_string().ends_with(": bottom"));
}

#[test]
fn package_wraps_without_unwinding() {
    let packaged = Signal::WithCaller.package("later".into());

    assert!(packaged.is::<CallerError>());
    assert_eq!(Signal::Plain.package("as is".into()).to_string(), "as is");
}
