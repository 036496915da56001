use lazy_rail::{
    is_interrupted, CallSite, CallerError, Failure, Interrupted, PanicError, PanicMessage, Payload,
    INTERRUPTED,
};
use std::error::Error;
use std::io;

#[test]
fn caller_error_prefixes_the_call_site() {
    let err = CallerError::at("x".into(), CallSite::new("src/db.rs", 40, 9));

    assert_eq!(err.caller(), "src/db.rs:40: ");
    assert_eq!(err.to_string(), "src/db.rs:40: x");
    assert_eq!(err.call_site().column(), 9);
}

#[test]
fn caller_error_new_captures_this_line() {
    let expected_line = line!() + 1;
    let err = CallerError::new("here".into());

    assert_eq!(err.call_site().file(), file!());
    assert_eq!(err.call_site().line(), expected_line);
}

#[test]
fn caller_error_source_is_the_wrapped_failure_itself() {
    let failure: Failure = Box::new(io::Error::new(io::ErrorKind::NotFound, "root cause"));
    let addr = &*failure as *const (dyn Error + Send + Sync) as *const ();

    let err = CallerError::new(failure);
    let source = err.source().expect("wrapped failure");

    assert_eq!(source as *const dyn Error as *const (), addr);
    assert_eq!(source.to_string(), "root cause");
    assert_eq!(source.downcast_ref::<io::Error>().map(io::Error::kind), Some(io::ErrorKind::NotFound));
}

#[test]
fn caller_error_into_inner_returns_the_failure() {
    let err = CallerError::new("owned".into());

    assert_eq!(err.inner().to_string(), "owned");
    assert_eq!(err.into_inner().to_string(), "owned");
}

#[test]
fn panic_error_display_embeds_payload_and_stack() {
    let err = PanicError::new(Box::new("boom"), "frame 0\nframe 1");

    assert_eq!(err.to_string(), "[panic recovered]:\nboom\n[stack]:\nframe 0\nframe 1");
    assert_eq!(err.recovered(), "boom");
    assert_eq!(err.stack(), "frame 0\nframe 1");
}

#[test]
fn panic_error_cause_is_always_the_sentinel() {
    let payloads: Vec<Box<dyn std::any::Any + Send>> = vec![
        Box::new("text"),
        Box::new(String::from("owned")),
        Box::new(42_i32),
        Box::new(Failure::from("a failure payload")),
    ];

    for payload in payloads {
        let err = PanicError::new(payload, "stack");
        let cause = err.source().expect("sentinel");

        assert!(is_interrupted(cause));
        assert_eq!(cause.downcast_ref::<Interrupted>(), Some(&INTERRUPTED));
        assert!(cause.source().is_none());
    }
}

#[test]
fn sentinel_displays_as_panic() {
    assert_eq!(INTERRUPTED.to_string(), "panic");
    assert!(!is_interrupted(&PanicMessage::new("x")));
}

#[test]
fn panic_message_wraps_payload_text() {
    let err = PanicMessage::from_payload(&String::from("slice index starts at 4"));

    assert_eq!(err.message(), "slice index starts at 4");
    assert_eq!(err.to_string(), "interruption: slice index starts at 4");
}

#[test]
fn payload_from_failure_sorts_wrappers() {
    let caller: Failure = Box::new(CallerError::new("c".into()));
    let panic: Failure = Box::new(PanicError::new(Box::new("p"), ""));
    let plain: Failure = "p".into();

    assert!(matches!(Payload::from_failure(caller), Payload::Caller(_)));
    assert!(matches!(Payload::from_failure(panic), Payload::Panic(_)));
    assert!(matches!(Payload::from_failure(plain), Payload::Plain(_)));
}

#[test]
fn payload_predicates_follow_the_shape() {
    let caller = Payload::Caller(Box::new(CallerError::new("c".into())));
    let plain = Payload::Plain("p".into());
    let foreign = Payload::Foreign(Box::new(()));

    assert!(caller.is_failure() && caller.is_wrapped());
    assert!(plain.is_failure() && !plain.is_wrapped());
    assert!(!foreign.is_failure() && !foreign.is_wrapped());
    assert_eq!(foreign.kind(), "foreign");
}

#[test]
fn payload_into_failure_hands_foreign_payloads_back() {
    let raw = Payload::Foreign(Box::new(11_u8)).into_failure().unwrap_err();
    assert_eq!(raw.downcast_ref::<u8>(), Some(&11));

    let failure = Payload::Plain("plain".into()).into_failure().unwrap();
    assert_eq!(failure.to_string(), "plain");
}
