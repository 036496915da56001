use lazy_rail::{Boundary, CallerError, Failure, Policy, Signal};

#[test]
fn default_policy_pairs_caller_wrapping_with_traced_catching() {
    let policy = Policy::default();

    assert_eq!(policy.signal, Signal::WithCaller);
    assert_eq!(policy.boundary, Boundary::CatchAllTraced);
    assert_eq!(policy.to_string(), "with_caller/catch_all_traced");
}

#[test]
fn policy_round_trips_through_its_string_form() {
    for signal in [Signal::Plain, Signal::WithCaller] {
        for boundary in
            [Boundary::ErrorOnly, Boundary::CatchAll, Boundary::CatchAllTraced, Boundary::WrappedOnly]
        {
            let policy = Policy::new(signal, boundary);
            assert_eq!(policy.to_string().parse::<Policy>(), Ok(policy));
        }
    }
}

#[test]
fn policy_guard_writes_the_slot() {
    let policy = Policy::new(Signal::WithCaller, Boundary::WrappedOnly);
    let mut err: Option<Failure> = None;

    let value: Option<u8> = policy.guard(Some(&mut err), || policy.raise(Err("rejected")));

    assert!(value.is_none());
    assert!(err.unwrap().is::<CallerError>());
}

#[test]
fn policy_fail_uses_its_own_signal() {
    let policy = Policy::new(Signal::Plain, Boundary::CatchAll);
    let err = policy.run(|| policy.fail("raw")).unwrap_err();

    assert_eq!(err.to_string(), "raw");
}

#[cfg(feature = "serde")]
mod serde_config {
    use super::*;

    #[test]
    fn policy_serializes_with_snake_case_names() {
        let policy = Policy::new(Signal::Plain, Boundary::WrappedOnly);
        let json = serde_json::to_string(&policy).unwrap();

        assert_eq!(json, r#"{"signal":"plain","boundary":"wrapped_only"}"#);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let policy: Policy = serde_json::from_str(r#"{"boundary":"error_only"}"#).unwrap();

        assert_eq!(policy, Policy::new(Signal::WithCaller, Boundary::ErrorOnly));
    }

    #[test]
    fn unknown_variants_are_rejected() {
        let result = serde_json::from_str::<Policy>(r#"{"signal":"throw"}"#);

        assert!(result.is_err());
    }
}
