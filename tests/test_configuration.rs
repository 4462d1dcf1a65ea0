//! Configuration presets and scoped reconfiguration.
//!
//! Every test builds its own `Validators` factory; the process-wide factory
//! is left alone so tests cannot interfere with each other.

use std::sync::Arc;

use vouch::checks::{IntegerCheck, ObjectCheck};
use vouch::{EqualityMethod, ErrorKind, ValidationError, Validators};

#[test]
fn defaults() {
    let validators = Validators::new();
    let configuration = validators.configuration();
    assert!(configuration.clean_stack_trace());
    assert!(configuration.allow_diff());
    assert!(configuration.record_backtrace());
    assert_eq!(configuration.equality_method(), EqualityMethod::Equals);
}

/// A label whose `==` is case-sensitive while its ordering is not.
#[derive(Debug)]
struct Label(&'static str);

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.to_lowercase().partial_cmp(&other.0.to_lowercase())
    }
}

#[test]
fn comparable_equality_treats_equal_order_as_equal() {
    let validators = Validators::new();
    let strict = validators
        .check_if(Label("Foo"), "label")
        .is_equal_to(&Label("foo"))
        .else_get_failures();
    assert_eq!(strict.len(), 1);

    {
        let mut updater = validators.update_configuration();
        updater.set_equality_method(EqualityMethod::Comparable);
    }
    let ordered = validators
        .check_if(Label("Foo"), "label")
        .is_equal_to(&Label("foo"))
        .else_get_failures();
    assert!(ordered.is_empty());
}

#[test]
fn updater_commits_on_drop() {
    let validators = Validators::new();
    {
        let mut updater = validators.update_configuration();
        updater.set_record_backtrace(false);
    }
    assert!(!validators.configuration().record_backtrace());
}

#[test]
fn unchanged_updater_commits_nothing() {
    let validators = Validators::new();
    {
        let updater = validators.update_configuration();
        assert!(updater.allow_diff());
    }
    assert!(validators.configuration().allow_diff());
}

#[test]
fn string_mappers_change_value_rendering() {
    let validators = Validators::new();
    {
        let mut updater = validators.update_configuration();
        updater
            .string_mappers()
            .put::<i32>(|value| format!("int({value:?})"));
    }
    let failures = validators.check_if(5, "count").is_equal_to(&6).else_get_failures();
    assert!(failures.messages()[0].contains("count: int(5)"));
}

#[test]
fn error_transformer_rewrites_failures() {
    let validators = Validators::new();
    {
        let mut updater = validators.update_configuration();
        updater.set_error_transformer(Arc::new(|error: ValidationError| {
            ValidationError::new(
                ErrorKind::InvalidState,
                format!("wrapped: {}", error.message()),
                None,
            )
        }));
    }
    let error = validators
        .check_if(-5, "count")
        .is_positive()
        .into_result()
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidState);
    assert!(error.message().starts_with("wrapped: \"count\" must be positive."));
}

#[test]
fn disabling_diff_removes_the_legend() {
    let validators = Validators::new();
    {
        let mut updater = validators.update_configuration();
        updater.set_allow_diff(false);
    }
    let failures = validators
        .check_if("foo", "word")
        .is_equal_to(&"fog")
        .else_get_failures();
    assert!(!failures.messages()[0].contains("Legend"));
}

#[test]
fn earlier_validators_keep_their_configuration() {
    let validators = Validators::new();
    let before = validators.check_if(5, "count");
    {
        let mut updater = validators.update_configuration();
        updater.set_allow_diff(false);
    }
    assert!(before.configuration().allow_diff());
}

#[cfg(debug_assertions)]
#[test]
fn assert_that_reports_an_assertion_failure() {
    let validators = Validators::new();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _ = validators.assert_that(-5, "count").is_positive();
    }));
    let payload = result.unwrap_err();
    let message = payload.downcast_ref::<String>().unwrap();
    assert!(message.starts_with("assertion failed: \"count\" must be positive."));
}
