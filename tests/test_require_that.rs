//! End-to-end coverage of the panicking entry point.
//!
//! `require_that` panics on the first failed check, so each failure case
//! lives in its own `#[should_panic]` test pinned to the expected message.

use vouch::prelude::*;

#[test]
fn passing_chain_returns_the_validator() {
    let v = require_that(5, "count").is_positive().is_less_than(&10);
    assert_eq!(v.value(), Some(&5));
    assert!(!v.validation_failed());
}

#[test]
fn get_value_or_default_returns_the_value() {
    let value = require_that(5, "count").is_positive().get_value_or_default(0);
    assert_eq!(value, 5);
}

#[test]
#[should_panic(expected = "\"count\" must be positive.")]
fn failed_check_panics_with_the_message() {
    let _ = require_that(-5, "count").is_positive();
}

#[test]
#[should_panic(expected = "count: -5")]
fn panic_message_lists_the_actual_value() {
    let _ = require_that(-5, "count").is_positive();
}

#[test]
#[should_panic(expected = "\"count\" must be less than \"limit\".")]
fn named_operands_are_quoted() {
    let _ = require_that(5, "count").is_less_than_with_name(&5, "limit");
}

#[test]
#[should_panic(expected = "name may not be empty")]
fn empty_name_is_rejected_in_every_mode() {
    let _ = require_that(5, "");
}

#[test]
#[should_panic(expected = "name may not contain whitespace")]
fn whitespace_name_is_rejected() {
    let _ = require_that(5, "the count");
}

#[test]
fn and_groups_checks() {
    let v = require_that(5, "count").and(|v| v.is_positive().is_not_zero());
    assert_eq!(v.value(), Some(&5));
}

#[test]
#[should_panic(expected = "\"flag\" must be true.")]
fn bool_checks_panic_on_failure() {
    let _ = require_that(false, "flag").is_true();
}

#[test]
fn string_chain() {
    let _ = require_that("listener", "role")
        .is_not_blank()
        .starts_with("list")
        .does_not_contain(" ");
}

#[test]
fn collection_chain() {
    let _ = require_that(vec![1, 2, 3], "ids")
        .is_not_empty()
        .contains(&2)
        .does_not_contain_duplicates();
}
