//! String checks through the public entry points.

use regex::Regex;
use vouch::prelude::*;

#[test]
fn emptiness_and_blankness() {
    assert!(check_if("", "s").is_empty().else_get_failures().is_empty());
    assert!(check_if("x", "s").is_not_empty().else_get_failures().is_empty());
    assert!(check_if(" \t\n", "s").is_blank().else_get_failures().is_empty());
    assert!(check_if(" x ", "s").is_not_blank().else_get_failures().is_empty());
    assert!(!check_if(" ", "s").is_not_blank().else_get_failures().is_empty());
}

#[test]
fn trimmed() {
    assert!(check_if("abc", "s").is_trimmed().else_get_failures().is_empty());
    let failures = check_if(" abc ", "s").is_trimmed().else_get_failures();
    assert!(failures.messages()[0]
        .starts_with("\"s\" may not contain leading or trailing whitespace."));
}

#[test]
fn affix_checks() {
    let failures = check_if("report.txt", "file")
        .starts_with("report")
        .ends_with(".txt")
        .does_not_start_with("tmp")
        .does_not_end_with(".bak")
        .else_get_failures();
    assert!(failures.is_empty());
}

#[test]
fn affix_failure_quotes_fragments() {
    let failures = check_if("report.txt", "file").ends_with(".csv").else_get_failures();
    let message = &failures.messages()[0];
    assert!(message.starts_with("\"file\" must end with \".csv\"."));
    assert!(message.contains("file: \"report.txt\""));
}

#[test]
fn substring_checks() {
    assert!(check_if("abcdef", "s").contains("cde").else_get_failures().is_empty());
    assert!(check_if("abcdef", "s").does_not_contain("xyz").else_get_failures().is_empty());
    assert!(!check_if("abcdef", "s").contains("xyz").else_get_failures().is_empty());
}

#[test]
fn regex_matching() {
    let semver = Regex::new(r"^\d+\.\d+\.\d+$").unwrap();
    assert!(check_if("1.2.3", "version").matches(&semver).else_get_failures().is_empty());
    let failures = check_if("1.2", "version").matches(&semver).else_get_failures();
    let message = &failures.messages()[0];
    assert!(message.starts_with("\"version\" must match the regular expression"));
    assert!(message.contains("version: \"1.2\""));
}

#[test]
fn owned_and_borrowed_strings_share_the_checks() {
    let owned = String::from("abc");
    assert!(check_if(owned, "s").is_not_empty().else_get_failures().is_empty());
    assert!(check_if("abc", "s").is_not_empty().else_get_failures().is_empty());
}

#[test]
fn length_sub_validator() {
    let failures = check_if("abc", "token")
        .len()
        .is_between(&1usize, &3usize)
        .else_get_failures();
    assert_eq!(failures.len(), 1);
    let message = &failures.messages()[0];
    assert!(message.starts_with("token.len() is out of bounds."));
    assert!(message.contains("bounds"));
}

#[test]
#[should_panic(expected = "\"url\" may not be empty or contain only whitespace.")]
fn require_that_panics_on_blank() {
    let _ = require_that("   ", "url").is_not_blank();
}
