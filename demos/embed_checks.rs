//! Embedding vouch in an application.
//!
//! Run with `cargo run --example embed_checks`. Demonstrates the three
//! failure modes, shared context, and a scoped factory with its own
//! configuration.

use std::collections::HashMap;

use vouch::prelude::*;
use vouch::{EqualityMethod, Validators};

#[derive(Debug)]
struct Upload {
    name: String,
    bytes: Vec<u8>,
    tags: Vec<String>,
}

fn accept_upload(upload: &Upload) {
    require_that(upload.name.as_str(), "upload.name")
        .is_not_blank()
        .is_trimmed();
    require_that(upload.bytes.as_slice(), "upload.bytes").is_not_empty();
    require_that(upload.tags.as_slice(), "upload.tags").does_not_contain_duplicates();

    // Internal invariants cost nothing in release builds.
    assert_that(upload.bytes.len(), "upload.bytes.len").is_less_than(&(1 << 20));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let upload = Upload {
        name: "report.pdf".to_string(),
        bytes: vec![0x25, 0x50, 0x44, 0x46],
        tags: vec!["finance".to_string(), "q3".to_string()],
    };
    accept_upload(&upload);
    println!("upload accepted: {}", upload.name);

    // Accumulating mode gathers every failure before reporting.
    let settings = HashMap::from([("retries", "3"), ("timeout", "-1")]);
    let failures = check_if(settings, "settings")
        .contains_key(&"retries")
        .contains_key(&"backoff")
        .else_get_failures();
    for message in failures.messages() {
        println!("--\n{message}");
    }

    // A scoped factory keeps configuration changes away from the shared one.
    let validators = Validators::new();
    {
        let mut updater = validators.update_configuration();
        updater.set_equality_method(EqualityMethod::Comparable);
        updater.set_record_backtrace(false);
    }
    validators.with_context(&"demo", "source");
    match validators.check_if(-3, "retries").is_not_negative().into_result() {
        Ok(value) => println!("retries = {value}"),
        Err(error) => println!("--\nrejected: {error}"),
    }
}
