//! Shared failure-message construction.
//!
//! Every check builds its message through these helpers so the phrasing and
//! contextual `name: value` lines stay uniform across the crate.

use vouch_message::{quote_name, MessageBuilder};

/// A failure comparing the value against another operand, e.g.
/// `"actual" must be less than "limit".` with the actual and expected
/// values listed as context.
pub(crate) fn compare(
    name: &str,
    value_repr: Option<String>,
    relationship: &str,
    other_name: Option<&str>,
    other_repr: &str,
) -> MessageBuilder {
    let other = match other_name {
        Some(other_name) => quote_name(other_name),
        None => other_repr.to_string(),
    };
    let mut builder = MessageBuilder::new(format!("{} {relationship} {other}.", quote_name(name)));
    if let Some(value_repr) = value_repr {
        builder = builder.with_context(name, value_repr);
    }
    if let Some(other_name) = other_name {
        builder = builder.with_context(other_name, other_repr);
    }
    builder
}

/// A failure stating a property of the value itself, e.g.
/// `"actual" may not be empty.`
pub(crate) fn constraint(name: &str, value_repr: Option<String>, constraint: &str) -> MessageBuilder {
    let mut builder = MessageBuilder::new(format!("{} {constraint}.", quote_name(name)));
    if let Some(value_repr) = value_repr {
        builder = builder.with_context(name, value_repr);
    }
    builder
}

/// A range-check failure listing the permitted bounds.
pub(crate) fn between(name: &str, value_repr: Option<String>, bounds_repr: String) -> MessageBuilder {
    let mut builder = MessageBuilder::new(format!("{} is out of bounds.", quote_name(name)));
    if let Some(value_repr) = value_repr {
        builder = builder.with_context(name, value_repr);
    }
    builder.with_context("bounds", bounds_repr)
}

/// Interval notation for range checks: `[min, max)` and friends.
pub(crate) fn bounds_repr(min: String, max: String, min_inclusive: bool, max_inclusive: bool) -> String {
    let open = if min_inclusive { '[' } else { '(' };
    let close = if max_inclusive { ']' } else { ')' };
    format!("{open}{min}, {max}{close}")
}
