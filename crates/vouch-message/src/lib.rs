//! Failure message construction
//!
//! Failure messages open with a sentence naming the value and the broken
//! expectation, followed by aligned `name: value` context lines and, for
//! equality failures, an optional diff section comparing the actual and
//! expected renderings.

mod builder;
mod diff;

pub use builder::MessageBuilder;
pub use diff::diff_values;

/// Quotes the name of a value, unless it contains a dot. Dotted names,
/// whether derived (`map.keys()`) or caller-supplied (`request.size`),
/// read as paths and stay unquoted.
pub fn quote_name(name: &str) -> String {
    if name.contains('.') {
        name.to_string()
    } else {
        format!("\"{name}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_quoted() {
        assert_eq!(quote_name("actual"), "\"actual\"");
    }

    #[test]
    fn derived_names_stay_unquoted() {
        assert_eq!(quote_name("map.keys()"), "map.keys()");
    }

    #[test]
    fn caller_supplied_dotted_names_stay_unquoted() {
        assert_eq!(quote_name("request.size"), "request.size");
    }
}
