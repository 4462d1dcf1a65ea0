use std::fmt::Debug;

use regex::Regex;
use vouch_core::ErrorKind;

use crate::messages;
use crate::Validator;

/// Checks for string values.
///
/// Implemented for every type that dereferences to `str`, so `String`,
/// `&str`, and wrappers like `Cow<'_, str>` all qualify.
pub trait StringCheck: Sized {
    /// Ensures that the value is empty.
    fn is_empty(self) -> Self;

    /// Ensures that the value is not empty.
    fn is_not_empty(self) -> Self;

    /// Ensures that the value is empty or consists only of whitespace.
    fn is_blank(self) -> Self;

    /// Ensures that the value contains at least one non-whitespace
    /// character.
    fn is_not_blank(self) -> Self;

    /// Ensures that the value has no leading or trailing whitespace.
    fn is_trimmed(self) -> Self;

    /// Ensures that the value starts with `prefix`.
    fn starts_with(self, prefix: &str) -> Self;

    /// Ensures that the value does not start with `prefix`.
    fn does_not_start_with(self, prefix: &str) -> Self;

    /// Ensures that the value ends with `suffix`.
    fn ends_with(self, suffix: &str) -> Self;

    /// Ensures that the value does not end with `suffix`.
    fn does_not_end_with(self, suffix: &str) -> Self;

    /// Ensures that the value contains `expected`.
    fn contains(self, expected: &str) -> Self;

    /// Ensures that the value does not contain `unwanted`.
    fn does_not_contain(self, unwanted: &str) -> Self;

    /// Ensures that the value matches `pattern`.
    fn matches(self, pattern: &Regex) -> Self;

    /// Shifts the validation to the value's length in bytes.
    fn len(self) -> Validator<usize>;
}

impl<S: AsRef<str> + Debug> StringCheck for Validator<S> {
    fn is_empty(self) -> Self {
        self.check_property("must be empty", true, |value: &S| value.as_ref().is_empty())
    }

    fn is_not_empty(self) -> Self {
        self.check_property("may not be empty", false, |value: &S| {
            !value.as_ref().is_empty()
        })
    }

    fn is_blank(self) -> Self {
        self.check_property("must be empty or contain only whitespace", true, |value: &S| {
            value.as_ref().trim().is_empty()
        })
    }

    fn is_not_blank(self) -> Self {
        self.check_property("may not be empty or contain only whitespace", false, |value: &S| {
            !value.as_ref().trim().is_empty()
        })
    }

    fn is_trimmed(self) -> Self {
        self.check_property(
            "may not contain leading or trailing whitespace",
            true,
            |value: &S| {
                let value = value.as_ref();
                value.trim() == value
            },
        )
    }

    fn starts_with(self, prefix: &str) -> Self {
        self.check_fragment(prefix, "must start with", |value, fragment| {
            value.starts_with(fragment)
        })
    }

    fn does_not_start_with(self, prefix: &str) -> Self {
        self.check_fragment(prefix, "may not start with", |value, fragment| {
            !value.starts_with(fragment)
        })
    }

    fn ends_with(self, suffix: &str) -> Self {
        self.check_fragment(suffix, "must end with", |value, fragment| {
            value.ends_with(fragment)
        })
    }

    fn does_not_end_with(self, suffix: &str) -> Self {
        self.check_fragment(suffix, "may not end with", |value, fragment| {
            !value.ends_with(fragment)
        })
    }

    fn contains(self, expected: &str) -> Self {
        self.check_fragment(expected, "must contain", |value, fragment| {
            value.contains(fragment)
        })
    }

    fn does_not_contain(self, unwanted: &str) -> Self {
        self.check_fragment(unwanted, "may not contain", |value, fragment| {
            !value.contains(fragment)
        })
    }

    fn matches(mut self, pattern: &Regex) -> Self {
        let passed = self
            .target()
            .as_ref()
            .is_none_or(|value| pattern.is_match(value.as_ref()));
        if !passed {
            let pattern_repr = format!("{:?}", pattern.as_str());
            let builder = messages::compare(
                self.name(),
                self.value_repr(),
                "must match the regular expression",
                None,
                &pattern_repr,
            );
            self.add_failure(builder, ErrorKind::InvalidArgument);
        }
        self
    }

    fn len(self) -> Validator<usize> {
        self.derive("len()", |value| value.as_ref().len())
    }
}

impl<S: AsRef<str> + Debug> Validator<S> {
    fn check_fragment(
        mut self,
        fragment: &str,
        relationship: &str,
        holds: impl Fn(&str, &str) -> bool,
    ) -> Self {
        let passed = self
            .target()
            .as_ref()
            .is_none_or(|value| holds(value.as_ref(), fragment));
        if !passed {
            let fragment_repr = format!("{fragment:?}");
            let builder = messages::compare(
                self.name(),
                self.value_repr(),
                relationship,
                None,
                &fragment_repr,
            );
            self.add_failure(builder, ErrorKind::InvalidArgument);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::ObjectCheck;
    use vouch_config::Configuration;
    use vouch_core::ValidationTarget;

    fn checker(value: &str) -> Validator<&str> {
        Validator::new(
            Configuration::default().with_throw_on_failure(false),
            "actual",
            ValidationTarget::valid(value),
            Vec::new(),
        )
    }

    #[test]
    fn emptiness() {
        assert!(!checker("").is_empty().validation_failed());
        assert!(checker("x").is_empty().validation_failed());
        assert!(!checker("x").is_not_empty().validation_failed());
    }

    #[test]
    fn blankness() {
        assert!(!checker("  \t").is_blank().validation_failed());
        assert!(!checker("").is_blank().validation_failed());
        assert!(checker(" x ").is_blank().validation_failed());
        assert!(!checker("x").is_not_blank().validation_failed());
        assert!(checker("  ").is_not_blank().validation_failed());
    }

    #[test]
    fn trimmed() {
        assert!(!checker("abc").is_trimmed().validation_failed());
        assert!(checker(" abc").is_trimmed().validation_failed());
        assert!(checker("abc\n").is_trimmed().validation_failed());
    }

    #[test]
    fn affixes() {
        assert!(!checker("prefix-body").starts_with("prefix").validation_failed());
        assert!(checker("body").starts_with("prefix").validation_failed());
        assert!(!checker("body-suffix").ends_with("suffix").validation_failed());
        assert!(!checker("body").does_not_start_with("prefix").validation_failed());
        assert!(!checker("body").does_not_end_with("suffix").validation_failed());
    }

    #[test]
    fn substring_failure_quotes_the_fragment() {
        let failures = checker("abc").contains("xyz").else_get_failures();
        let message = &failures.messages()[0];
        assert!(message.starts_with("\"actual\" must contain \"xyz\"."));
        assert!(message.contains("actual: \"abc\""));
    }

    #[test]
    fn regex_matching() {
        let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
        assert!(!checker("2026-08-26").matches(&pattern).validation_failed());
        let failures = checker("today").matches(&pattern).else_get_failures();
        assert!(failures.messages()[0].contains("must match the regular expression"));
    }

    #[test]
    fn len_derives_a_named_sub_validator() {
        let failures = checker("abc").len().is_equal_to(&5usize).else_get_failures();
        let message = &failures.messages()[0];
        assert!(message.starts_with("actual.len() must be equal to 5."));
        assert!(message.contains("actual.len(): 3"));
    }

    #[test]
    fn owned_strings_qualify() {
        let v = Validator::new(
            Configuration::default().with_throw_on_failure(false),
            "actual",
            ValidationTarget::valid(String::from("abc")),
            Vec::new(),
        );
        assert!(!v.is_not_empty().validation_failed());
    }
}
