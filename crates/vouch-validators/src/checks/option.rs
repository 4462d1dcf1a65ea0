use std::fmt::Debug;

use vouch_core::ErrorKind;

use crate::messages;
use crate::Validator;

/// Checks for optional values.
pub trait OptionCheck<T>: Sized {
    /// Ensures that the value is present.
    fn is_some(self) -> Self;

    /// Ensures that the value is absent.
    fn is_none(self) -> Self;

    /// Ensures that the value is present and equal to `expected`.
    fn contains(self, expected: &T) -> Self
    where
        T: PartialEq;
}

impl<T: Debug> OptionCheck<T> for Validator<Option<T>> {
    fn is_some(mut self) -> Self {
        let passed = self.target().as_ref().is_none_or(Option::is_some);
        if !passed {
            let builder = messages::constraint(self.name(), None, "must be present");
            self.add_failure(builder, ErrorKind::MissingValue);
        }
        self
    }

    fn is_none(self) -> Self {
        self.check_property("must be absent", true, Option::is_none)
    }

    fn contains(mut self, expected: &T) -> Self
    where
        T: PartialEq,
    {
        let passed = self
            .target()
            .as_ref()
            .is_none_or(|value| value.as_ref() == Some(expected));
        if !passed {
            let expected_repr = self.map_value(expected);
            let builder = messages::compare(
                self.name(),
                self.value_repr(),
                "must contain",
                None,
                &expected_repr,
            );
            self.add_failure(builder, ErrorKind::InvalidArgument);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vouch_config::Configuration;
    use vouch_core::ValidationTarget;

    fn checker(value: Option<i32>) -> Validator<Option<i32>> {
        Validator::new(
            Configuration::default().with_throw_on_failure(false),
            "actual",
            ValidationTarget::valid(value),
            Vec::new(),
        )
    }

    #[test]
    fn presence() {
        assert!(!checker(Some(5)).is_some().validation_failed());
        assert!(checker(None).is_some().validation_failed());
        assert!(!checker(None).is_none().validation_failed());
    }

    #[test]
    fn absence_is_a_missing_value() {
        let failures = checker(None).is_some().else_get_failures();
        assert_eq!(failures.summaries()[0].kind, ErrorKind::MissingValue);
    }

    #[test]
    fn absence_failure_lists_value() {
        let failures = checker(Some(5)).is_none().else_get_failures();
        let message = &failures.messages()[0];
        assert!(message.starts_with("\"actual\" must be absent."));
        assert!(message.contains("actual: Some(5)"));
    }

    #[test]
    fn contained_value() {
        assert!(!checker(Some(5)).contains(&5).validation_failed());
        assert!(checker(Some(4)).contains(&5).validation_failed());
        assert!(checker(None).contains(&5).validation_failed());
    }
}
