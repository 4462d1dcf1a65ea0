use crate::Validator;

/// Checks for boolean values.
pub trait BoolCheck: Sized {
    /// Ensures that the value is `true`.
    fn is_true(self) -> Self;

    /// Ensures that the value is `false`.
    fn is_false(self) -> Self;
}

impl BoolCheck for Validator<bool> {
    fn is_true(self) -> Self {
        self.check_property("must be true", false, |value| *value)
    }

    fn is_false(self) -> Self {
        self.check_property("must be false", false, |value| !*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vouch_config::Configuration;
    use vouch_core::ValidationTarget;

    fn checker(value: bool) -> Validator<bool> {
        Validator::new(
            Configuration::default().with_throw_on_failure(false),
            "actual",
            ValidationTarget::valid(value),
            Vec::new(),
        )
    }

    #[test]
    fn truth_checks() {
        assert!(!checker(true).is_true().validation_failed());
        assert!(!checker(false).is_false().validation_failed());
    }

    #[test]
    fn failure_message() {
        let failures = checker(false).is_true().else_get_failures();
        assert_eq!(failures.messages()[0], "\"actual\" must be true.");
    }
}
