use std::backtrace::Backtrace;
use std::fmt::Debug;

use vouch_config::Configuration;
use vouch_core::{ErrorKind, ValidationError, ValidationFailure, ValidationFailures, ValidationTarget};
use vouch_message::MessageBuilder;

/// Validates the state of a single value.
///
/// A validator carries the value under validation, the name used in failure
/// messages, the configuration that decides how failures are reported, the
/// contextual key/value pairs included in messages, and the failures
/// accumulated so far. Checks consume and return the validator, so failure
/// state flows through the chain and into sub-validators such as
/// `map.keys()`.
#[derive(Debug)]
pub struct Validator<T> {
    name: String,
    value: ValidationTarget<T>,
    configuration: Configuration,
    context: Vec<(String, String)>,
    failures: Vec<ValidationFailure>,
}

impl<T> Validator<T> {
    /// Creates a validator.
    ///
    /// # Panics
    ///
    /// If `name` is empty or contains whitespace. A malformed name is a
    /// programming error and is reported regardless of the configured
    /// failure mode.
    pub fn new(
        configuration: Configuration,
        name: impl Into<String>,
        value: ValidationTarget<T>,
        context: Vec<(String, String)>,
    ) -> Self {
        let name = name.into();
        validate_name(&name);
        Self {
            name,
            value,
            configuration,
            context,
            failures: Vec::new(),
        }
    }

    /// The name of the value being validated.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The validator's configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Borrows the value under validation, if it is defined.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// `true` if at least one check failed.
    pub fn validation_failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Consumes the validator, returning the value or `default` if the
    /// value is undefined.
    pub fn get_value_or_default(self, default: T) -> T {
        self.value.or_default(default)
    }

    /// Runs a group of checks as one unit.
    pub fn and(self, checks: impl FnOnce(Self) -> Self) -> Self {
        checks(self)
    }

    /// Adds contextual information to append to failure messages. The value
    /// is rendered through the configuration's string mappers immediately.
    ///
    /// # Panics
    ///
    /// If `name` is malformed or already in use by the value being
    /// validated or by existing context.
    pub fn with_context<V: Debug + ?Sized>(mut self, value: &V, name: &str) -> Self {
        self.require_name_unique(name, true);
        let rendered = self.configuration.string_mappers().map(value);
        self.context.push((name.to_string(), rendered));
        self
    }

    /// The validator's context rendered as aligned `name: value` lines.
    pub fn context_as_string(&self) -> String {
        MessageBuilder::new("")
            .render(&self.context)
            .trim_start_matches('\n')
            .to_string()
    }

    /// Consumes the validator, returning the accumulated failures.
    pub fn else_get_failures(self) -> ValidationFailures {
        ValidationFailures::new(self.failures)
    }

    /// Consumes the validator: the value if every check passed, otherwise
    /// the accumulated failures folded into one error.
    ///
    /// An undefined value with no recorded failures (e.g. an `assert_that`
    /// validator in a release build) yields an `InvalidState` error.
    pub fn into_result(self) -> Result<T, ValidationError> {
        if let Some(error) = ValidationFailures::new(self.failures).into_error() {
            return Err(error);
        }
        self.value.into_option().ok_or_else(|| {
            ValidationError::new(ErrorKind::InvalidState, "value is undefined".into(), None)
        })
    }

    /// The value's target state.
    pub(crate) fn target(&self) -> &ValidationTarget<T> {
        &self.value
    }

    /// Renders a value through the configuration's string mappers.
    pub(crate) fn map_value<V: Debug + ?Sized>(&self, value: &V) -> String {
        self.configuration.string_mappers().map(value)
    }

    /// The rendered value under validation, if defined.
    pub(crate) fn value_repr(&self) -> Option<String>
    where
        T: Debug,
    {
        self.value.as_ref().map(|v| self.map_value(v))
    }

    /// Records a failure, panicking instead when the configuration throws
    /// on failure.
    pub(crate) fn add_failure(&mut self, builder: MessageBuilder, kind: ErrorKind) {
        let message = builder.render(&self.context);
        let error =
            (self.configuration.error_transformer())(ValidationError::new(kind, message, None));
        tracing::trace!(name = %self.name, kind = %error.kind(), "validation failure");
        if self.configuration.throw_on_failure() {
            panic!("{error}");
        }
        let backtrace = self.configuration.record_backtrace().then(Backtrace::capture);
        self.failures.push(ValidationFailure::new(
            error,
            backtrace,
            self.configuration.clean_stack_trace(),
        ));
    }

    /// Evaluates a unary predicate, recording `constraint` as the failure
    /// message when it does not hold. `show_value` controls whether the
    /// actual value is listed as context. Undefined values skip the check,
    /// so released-build assertion validators cost nothing.
    pub(crate) fn check_property(
        mut self,
        constraint: &str,
        show_value: bool,
        predicate: impl Fn(&T) -> bool,
    ) -> Self
    where
        T: Debug,
    {
        let passed = self.target().as_ref().is_none_or(&predicate);
        if !passed {
            let value_repr = if show_value { self.value_repr() } else { None };
            let builder = crate::messages::constraint(self.name(), value_repr, constraint);
            self.add_failure(builder, ErrorKind::InvalidArgument);
        }
        self
    }

    /// Derives a sub-validator focused on `op` applied to the value, e.g.
    /// `len()` or `keys()`. The derived name is `parent.op` and the
    /// configuration, context, and accumulated failures carry over.
    pub(crate) fn derive<U: Debug>(self, op: &str, f: impl FnOnce(&T) -> U) -> Validator<U> {
        let value = match self.value.as_ref() {
            Some(value) => ValidationTarget::valid(f(value)),
            None => ValidationTarget::undefined(),
        };
        Validator {
            name: format!("{}.{op}", self.name),
            value,
            configuration: self.configuration,
            context: self.context,
            failures: self.failures,
        }
    }

    /// Ensures that a name does not conflict with names already in use by
    /// this validator. Used by `_with_name` check variants and
    /// `with_context`.
    ///
    /// # Panics
    ///
    /// If the name is malformed, equals the value's name, or (when
    /// `check_context` is set) is already present in the context.
    pub(crate) fn require_name_unique(&self, name: &str, check_context: bool) {
        validate_name(name);
        assert!(
            name != self.name,
            "the name {name:?} is already in use by the value being validated; choose a different name"
        );
        if check_context {
            assert!(
                !self.context.iter().any(|(n, _)| n == name),
                "the name {name:?} is already in use by the validator context; choose a different name"
            );
        }
    }
}

/// Rejects empty and whitespace-bearing names.
pub(crate) fn validate_name(name: &str) {
    assert!(!name.is_empty(), "name may not be empty");
    assert!(
        !name.chars().any(char::is_whitespace),
        "name may not contain whitespace; actual: {name:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_configuration() -> Configuration {
        Configuration::default().with_throw_on_failure(false)
    }

    fn validator(value: i32) -> Validator<i32> {
        Validator::new(
            check_configuration(),
            "actual",
            ValidationTarget::valid(value),
            Vec::new(),
        )
    }

    #[test]
    #[should_panic(expected = "name may not be empty")]
    fn empty_name_panics() {
        let _ = Validator::new(
            Configuration::default(),
            "",
            ValidationTarget::valid(5),
            Vec::new(),
        );
    }

    #[test]
    #[should_panic(expected = "may not contain whitespace")]
    fn whitespace_name_panics() {
        let _ = Validator::new(
            Configuration::default(),
            "two words",
            ValidationTarget::valid(5),
            Vec::new(),
        );
    }

    #[test]
    fn into_result_returns_value_without_failures() {
        assert_eq!(validator(5).into_result().unwrap(), 5);
    }

    #[test]
    fn add_failure_accumulates_in_check_mode() {
        let mut v = validator(5);
        v.add_failure(
            MessageBuilder::new("\"actual\" must be 6."),
            ErrorKind::InvalidArgument,
        );
        assert!(v.validation_failed());
        let failures = v.else_get_failures();
        assert_eq!(failures.messages(), vec!["\"actual\" must be 6."]);
    }

    #[test]
    #[should_panic(expected = "\"actual\" must be 6.")]
    fn add_failure_panics_in_throw_mode() {
        let mut v = Validator::new(
            Configuration::default(),
            "actual",
            ValidationTarget::valid(5),
            Vec::new(),
        );
        v.add_failure(
            MessageBuilder::new("\"actual\" must be 6."),
            ErrorKind::InvalidArgument,
        );
    }

    #[test]
    fn failure_messages_include_context() {
        let mut v = validator(5).with_context(&42, "request_id");
        v.add_failure(MessageBuilder::new("sentence."), ErrorKind::InvalidArgument);
        let messages = v.else_get_failures().messages();
        assert!(messages[0].contains("request_id: 42"));
    }

    #[test]
    #[should_panic(expected = "already in use by the value being validated")]
    fn context_name_may_not_shadow_value_name() {
        let _ = validator(5).with_context(&1, "actual");
    }

    #[test]
    #[should_panic(expected = "already in use by the validator context")]
    fn context_name_may_not_repeat() {
        let _ = validator(5).with_context(&1, "extra").with_context(&2, "extra");
    }

    #[test]
    fn derive_carries_failures_and_composed_name() {
        let mut v = validator(5);
        v.add_failure(MessageBuilder::new("first."), ErrorKind::InvalidArgument);
        let derived = v.derive("abs()", |value| value.abs());
        assert_eq!(derived.name(), "actual.abs()");
        assert_eq!(derived.value(), Some(&5));
        assert!(derived.validation_failed());
    }

    #[test]
    fn undefined_value_yields_invalid_state() {
        let v: Validator<i32> = Validator::new(
            check_configuration(),
            "actual",
            ValidationTarget::undefined(),
            Vec::new(),
        );
        let error = v.into_result().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidState);
    }
}
