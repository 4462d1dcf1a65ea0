use std::fmt::Debug;

use vouch_core::ErrorKind;

use crate::messages;
use crate::Validator;

/// Ordering checks for values with a partial order.
pub trait ComparableCheck<T>: Sized {
    /// Ensures that the value is strictly less than `bound`.
    fn is_less_than<U>(self, bound: &U) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized;

    /// Ensures that the value is strictly less than `bound`, referring to
    /// the bound by `name` in failure messages.
    fn is_less_than_with_name<U>(self, bound: &U, name: &str) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized;

    /// Ensures that the value is less than or equal to `bound`.
    fn is_less_than_or_equal_to<U>(self, bound: &U) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized;

    /// Ensures that the value is less than or equal to `bound`, referring
    /// to the bound by `name` in failure messages.
    fn is_less_than_or_equal_to_with_name<U>(self, bound: &U, name: &str) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized;

    /// Ensures that the value is strictly greater than `bound`.
    fn is_greater_than<U>(self, bound: &U) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized;

    /// Ensures that the value is strictly greater than `bound`, referring
    /// to the bound by `name` in failure messages.
    fn is_greater_than_with_name<U>(self, bound: &U, name: &str) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized;

    /// Ensures that the value is greater than or equal to `bound`.
    fn is_greater_than_or_equal_to<U>(self, bound: &U) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized;

    /// Ensures that the value is greater than or equal to `bound`,
    /// referring to the bound by `name` in failure messages.
    fn is_greater_than_or_equal_to_with_name<U>(self, bound: &U, name: &str) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized;

    /// Ensures that `min <= value < max`.
    fn is_between<U>(self, min: &U, max: &U) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized;

    /// Ensures that `min <= value <= max`.
    fn is_between_closed<U>(self, min: &U, max: &U) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized;
}

impl<T: Debug> ComparableCheck<T> for Validator<T> {
    fn is_less_than<U>(self, bound: &U) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized,
    {
        self.check_order(bound, None, "must be less than", T::lt)
    }

    fn is_less_than_with_name<U>(self, bound: &U, name: &str) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized,
    {
        self.require_name_unique(name, false);
        self.check_order(bound, Some(name), "must be less than", T::lt)
    }

    fn is_less_than_or_equal_to<U>(self, bound: &U) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized,
    {
        self.check_order(bound, None, "must be less than or equal to", T::le)
    }

    fn is_less_than_or_equal_to_with_name<U>(self, bound: &U, name: &str) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized,
    {
        self.require_name_unique(name, false);
        self.check_order(bound, Some(name), "must be less than or equal to", T::le)
    }

    fn is_greater_than<U>(self, bound: &U) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized,
    {
        self.check_order(bound, None, "must be greater than", T::gt)
    }

    fn is_greater_than_with_name<U>(self, bound: &U, name: &str) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized,
    {
        self.require_name_unique(name, false);
        self.check_order(bound, Some(name), "must be greater than", T::gt)
    }

    fn is_greater_than_or_equal_to<U>(self, bound: &U) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized,
    {
        self.check_order(bound, None, "must be greater than or equal to", T::ge)
    }

    fn is_greater_than_or_equal_to_with_name<U>(self, bound: &U, name: &str) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized,
    {
        self.require_name_unique(name, false);
        self.check_order(bound, Some(name), "must be greater than or equal to", T::ge)
    }

    fn is_between<U>(self, min: &U, max: &U) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized,
    {
        self.check_between(min, max, false)
    }

    fn is_between_closed<U>(self, min: &U, max: &U) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized,
    {
        self.check_between(min, max, true)
    }
}

impl<T: Debug> Validator<T> {
    fn check_order<U>(
        mut self,
        bound: &U,
        bound_name: Option<&str>,
        relationship: &str,
        holds: impl Fn(&T, &U) -> bool,
    ) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized,
    {
        let passed = self.target().as_ref().is_none_or(|value| holds(value, bound));
        if !passed {
            let bound_repr = self.map_value(bound);
            let builder = messages::compare(
                self.name(),
                self.value_repr(),
                relationship,
                bound_name,
                &bound_repr,
            );
            self.add_failure(builder, ErrorKind::InvalidArgument);
        }
        self
    }

    fn check_between<U>(mut self, min: &U, max: &U, max_inclusive: bool) -> Self
    where
        T: PartialOrd<U>,
        U: Debug + ?Sized,
    {
        let passed = self.target().as_ref().is_none_or(|value| {
            value.ge(min) && if max_inclusive { value.le(max) } else { value.lt(max) }
        });
        if !passed {
            let bounds = messages::bounds_repr(
                self.map_value(min),
                self.map_value(max),
                true,
                max_inclusive,
            );
            let builder = messages::between(self.name(), self.value_repr(), bounds);
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

    fn checker<T>(value: T) -> Validator<T> {
        Validator::new(
            Configuration::default().with_throw_on_failure(false),
            "actual",
            ValidationTarget::valid(value),
            Vec::new(),
        )
    }

    #[test]
    fn ordering_checks_pass() {
        let v = checker(5)
            .is_less_than(&6)
            .is_less_than_or_equal_to(&5)
            .is_greater_than(&4)
            .is_greater_than_or_equal_to(&5);
        assert!(!v.validation_failed());
    }

    #[test]
    fn less_than_failure_names_the_bound() {
        let failures = checker(5).is_less_than_with_name(&5, "limit").else_get_failures();
        let message = &failures.messages()[0];
        assert!(message.starts_with("\"actual\" must be less than \"limit\"."));
        assert!(message.contains("limit : 5"));
    }

    #[test]
    fn greater_than_failure_lists_actual() {
        let failures = checker(3).is_greater_than(&4).else_get_failures();
        let message = &failures.messages()[0];
        assert!(message.starts_with("\"actual\" must be greater than 4."));
        assert!(message.contains("actual: 3"));
    }

    #[test]
    fn between_excludes_upper_bound() {
        assert!(!checker(4).is_between(&0, &5).validation_failed());
        assert!(checker(5).is_between(&0, &5).validation_failed());
    }

    #[test]
    fn between_closed_includes_upper_bound() {
        assert!(!checker(5).is_between_closed(&0, &5).validation_failed());
    }

    #[test]
    fn between_failure_lists_bounds() {
        let failures = checker(10).is_between(&0, &5).else_get_failures();
        let message = &failures.messages()[0];
        assert!(message.starts_with("\"actual\" is out of bounds."));
        assert!(message.contains("bounds: [0, 5)"));
    }

    #[test]
    fn strings_are_comparable() {
        assert!(!checker("banana").is_greater_than(&"apple").validation_failed());
    }
}
