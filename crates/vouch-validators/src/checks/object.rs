use std::fmt::Debug;

use vouch_core::equality::equivalent;
use vouch_core::ErrorKind;
use vouch_message::diff_values;

use crate::messages;
use crate::Validator;

/// Checks available on every value.
///
/// Equality honours the configured
/// [`EqualityMethod`](vouch_core::EqualityMethod), so both operands must be
/// comparable as well as equatable. Unordered types such as `HashMap` fall
/// outside these checks; their container traits cover what can be checked
/// without an order.
pub trait ObjectCheck<T>: Sized {
    /// Ensures that the value is equal to `expected`.
    fn is_equal_to<U>(self, expected: &U) -> Self
    where
        T: PartialEq<U> + PartialOrd<U>,
        U: Debug + ?Sized;

    /// Ensures that the value is equal to `expected`, referring to the
    /// expected value by `name` in failure messages.
    fn is_equal_to_with_name<U>(self, expected: &U, name: &str) -> Self
    where
        T: PartialEq<U> + PartialOrd<U>,
        U: Debug + ?Sized;

    /// Ensures that the value is not equal to `unwanted`.
    fn is_not_equal_to<U>(self, unwanted: &U) -> Self
    where
        T: PartialEq<U> + PartialOrd<U>,
        U: Debug + ?Sized;

    /// Ensures that the value is not equal to `unwanted`, referring to the
    /// unwanted value by `name` in failure messages.
    fn is_not_equal_to_with_name<U>(self, unwanted: &U, name: &str) -> Self
    where
        T: PartialEq<U> + PartialOrd<U>,
        U: Debug + ?Sized;
}

impl<T: Debug> ObjectCheck<T> for Validator<T> {
    fn is_equal_to<U>(self, expected: &U) -> Self
    where
        T: PartialEq<U> + PartialOrd<U>,
        U: Debug + ?Sized,
    {
        self.check_equal(expected, None)
    }

    fn is_equal_to_with_name<U>(self, expected: &U, name: &str) -> Self
    where
        T: PartialEq<U> + PartialOrd<U>,
        U: Debug + ?Sized,
    {
        self.require_name_unique(name, false);
        self.check_equal(expected, Some(name))
    }

    fn is_not_equal_to<U>(self, unwanted: &U) -> Self
    where
        T: PartialEq<U> + PartialOrd<U>,
        U: Debug + ?Sized,
    {
        self.check_not_equal(unwanted, None)
    }

    fn is_not_equal_to_with_name<U>(self, unwanted: &U, name: &str) -> Self
    where
        T: PartialEq<U> + PartialOrd<U>,
        U: Debug + ?Sized,
    {
        self.require_name_unique(name, false);
        self.check_not_equal(unwanted, Some(name))
    }
}

impl<T: Debug> Validator<T> {
    fn check_equal<U>(mut self, expected: &U, expected_name: Option<&str>) -> Self
    where
        T: PartialEq<U> + PartialOrd<U>,
        U: Debug + ?Sized,
    {
        let method = self.configuration().equality_method();
        let passed = self
            .target()
            .as_ref()
            .is_none_or(|value| equivalent(method, value, expected));
        if !passed {
            let expected_repr = self.map_value(expected);
            let value_repr = self.value_repr();
            let mut builder = messages::compare(
                self.name(),
                value_repr.clone(),
                "must be equal to",
                expected_name,
                &expected_repr,
            );
            if self.configuration().allow_diff()
                && let Some(actual_repr) = value_repr
                && let Some(lines) = diff_values(&actual_repr, &expected_repr)
            {
                builder = builder.with_diff(lines);
            }
            self.add_failure(builder, ErrorKind::InvalidArgument);
        }
        self
    }

    fn check_not_equal<U>(mut self, unwanted: &U, unwanted_name: Option<&str>) -> Self
    where
        T: PartialEq<U> + PartialOrd<U>,
        U: Debug + ?Sized,
    {
        let method = self.configuration().equality_method();
        let passed = self
            .target()
            .as_ref()
            .is_none_or(|value| !equivalent(method, value, unwanted));
        if !passed {
            let unwanted_repr = self.map_value(unwanted);
            let builder = messages::compare(
                self.name(),
                self.value_repr(),
                "may not be equal to",
                unwanted_name,
                &unwanted_repr,
            );
            self.add_failure(builder, ErrorKind::InvalidArgument);
        }
        self
    }
}
