//! Selects how two values are considered equivalent.

use std::cmp::Ordering;

use serde::Serialize;

/// The equality method used by `is_equal_to`/`is_not_equal_to`.
///
/// For well-behaved types the two methods agree; they differ only when a
/// type's equality is finer than its ordering, e.g. a decimal type that
/// keeps trailing zeroes but orders numerically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EqualityMethod {
    /// Values are equivalent when `PartialEq` says so.
    #[default]
    Equals,
    /// Values are equivalent when they compare as `Ordering::Equal`.
    Comparable,
}

/// Applies the selected equality method.
///
/// `Comparable` falls back to `PartialEq` when the values are unordered
/// relative to each other (`partial_cmp` returns `None`), so incomparable
/// pairs such as NaN keep their `PartialEq` verdict.
pub fn equivalent<T, U>(method: EqualityMethod, value: &T, other: &U) -> bool
where
    T: PartialEq<U> + PartialOrd<U> + ?Sized,
    U: ?Sized,
{
    match method {
        EqualityMethod::Equals => value == other,
        EqualityMethod::Comparable => match value.partial_cmp(other) {
            Some(ordering) => ordering == Ordering::Equal,
            None => value == other,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn methods_agree_for_consistent_types() {
        assert!(equivalent(EqualityMethod::Equals, &5, &5));
        assert!(equivalent(EqualityMethod::Comparable, &5, &5));
        assert!(!equivalent(EqualityMethod::Equals, &5, &6));
        assert!(!equivalent(EqualityMethod::Comparable, &5, &6));
    }

    #[test]
    fn comparable_falls_back_for_unordered_pairs() {
        // NaN is unordered relative to everything, including itself.
        assert!(!equivalent(EqualityMethod::Comparable, &f64::NAN, &f64::NAN));
        assert!(!equivalent(EqualityMethod::Equals, &f64::NAN, &f64::NAN));
    }

    #[test]
    fn parses_and_displays_snake_case() {
        assert_eq!(EqualityMethod::Comparable.to_string(), "comparable");
        assert_eq!(
            EqualityMethod::from_str("equals").unwrap(),
            EqualityMethod::Equals
        );
    }
}
