//! The valid/undefined wrapper around values under validation.

/// A value that may be undefined.
///
/// This is not a replacement for [`Option`]: `None` is a perfectly valid
/// value to validate. A target becomes undefined when the validator cannot
/// produce a value at all, e.g. a sub-validator derived from an undefined
/// parent, or an `assert_that` validator in a build without
/// `debug_assertions`. Checks on an undefined target record nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationTarget<T> {
    /// The value is present and checks apply to it.
    Valid(T),
    /// There is no value; every check is a no-op.
    Undefined,
}

impl<T> ValidationTarget<T> {
    /// Wraps a value.
    pub fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// An undefined target.
    pub fn undefined() -> Self {
        Self::Undefined
    }

    /// `true` if the target holds a value.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Borrows the value, if defined.
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Undefined => None,
        }
    }

    /// The value, or `default` if the target is undefined.
    pub fn or_default(self, default: T) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Undefined => default,
        }
    }

    /// The value as an `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Undefined => None,
        }
    }

    /// Applies `f` to the value if it is defined.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValidationTarget<U> {
        match self {
            Self::Valid(value) => ValidationTarget::Valid(f(value)),
            Self::Undefined => ValidationTarget::Undefined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_round_trips() {
        let target = ValidationTarget::valid(5);
        assert!(target.is_valid());
        assert_eq!(target.as_ref(), Some(&5));
        assert_eq!(target.into_option(), Some(5));
    }

    #[test]
    fn undefined_yields_default() {
        let target: ValidationTarget<i32> = ValidationTarget::undefined();
        assert!(!target.is_valid());
        assert_eq!(target.or_default(7), 7);
    }

    #[test]
    fn map_skips_undefined() {
        let target: ValidationTarget<i32> = ValidationTarget::undefined();
        assert_eq!(target.map(|v| v * 2), ValidationTarget::Undefined);
        assert_eq!(
            ValidationTarget::valid(3).map(|v| v * 2),
            ValidationTarget::Valid(6)
        );
    }
}
