use vouch_core::ErrorKind;

use crate::messages;
use crate::Validator;

/// Sign and divisibility checks for integer values.
///
/// Implemented for every primitive integer type. On unsigned types
/// `is_negative` always fails and `is_not_negative` always passes.
pub trait IntegerCheck: Sized {
    /// The integer type under validation.
    type Value;

    /// Ensures that the value is zero.
    fn is_zero(self) -> Self;

    /// Ensures that the value is not zero.
    fn is_not_zero(self) -> Self;

    /// Ensures that the value is greater than zero.
    fn is_positive(self) -> Self;

    /// Ensures that the value is not greater than zero.
    fn is_not_positive(self) -> Self;

    /// Ensures that the value is less than zero.
    fn is_negative(self) -> Self;

    /// Ensures that the value is not less than zero.
    fn is_not_negative(self) -> Self;

    /// Ensures that the value is a multiple of `factor`. Zero is a multiple
    /// of everything except zero itself.
    fn is_multiple_of(self, factor: Self::Value) -> Self;

    /// Ensures that the value is not a multiple of `factor`.
    fn is_not_multiple_of(self, factor: Self::Value) -> Self;
}

macro_rules! impl_integer_check {
    (signed $($t:ty),+) => {
        $(impl_integer_check!(@impl $t, |value: &$t| *value < 0);)+
    };
    (unsigned $($t:ty),+) => {
        $(impl_integer_check!(@impl $t, |_value: &$t| false);)+
    };
    (@impl $t:ty, $negative:expr) => {
        impl IntegerCheck for Validator<$t> {
            type Value = $t;

            fn is_zero(self) -> Self {
                self.check_property("must be zero", true, |value: &$t| *value == 0)
            }

            fn is_not_zero(self) -> Self {
                self.check_property("may not be zero", false, |value: &$t| *value != 0)
            }

            fn is_positive(self) -> Self {
                self.check_property("must be positive", true, |value: &$t| *value > 0)
            }

            fn is_not_positive(self) -> Self {
                self.check_property("may not be positive", true, |value: &$t| *value <= 0)
            }

            fn is_negative(self) -> Self {
                self.check_property("must be negative", true, $negative)
            }

            fn is_not_negative(self) -> Self {
                let negative = $negative;
                self.check_property("may not be negative", true, move |value: &$t| {
                    !negative(value)
                })
            }

            fn is_multiple_of(self, factor: $t) -> Self {
                self.check_factor(factor, true)
            }

            fn is_not_multiple_of(self, factor: $t) -> Self {
                self.check_factor(factor, false)
            }
        }

        impl Validator<$t> {
            fn check_factor(mut self, factor: $t, wanted: bool) -> Self {
                // wrapping_rem keeps MIN % -1 from overflowing; MIN is a
                // multiple of -1 and the wrapped remainder is 0.
                let multiple = |value: &$t| {
                    factor != 0 && (*value == 0 || value.wrapping_rem(factor) == 0)
                };
                let passed = self.target().as_ref().is_none_or(|value| multiple(value) == wanted);
                if !passed {
                    let relationship = if wanted {
                        "must be a multiple of"
                    } else {
                        "may not be a multiple of"
                    };
                    let factor_repr = self.map_value(&factor);
                    let builder = messages::compare(
                        self.name(),
                        self.value_repr(),
                        relationship,
                        None,
                        &factor_repr,
                    );
                    self.add_failure(builder, ErrorKind::InvalidArgument);
                }
                self
            }
        }
    };
}

impl_integer_check!(signed i8, i16, i32, i64, i128, isize);
impl_integer_check!(unsigned u8, u16, u32, u64, u128, usize);

/// Checks for floating-point values.
pub trait FloatCheck: Sized {
    /// The floating-point type under validation.
    type Value;

    /// Ensures that the value is `NaN`.
    fn is_nan(self) -> Self;

    /// Ensures that the value is not `NaN`.
    fn is_not_nan(self) -> Self;

    /// Ensures that the value is neither infinite nor `NaN`.
    fn is_finite(self) -> Self;

    /// Ensures that the value is positive or negative infinity.
    fn is_infinite(self) -> Self;

    /// Ensures that the value is finite with no fractional part.
    fn is_whole_number(self) -> Self;

    /// Ensures that the value is zero.
    fn is_zero(self) -> Self;

    /// Ensures that the value is greater than zero.
    fn is_positive(self) -> Self;

    /// Ensures that the value is less than zero.
    fn is_negative(self) -> Self;

    /// Ensures that the value is a multiple of `factor`.
    fn is_multiple_of(self, factor: Self::Value) -> Self;
}

macro_rules! impl_float_check {
    ($($t:ty),+) => {
        $(
            impl FloatCheck for Validator<$t> {
                type Value = $t;

                fn is_nan(self) -> Self {
                    self.check_property("must be NaN", true, |value: &$t| value.is_nan())
                }

                fn is_not_nan(self) -> Self {
                    self.check_property("may not be NaN", false, |value: &$t| !value.is_nan())
                }

                fn is_finite(self) -> Self {
                    self.check_property("must be finite", true, |value: &$t| value.is_finite())
                }

                fn is_infinite(self) -> Self {
                    self.check_property("must be infinite", true, |value: &$t| {
                        value.is_infinite()
                    })
                }

                fn is_whole_number(self) -> Self {
                    self.check_property("must be a whole number", true, |value: &$t| {
                        value.is_finite() && value.fract() == 0.0
                    })
                }

                fn is_zero(self) -> Self {
                    self.check_property("must be zero", true, |value: &$t| *value == 0.0)
                }

                fn is_positive(self) -> Self {
                    self.check_property("must be positive", true, |value: &$t| *value > 0.0)
                }

                fn is_negative(self) -> Self {
                    self.check_property("must be negative", true, |value: &$t| *value < 0.0)
                }

                fn is_multiple_of(mut self, factor: $t) -> Self {
                    let passed = self
                        .target()
                        .as_ref()
                        .is_none_or(|value| (*value % factor) == 0.0);
                    if !passed {
                        let factor_repr = self.map_value(&factor);
                        let builder = messages::compare(
                            self.name(),
                            self.value_repr(),
                            "must be a multiple of",
                            None,
                            &factor_repr,
                        );
                        self.add_failure(builder, ErrorKind::InvalidArgument);
                    }
                    self
                }
            }
        )+
    };
}

impl_float_check!(f32, f64);
