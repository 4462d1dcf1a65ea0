//! vouch - Fluent precondition checks with readable failure messages
//!
//! vouch validates method arguments and internal state through a fluent
//! chain of checks. A failed check reports the value's name, the offending
//! value, any contextual information the caller attached, and (for equality
//! failures) a diff between the actual and expected values.
//!
//! # Quick Start
//!
//! Add vouch to your `Cargo.toml`, then validate preconditions at the top
//! of a function:
//!
//! ```
//! use vouch::prelude::*;
//!
//! fn set_speed(speed: i32) {
//!     require_that(speed, "speed").is_positive().is_less_than(&300);
//! }
//!
//! set_speed(55);
//! ```
//!
//! A failed `require_that` panics with a message such as:
//!
//! ```text
//! "speed" must be positive.
//! speed: -5
//! ```
//!
//! # Failure modes
//!
//! Three entry points cover the common reporting strategies:
//!
//! - [`require_that`] panics on the first failed check.
//! - [`assert_that`] panics like `require_that` in builds with debug
//!   assertions and compiles to a no-op in release builds.
//! - [`check_if`] records failures for later inspection:
//!
//! ```
//! use vouch::prelude::*;
//!
//! let failures = check_if(-5, "speed")
//!     .is_positive()
//!     .is_multiple_of(10)
//!     .else_get_failures();
//! assert_eq!(failures.len(), 2);
//! ```
//!
//! # Configuration
//!
//! The free functions share one process-wide [`Validators`] factory. Create
//! your own factory to scope configuration changes, or reconfigure the
//! shared one:
//!
//! ```
//! use vouch::{Validators, EqualityMethod};
//! use vouch::checks::ObjectCheck;
//!
//! let validators = Validators::new();
//! {
//!     let mut updater = validators.update_configuration();
//!     updater.set_equality_method(EqualityMethod::Comparable);
//! }
//! let _ = validators.require_that(1.0, "ratio").is_equal_to(&1.0);
//! ```

use std::sync::LazyLock;

pub use vouch_config::{ConfigUpdater, Configuration};
pub use vouch_core::{
    EqualityMethod, ErrorKind, ErrorTransformer, FailureSummary, MutableStringMappers,
    StringMappers, ValidationError, ValidationFailure, ValidationFailures,
};
pub use vouch_validators::checks;
pub use vouch_validators::{Validator, Validators};

/// Everything needed to call the free functions and chain checks.
pub mod prelude {
    pub use crate::checks::{
        BoolCheck, CollectionCheck, ComparableCheck, FloatCheck, IntegerCheck, MapCheck,
        ObjectCheck, OptionCheck, StringCheck,
    };
    pub use crate::{assert_that, check_if, require_that};
}

static DEFAULT_VALIDATORS: LazyLock<Validators> = LazyLock::new(Validators::new);

/// The process-wide factory backing [`require_that`], [`assert_that`], and
/// [`check_if`]. Configuration and context changes made through it affect
/// every caller of the free functions.
pub fn validators() -> &'static Validators {
    &DEFAULT_VALIDATORS
}

/// Validates a precondition, panicking on the first failed check.
///
/// ```should_panic
/// use vouch::prelude::*;
///
/// let _ = require_that(-5, "speed").is_positive();
/// ```
///
/// # Panics
///
/// If `name` is empty or contains whitespace, or when a check fails.
pub fn require_that<T>(value: T, name: impl Into<String>) -> Validator<T> {
    validators().require_that(value, name)
}

/// Validates an internal invariant. Checks run only in builds with debug
/// assertions; in release builds every check is skipped.
///
/// # Panics
///
/// If `name` is empty or contains whitespace, or (with debug assertions)
/// when a check fails.
pub fn assert_that<T>(value: T, name: impl Into<String>) -> Validator<T> {
    validators().assert_that(value, name)
}

/// Validates a value, recording failures instead of panicking.
///
/// ```
/// use vouch::prelude::*;
///
/// let result = check_if(5, "count").is_positive().into_result();
/// assert_eq!(result.unwrap(), 5);
/// ```
///
/// # Panics
///
/// If `name` is empty or contains whitespace.
pub fn check_if<T>(value: T, name: impl Into<String>) -> Validator<T> {
    validators().check_if(value, name)
}
