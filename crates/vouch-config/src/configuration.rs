use std::fmt;
use std::sync::Arc;

use vouch_core::{EqualityMethod, ErrorTransformer, StringMappers, ValidationError};

/// Determines the behavior of a validator.
///
/// Configurations are immutable; cloning is cheap because the string-mapper
/// registry and error transformer are shared behind `Arc`s. All switches
/// default to on, matching the strictest reporting.
#[derive(Clone)]
pub struct Configuration {
    clean_stack_trace: bool,
    allow_diff: bool,
    equality_method: EqualityMethod,
    string_mappers: StringMappers,
    record_backtrace: bool,
    throw_on_failure: bool,
    error_transformer: ErrorTransformer,
}

impl Configuration {
    /// Creates a configuration from explicit parts. Most callers start from
    /// [`Configuration::default`] and adjust through a `ConfigUpdater`.
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn new(
        clean_stack_trace: bool,
        allow_diff: bool,
        equality_method: EqualityMethod,
        string_mappers: StringMappers,
        record_backtrace: bool,
        throw_on_failure: bool,
        error_transformer: ErrorTransformer,
    ) -> Self {
        Self {
            clean_stack_trace,
            allow_diff,
            equality_method,
            string_mappers,
            record_backtrace,
            throw_on_failure,
            error_transformer,
        }
    }

    /// `true` if this library's frames are filtered out of recorded
    /// backtraces, except when that would remove every frame.
    pub fn clean_stack_trace(&self) -> bool {
        self.clean_stack_trace
    }

    /// `true` if failure messages may include a diff comparing the actual
    /// and expected values.
    pub fn allow_diff(&self) -> bool {
        self.allow_diff
    }

    /// The equality method that determines whether two values are
    /// equivalent.
    pub fn equality_method(&self) -> EqualityMethod {
        self.equality_method
    }

    /// The registry used to render contextual values in failure messages.
    pub fn string_mappers(&self) -> &StringMappers {
        &self.string_mappers
    }

    /// `true` if failures capture a backtrace. Callers that only inspect
    /// failure messages can turn this off for a performance gain.
    pub fn record_backtrace(&self) -> bool {
        self.record_backtrace
    }

    /// `true` if a failed check panics immediately instead of recording the
    /// failure.
    pub fn throw_on_failure(&self) -> bool {
        self.throw_on_failure
    }

    /// The function applied to every validation error before it is recorded
    /// or thrown.
    pub fn error_transformer(&self) -> &ErrorTransformer {
        &self.error_transformer
    }

    /// Returns a copy with `throw_on_failure` replaced. Used by validator
    /// factories to derive the check-mode preset.
    pub fn with_throw_on_failure(&self, throw_on_failure: bool) -> Self {
        let mut copy = self.clone();
        copy.throw_on_failure = throw_on_failure;
        copy
    }

    /// Returns a copy with the error transformer replaced. Used by validator
    /// factories to derive the assertion preset.
    pub fn with_error_transformer(&self, error_transformer: ErrorTransformer) -> Self {
        let mut copy = self.clone();
        copy.error_transformer = error_transformer;
        copy
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            clean_stack_trace: true,
            allow_diff: true,
            equality_method: EqualityMethod::default(),
            string_mappers: StringMappers::default(),
            record_backtrace: true,
            throw_on_failure: true,
            error_transformer: identity_transformer(),
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("clean_stack_trace", &self.clean_stack_trace)
            .field("allow_diff", &self.allow_diff)
            .field("equality_method", &self.equality_method)
            .field("string_mappers", &self.string_mappers)
            .field("record_backtrace", &self.record_backtrace)
            .field("throw_on_failure", &self.throw_on_failure)
            .finish_non_exhaustive()
    }
}

/// The default transformer: errors pass through unchanged.
pub(crate) fn identity_transformer() -> ErrorTransformer {
    Arc::new(|error: ValidationError| error)
}
