use std::fmt::{self, Debug};
use std::sync::{Arc, PoisonError, RwLock};

use vouch_config::{ConfigUpdater, Configuration};
use vouch_core::{ErrorKind, ErrorTransformer, ValidationError, ValidationTarget};

use crate::validator::validate_name;
use crate::Validator;

/// Creates validators in one of three failure modes.
///
/// `require_that` panics on the first failed check. `assert_that` behaves
/// like `require_that` in builds with debug assertions and does nothing in
/// release builds. `check_if` records failures for later inspection.
///
/// Every validator created by a factory inherits the factory's
/// configuration and context at creation time. Factories are cheap to share
/// across threads; the presets sit behind `RwLock`s so configuration
/// updates do not disturb validators already handed out.
pub struct Validators {
    require_config: RwLock<Configuration>,
    assert_config: RwLock<Configuration>,
    check_config: RwLock<Configuration>,
    context: RwLock<Vec<(String, String)>>,
}

impl Validators {
    /// Creates a factory with the default configuration.
    pub fn new() -> Self {
        Self::with_configuration(Configuration::default())
    }

    /// Creates a factory whose three failure-mode presets derive from
    /// `configuration`.
    pub fn with_configuration(configuration: Configuration) -> Self {
        let (require, assert, check) = presets(configuration);
        Self {
            require_config: RwLock::new(require),
            assert_config: RwLock::new(assert),
            check_config: RwLock::new(check),
            context: RwLock::new(Vec::new()),
        }
    }

    /// Validates a precondition, panicking on the first failed check.
    ///
    /// # Panics
    ///
    /// If `name` is empty or contains whitespace, or when a check fails.
    pub fn require_that<T>(&self, value: T, name: impl Into<String>) -> Validator<T> {
        Validator::new(
            read(&self.require_config),
            name,
            ValidationTarget::valid(value),
            self.context(),
        )
    }

    /// Validates an internal invariant. Checks run only in builds with
    /// debug assertions; failures panic with an assertion-failure error. In
    /// release builds the value is left undefined and every check is
    /// skipped.
    ///
    /// # Panics
    ///
    /// If `name` is empty or contains whitespace, or (with debug
    /// assertions) when a check fails.
    pub fn assert_that<T>(&self, value: T, name: impl Into<String>) -> Validator<T> {
        let target = if cfg!(debug_assertions) {
            ValidationTarget::valid(value)
        } else {
            ValidationTarget::undefined()
        };
        Validator::new(read(&self.assert_config), name, target, self.context())
    }

    /// Validates a value, recording failures instead of panicking. Retrieve
    /// them through
    /// [`else_get_failures`](Validator::else_get_failures) or
    /// [`into_result`](Validator::into_result).
    ///
    /// # Panics
    ///
    /// If `name` is empty or contains whitespace.
    pub fn check_if<T>(&self, value: T, name: impl Into<String>) -> Validator<T> {
        Validator::new(
            read(&self.check_config),
            name,
            ValidationTarget::valid(value),
            self.context(),
        )
    }

    /// The configuration that new `require_that` validators inherit.
    pub fn configuration(&self) -> Configuration {
        read(&self.require_config)
    }

    /// Replaces the base configuration, rebuilding all three failure-mode
    /// presets. Validators created earlier keep the configuration they were
    /// born with.
    pub fn set_configuration(&self, configuration: Configuration) {
        tracing::debug!(
            equality_method = %configuration.equality_method(),
            record_backtrace = configuration.record_backtrace(),
            "replacing validator configuration"
        );
        let (require, assert, check) = presets(configuration);
        *write(&self.require_config) = require;
        *write(&self.assert_config) = assert;
        *write(&self.check_config) = check;
    }

    /// Returns an updater over the base configuration. Changes are applied
    /// to the factory when the updater is dropped or committed.
    pub fn update_configuration(&self) -> ConfigUpdater<'_> {
        ConfigUpdater::new(self.configuration(), |configuration| {
            self.set_configuration(configuration);
        })
    }

    /// Adds contextual information inherited by every validator this
    /// factory creates from now on. An existing entry with the same name is
    /// replaced.
    ///
    /// # Panics
    ///
    /// If `name` is empty or contains whitespace.
    pub fn with_context<V: Debug + ?Sized>(&self, value: &V, name: &str) -> &Self {
        validate_name(name);
        let rendered = self.configuration().string_mappers().map(value);
        let mut context = write_context(&self.context);
        if let Some(entry) = context.iter_mut().find(|(n, _)| n == name) {
            entry.1 = rendered;
        } else {
            context.push((name.to_string(), rendered));
        }
        self
    }

    /// Removes the contextual entry named `name`, if any.
    pub fn remove_context(&self, name: &str) -> &Self {
        write_context(&self.context).retain(|(n, _)| n != name);
        self
    }

    /// A snapshot of the factory's contextual information.
    pub fn context(&self) -> Vec<(String, String)> {
        self.context
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for Validators {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validators")
            .field("configuration", &self.configuration())
            .field("context", &self.context())
            .finish()
    }
}

/// Derives the three failure-mode presets from one base configuration.
fn presets(configuration: Configuration) -> (Configuration, Configuration, Configuration) {
    let require = configuration.with_throw_on_failure(true);
    let assert = require.with_error_transformer(assertion_transformer(
        require.error_transformer().clone(),
    ));
    let check = configuration.with_throw_on_failure(false);
    (require, assert, check)
}

/// Chains the caller's transformer with a conversion to an
/// assertion-failure error that keeps the original as its source.
fn assertion_transformer(inner: ErrorTransformer) -> ErrorTransformer {
    Arc::new(move |error: ValidationError| {
        let error = inner(error);
        if error.kind() == ErrorKind::AssertionFailed {
            return error;
        }
        let message = error.message().to_string();
        ValidationError::new(ErrorKind::AssertionFailed, message, Some(Box::new(error)))
    })
}

fn read(lock: &RwLock<Configuration>) -> Configuration {
    lock.read().unwrap_or_else(PoisonError::into_inner).clone()
}

fn write(lock: &RwLock<Configuration>) -> std::sync::RwLockWriteGuard<'_, Configuration> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn write_context(
    lock: &RwLock<Vec<(String, String)>>,
) -> std::sync::RwLockWriteGuard<'_, Vec<(String, String)>> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
