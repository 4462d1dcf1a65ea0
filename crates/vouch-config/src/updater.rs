use std::fmt;

use vouch_core::{EqualityMethod, ErrorTransformer, MutableStringMappers};

use crate::Configuration;

/// Scoped, builder-like view over a [`Configuration`].
///
/// Setters accumulate changes locally; the rebuilt configuration is handed
/// to the commit callback when the updater is dropped (or on an explicit
/// [`commit`](Self::commit)). Nothing is committed when no setter changed a
/// value, so an updater that was only read from is free.
///
/// ```
/// use vouch_config::{ConfigUpdater, Configuration};
/// use vouch_core::EqualityMethod;
///
/// let mut committed = None;
/// {
///     let mut updater = ConfigUpdater::new(Configuration::default(), |c| committed = Some(c));
///     updater.set_equality_method(EqualityMethod::Comparable);
/// }
/// assert_eq!(
///     committed.unwrap().equality_method(),
///     EqualityMethod::Comparable
/// );
/// ```
pub struct ConfigUpdater<'a> {
    commit: Option<Box<dyn FnOnce(Configuration) + 'a>>,
    clean_stack_trace: bool,
    allow_diff: bool,
    equality_method: EqualityMethod,
    string_mappers: MutableStringMappers,
    record_backtrace: bool,
    throw_on_failure: bool,
    error_transformer: ErrorTransformer,
    changed: bool,
}

impl<'a> ConfigUpdater<'a> {
    /// Creates an updater over `base`, committing through `commit`.
    pub fn new(base: Configuration, commit: impl FnOnce(Configuration) + 'a) -> Self {
        Self {
            commit: Some(Box::new(commit)),
            clean_stack_trace: base.clean_stack_trace(),
            allow_diff: base.allow_diff(),
            equality_method: base.equality_method(),
            string_mappers: MutableStringMappers::from_immutable(base.string_mappers()),
            record_backtrace: base.record_backtrace(),
            throw_on_failure: base.throw_on_failure(),
            error_transformer: base.error_transformer().clone(),
            changed: false,
        }
    }

    /// The pending clean-stack-trace setting.
    pub fn clean_stack_trace(&self) -> bool {
        self.clean_stack_trace
    }

    /// Specifies whether this library's frames are filtered out of recorded
    /// backtraces.
    pub fn set_clean_stack_trace(&mut self, clean_stack_trace: bool) -> &mut Self {
        if clean_stack_trace != self.clean_stack_trace {
            self.clean_stack_trace = clean_stack_trace;
            self.changed = true;
        }
        self
    }

    /// The pending allow-diff setting.
    pub fn allow_diff(&self) -> bool {
        self.allow_diff
    }

    /// Specifies whether failure messages may include a diff comparing the
    /// actual and expected values.
    pub fn set_allow_diff(&mut self, allow_diff: bool) -> &mut Self {
        if allow_diff != self.allow_diff {
            self.allow_diff = allow_diff;
            self.changed = true;
        }
        self
    }

    /// The pending equality method.
    pub fn equality_method(&self) -> EqualityMethod {
        self.equality_method
    }

    /// Sets the equality method that determines whether two values are
    /// equivalent.
    pub fn set_equality_method(&mut self, equality_method: EqualityMethod) -> &mut Self {
        if equality_method != self.equality_method {
            self.equality_method = equality_method;
            self.changed = true;
        }
        self
    }

    /// Mutable access to the string-mapper registry. Taking this marks the
    /// configuration as changed.
    pub fn string_mappers(&mut self) -> &mut MutableStringMappers {
        self.changed = true;
        &mut self.string_mappers
    }

    /// The pending record-backtrace setting.
    pub fn record_backtrace(&self) -> bool {
        self.record_backtrace
    }

    /// Specifies whether failures capture a backtrace.
    pub fn set_record_backtrace(&mut self, record_backtrace: bool) -> &mut Self {
        if record_backtrace != self.record_backtrace {
            self.record_backtrace = record_backtrace;
            self.changed = true;
        }
        self
    }

    /// Installs a function that transforms every validation error before it
    /// is recorded or thrown.
    pub fn set_error_transformer(&mut self, error_transformer: ErrorTransformer) -> &mut Self {
        self.error_transformer = error_transformer;
        self.changed = true;
        self
    }

    /// Commits any pending changes now instead of at drop.
    pub fn commit(mut self) {
        self.apply();
    }

    fn apply(&mut self) {
        let Some(commit) = self.commit.take() else {
            return;
        };
        if !self.changed {
            return;
        }
        tracing::debug!(
            equality_method = %self.equality_method,
            throw_on_failure = self.throw_on_failure,
            "committing configuration update"
        );
        commit(Configuration::new(
            self.clean_stack_trace,
            self.allow_diff,
            self.equality_method,
            self.string_mappers.to_immutable(),
            self.record_backtrace,
            self.throw_on_failure,
            self.error_transformer.clone(),
        ));
    }
}

impl Drop for ConfigUpdater<'_> {
    fn drop(&mut self) {
        self.apply();
    }
}

impl fmt::Debug for ConfigUpdater<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigUpdater")
            .field("clean_stack_trace", &self.clean_stack_trace)
            .field("allow_diff", &self.allow_diff)
            .field("equality_method", &self.equality_method)
            .field("record_backtrace", &self.record_backtrace)
            .field("changed", &self.changed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_updater_commits_nothing() {
        let mut committed = false;
        {
            let updater = ConfigUpdater::new(Configuration::default(), |_| committed = true);
            assert!(updater.clean_stack_trace());
        }
        assert!(!committed);
    }

    #[test]
    fn setting_back_to_same_value_is_not_a_change() {
        let mut committed = false;
        {
            let mut updater = ConfigUpdater::new(Configuration::default(), |_| committed = true);
            updater.set_allow_diff(true); // already true
        }
        assert!(!committed);
    }

    #[test]
    fn drop_commits_pending_changes() {
        let mut committed = None;
        {
            let mut updater = ConfigUpdater::new(Configuration::default(), |c| committed = Some(c));
            updater.set_allow_diff(false).set_record_backtrace(false);
        }
        let configuration = committed.expect("drop should commit");
        assert!(!configuration.allow_diff());
        assert!(!configuration.record_backtrace());
    }

    #[test]
    fn explicit_commit_applies_once() {
        let mut commits = 0;
        let mut updater = ConfigUpdater::new(Configuration::default(), |_| commits += 1);
        updater.set_allow_diff(false);
        updater.commit();
        assert_eq!(commits, 1);
    }

    #[test]
    fn string_mapper_changes_commit() {
        let mut committed = None;
        {
            let mut updater = ConfigUpdater::new(Configuration::default(), |c| committed = Some(c));
            updater.string_mappers().put::<i32>(|_| "n".to_string());
        }
        let configuration = committed.expect("mapper change should commit");
        assert_eq!(configuration.string_mappers().map(&1), "n");
    }
}
