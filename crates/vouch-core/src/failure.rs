//! Failure records accumulated by validators in check mode.

use std::backtrace::{Backtrace, BacktraceStatus};

use serde::Serialize;

use crate::error::{ErrorKind, ValidationError};

/// A single recorded validation failure.
///
/// The error it carries has already passed through the configuration's error
/// transformer. A backtrace is captured only when the configuration's
/// `record_backtrace` flag was set at the time of the failure; whether it
/// resolved to frames still depends on `RUST_BACKTRACE`, as with `std`
/// errors.
#[derive(Debug)]
pub struct ValidationFailure {
    error: ValidationError,
    backtrace: Option<Backtrace>,
    clean_backtrace: bool,
}

impl ValidationFailure {
    /// Creates a failure record.
    ///
    /// `clean_backtrace` filters this library's own frames out of the
    /// rendered backtrace, keeping the trace focused on user code.
    pub fn new(error: ValidationError, backtrace: Option<Backtrace>, clean_backtrace: bool) -> Self {
        Self {
            error,
            backtrace,
            clean_backtrace,
        }
    }

    /// The transformed error for this failure.
    pub fn error(&self) -> &ValidationError {
        &self.error
    }

    /// The failure message.
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// The kind of the underlying error.
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    /// Consumes the failure, returning its error.
    pub fn into_error(self) -> ValidationError {
        self.error
    }

    /// The captured backtrace rendered as text, if one was recorded and
    /// resolved to frames.
    pub fn backtrace(&self) -> Option<String> {
        let backtrace = self.backtrace.as_ref()?;
        if backtrace.status() != BacktraceStatus::Captured {
            return None;
        }
        let rendered = backtrace.to_string();
        if self.clean_backtrace {
            Some(strip_library_frames(&rendered))
        } else {
            Some(rendered)
        }
    }

    /// A serializable view of this failure.
    pub fn summary(&self) -> FailureSummary {
        FailureSummary {
            kind: self.kind(),
            message: self.message(),
        }
    }
}

/// Drops frame lines that point into this library, except when doing so
/// would remove every frame.
fn strip_library_frames(rendered: &str) -> String {
    let mut kept = Vec::new();
    let mut skip_location = false;
    for line in rendered.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("at ") {
            if !skip_location {
                kept.push(line);
            }
            continue;
        }
        skip_location = trimmed.contains("vouch_core")
            || trimmed.contains("vouch_validators")
            || trimmed.contains("vouch_message")
            || trimmed.contains("vouch_config")
            || trimmed.contains("vouch::");
        if !skip_location {
            kept.push(line);
        }
    }
    if kept.is_empty() {
        rendered.to_string()
    } else {
        kept.join("\n")
    }
}

/// Serializable summary of a failure, for structured reporting.
#[derive(Debug, Clone, Serialize)]
pub struct FailureSummary {
    /// The class of contract that was broken.
    pub kind: ErrorKind,
    /// The rendered failure message.
    pub message: String,
}

/// The failures accumulated by a validator, returned by the
/// `else_get_failures()` terminal operation.
#[derive(Debug, Default)]
pub struct ValidationFailures {
    failures: Vec<ValidationFailure>,
}

impl ValidationFailures {
    /// Wraps an accumulated failure list.
    pub fn new(failures: Vec<ValidationFailure>) -> Self {
        Self { failures }
    }

    /// `true` if no check failed.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// The number of failed checks.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Iterates over the recorded failures.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationFailure> {
        self.failures.iter()
    }

    /// The rendered message of every failure, in the order the checks ran.
    pub fn messages(&self) -> Vec<String> {
        self.failures.iter().map(ValidationFailure::message).collect()
    }

    /// Serializable summaries of every failure.
    pub fn summaries(&self) -> Vec<FailureSummary> {
        self.failures.iter().map(ValidationFailure::summary).collect()
    }

    /// Folds the failures into a single error: `None` when every check
    /// passed, the sole error for one failure, and
    /// [`ValidationError::MultipleFailures`] otherwise.
    pub fn into_error(self) -> Option<ValidationError> {
        ValidationError::combine(
            self.failures
                .into_iter()
                .map(ValidationFailure::into_error)
                .collect(),
        )
    }
}

impl IntoIterator for ValidationFailures {
    type Item = ValidationFailure;
    type IntoIter = std::vec::IntoIter<ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}
