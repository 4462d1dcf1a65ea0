//! The error hierarchy surfaced by validators.
//!
//! A failed check produces a [`ValidationError`] whose variant mirrors the
//! class of contract that was broken: a missing value, an invalid argument,
//! an invalid validator state, or a failed assertion. When several failures
//! were accumulated in check mode, they are folded into
//! [`ValidationError::MultipleFailures`].

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

/// Selects the [`ValidationError`] variant that a failed check produces.
///
/// Message-layer code requests a kind rather than building the error
/// directly, so the configuration's error transformer sees every error
/// before it is recorded or thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// A required value was absent.
    MissingValue,
    /// A value broke one of the checks applied to it.
    InvalidArgument,
    /// The validator itself was in a state that prevented validation,
    /// e.g. extracting a value whose target is undefined.
    InvalidState,
    /// A debug-mode assertion did not hold.
    AssertionFailed,
}

/// Transforms a validation error before it is recorded or thrown.
///
/// The `assert_that` preset uses this to convert failures into
/// [`ValidationError::AssertionFailed`]; callers may install their own
/// transformer through the configuration updater.
pub type ErrorTransformer = Arc<dyn Fn(ValidationError) -> ValidationError + Send + Sync>;

type Cause = Box<dyn Error + Send + Sync + 'static>;

/// Error produced by a failed validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required value was absent.
    #[error("{message}")]
    MissingValue {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// A value broke one of the checks applied to it.
    #[error("{message}")]
    InvalidArgument {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// The validator was in a state that prevented validation.
    #[error("{message}")]
    InvalidState {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// A debug-mode assertion did not hold.
    #[error("assertion failed: {message}")]
    AssertionFailed {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// Several checks failed while accumulating in check mode.
    #[error("{}", format_multiple(errors))]
    MultipleFailures { errors: Vec<ValidationError> },
}

impl ValidationError {
    /// Builds an error of the requested kind.
    pub fn new(kind: ErrorKind, message: String, source: Option<Cause>) -> Self {
        match kind {
            ErrorKind::MissingValue => Self::MissingValue { message, source },
            ErrorKind::InvalidArgument => Self::InvalidArgument { message, source },
            ErrorKind::InvalidState => Self::InvalidState { message, source },
            ErrorKind::AssertionFailed => Self::AssertionFailed { message, source },
        }
    }

    /// Folds a list of errors into a single error.
    ///
    /// Returns `None` for an empty list and the sole error unchanged for a
    /// single-element list.
    pub fn combine(mut errors: Vec<ValidationError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => Some(errors.remove(0)),
            _ => Some(Self::MultipleFailures { errors }),
        }
    }

    /// The kind of this error. Aggregates report `InvalidArgument`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingValue { .. } => ErrorKind::MissingValue,
            Self::InvalidArgument { .. } | Self::MultipleFailures { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::InvalidState { .. } => ErrorKind::InvalidState,
            Self::AssertionFailed { .. } => ErrorKind::AssertionFailed,
        }
    }

    /// The message of this error, without the kind prefix or nested failures.
    pub fn message(&self) -> &str {
        match self {
            Self::MissingValue { message, .. }
            | Self::InvalidArgument { message, .. }
            | Self::InvalidState { message, .. }
            | Self::AssertionFailed { message, .. } => message,
            Self::MultipleFailures { .. } => "multiple validation failures",
        }
    }
}

fn format_multiple(errors: &[ValidationError]) -> String {
    use fmt::Write as _;

    let mut out = format!("{} validation failures:", errors.len());
    for error in errors {
        // Indent continuation lines so failures stay visually grouped.
        let mut lines = error.to_string();
        if lines.contains('\n') {
            lines = lines.replace('\n', "\n  ");
        }
        let _ = write!(out, "\n- {lines}");
    }
    out
}
