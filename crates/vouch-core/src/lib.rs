//! Core types shared by every vouch validator
//!
//! This crate holds the pieces that do not depend on any particular value
//! type: the error hierarchy, failure records, the valid/undefined value
//! wrapper, the string-mapper registry used to render values in failure
//! messages, and the equality-method selector.

pub mod equality;
pub mod error;
pub mod failure;
pub mod mappers;
pub mod target;

pub use equality::EqualityMethod;
pub use error::{ErrorKind, ErrorTransformer, ValidationError};
pub use failure::{FailureSummary, ValidationFailure, ValidationFailures};
pub use mappers::{MutableStringMappers, StringMappers};
pub use target::ValidationTarget;
