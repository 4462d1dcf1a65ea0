//! Validator construction and the type-specific check surfaces.
//!
//! [`Validators`] is the factory: it owns the configuration presets for the
//! three failure modes and stamps out [`Validator`] instances. The checks
//! themselves live in [`checks`] as capability traits, one per family of
//! value types.

pub mod checks;
mod factory;
mod messages;
mod validator;

pub use factory::Validators;
pub use validator::Validator;
