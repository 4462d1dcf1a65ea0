//! Validator behavior configuration
//!
//! A [`Configuration`] is an immutable record of the switches that control
//! how validators report failures: whether a failure panics immediately or
//! is recorded, how equality is computed, how values are rendered in
//! messages, and how the eventual error is transformed. Changes go through a
//! [`ConfigUpdater`], a builder-like view that commits atomically when
//! dropped.

mod configuration;
mod updater;

pub use configuration::Configuration;
pub use updater::ConfigUpdater;
