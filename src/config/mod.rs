//! Configuration for the bdm client.
//!
//! This module defines the Config struct that represents `bdm.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, an environment override for the service
//! URL, and validation of config values.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use model::Config;
pub use types::{API_BASE_URL_ENV, DEFAULT_CONFIG_FILE};
