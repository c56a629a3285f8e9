//! Configuration model for simcfg.
//!
//! This module defines the Config struct that represents `simcfg.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::{Config, ExportConfig};
pub use types::{DEFAULT_CONFIG_FILE, SaveMode};
