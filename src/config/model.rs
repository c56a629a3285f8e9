//! Config struct definition and default implementation.

use super::types::*;
use crate::model::ServerConfig;
use serde::{Deserialize, Serialize};

/// Configuration for simcfg.
///
/// This struct represents the contents of `simcfg.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Execution target written into every compiled runner section.
    pub server: ServerConfig,

    /// Where and how exports are saved.
    pub export: ExportConfig,
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Download directory, and the default picker location (default: ".").
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Save strategy preference.
    pub save_mode: SaveMode,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            save_mode: SaveMode::default(),
        }
    }
}
