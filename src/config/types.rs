//! Configuration types and defaults for simcfg.

use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "simcfg.yaml";

/// How exported configurations are saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SaveMode {
    /// Use a picker when one is available, otherwise download (default).
    #[default]
    Auto,
    /// Always ask for a location.
    Picker,
    /// Always download into the output directory.
    Download,
}

impl SaveMode {
    /// Parse a save mode from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(Self::Auto),
            "picker" => Some(Self::Picker),
            "download" => Some(Self::Download),
            _ => None,
        }
    }
}

// Default value functions for serde
pub(crate) fn default_output_dir() -> String {
    ".".to_string()
}
