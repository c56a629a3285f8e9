//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{Result, SimError};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SimError::UserError)` - Read or parse error
    /// * `Err(SimError::ValidationError)` - Invalid values
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SimError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Without one, `simcfg.yaml` in `dir` is
    /// used when present and defaults otherwise.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            debug!(path = %default_path.display(), "loading config");
            Self::load(default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| SimError::UserError(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| SimError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `server.hostname` must be non-empty
    /// - `server.port` must be non-zero
    /// - `export.output_dir` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.server.hostname.trim().is_empty() {
            return Err(SimError::ValidationError(
                "config validation failed: server.hostname must not be empty".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(SimError::ValidationError(
                "config validation failed: server.port must be greater than 0".to_string(),
            ));
        }

        if self.export.output_dir.trim().is_empty() {
            return Err(SimError::ValidationError(
                "config validation failed: export.output_dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Apply command-line overrides to the server section.
    pub fn with_server_overrides(
        mut self,
        hostname: Option<String>,
        port: Option<u16>,
        path: Option<String>,
    ) -> Result<Self> {
        if let Some(hostname) = hostname {
            self.server.hostname = hostname;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(path) = path {
            self.server.path = path;
        }
        self.validate()?;
        Ok(self)
    }
}
