//! Project loading, saving, and validation.

use super::project::Project;
use super::types::{ManagerConfig, StateField};
use crate::error::{Result, SimError};
use crate::fs::atomic_write_file;
use std::collections::HashSet;
use std::path::Path;

impl Project {
    /// Load a project file, choosing the parser from the extension.
    ///
    /// `.json` files are parsed as JSON; everything else as YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SimError::UserError(format!(
                "failed to read project file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse and validate a project from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let project: Project = serde_yaml::from_str(yaml)
            .map_err(|e| SimError::UserError(format!("failed to parse project YAML: {}", e)))?;

        project.validate()?;
        Ok(project)
    }

    /// Parse and validate a project from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let project: Project = serde_json::from_str(json)
            .map_err(|e| SimError::UserError(format!("failed to parse project JSON: {}", e)))?;

        project.validate()?;
        Ok(project)
    }

    /// Serialize the project to its YAML file form.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SimError::UserError(format!("failed to serialize project to YAML: {}", e))
        })
    }

    /// Atomically write the project file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        atomic_write_file(path, &self.to_yaml()?)
    }

    /// Check the structural invariants of a project.
    ///
    /// Validation rules:
    /// - the name is non-empty after trimming
    /// - partial ids and partial names are unique
    /// - role ids are unique
    /// - field names are unique within each state namespace
    /// - hybrid manager delays are finite and non-negative
    ///
    /// Whether `minActionDelay <= maxActionDelay`, and whether prompt tokens
    /// refer to declared fields, is deliberately not checked.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SimError::ValidationError(
                "project name must not be empty".to_string(),
            ));
        }

        let mut partial_ids = HashSet::new();
        let mut partial_names = HashSet::new();
        for partial in &self.prompt_partials {
            if !partial_ids.insert(partial.id.as_str()) {
                return Err(SimError::ValidationError(format!(
                    "duplicate prompt partial id '{}'",
                    partial.id
                )));
            }
            if !partial_names.insert(partial.name.as_str()) {
                return Err(SimError::ValidationError(format!(
                    "duplicate prompt partial name '{}'",
                    partial.name
                )));
            }
        }

        let mut role_ids = HashSet::new();
        for role in &self.agent_roles {
            if !role_ids.insert(role.role_id) {
                return Err(SimError::ValidationError(format!(
                    "duplicate role id {} (role '{}')",
                    role.role_id, role.name
                )));
            }
        }

        validate_namespace("meta_information", &self.state.meta_information)?;
        validate_namespace("public_information", &self.state.public_information)?;
        validate_namespace("private_information", &self.state.private_information)?;

        if let ManagerConfig::HybridPhaseManager {
            max_action_delay,
            min_action_delay,
            ..
        } = &self.manager
        {
            for (key, value) in [
                ("maxActionDelay", *max_action_delay),
                ("minActionDelay", *min_action_delay),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(SimError::ValidationError(format!(
                        "{} must be a non-negative number (found {})",
                        key, value
                    )));
                }
            }
        }

        Ok(())
    }
}

fn validate_namespace(namespace: &str, fields: &[StateField]) -> Result<()> {
    let mut names = HashSet::new();
    for field in fields {
        if field.name.is_empty() {
            return Err(SimError::ValidationError(format!(
                "{} contains a field with an empty name",
                namespace
            )));
        }
        if !names.insert(field.name.as_str()) {
            return Err(SimError::ValidationError(format!(
                "duplicate field '{}' in {}",
                field.name, namespace
            )));
        }
    }
    Ok(())
}
