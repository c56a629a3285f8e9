//! Value objects that make up a project.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Stable identifier of an agent role within one project.
pub type RoleId = u32;

/// A named, reusable block of prompt text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptPartial {
    /// Unique identifier, assigned when the partial is created.
    pub id: String,
    /// Name used to build the include reference.
    pub name: String,
    /// Raw text; may contain variable reference tokens.
    #[serde(default)]
    pub content: String,
}

impl PromptPartial {
    /// Create a partial with a fresh identifier.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            content: content.into(),
        }
    }

    /// The include reference other prompts use to pull this partial in.
    pub fn include_reference(&self) -> String {
        include_reference(&self.name)
    }
}

/// Format the include reference for a partial named `name`.
pub fn include_reference(name: &str) -> String {
    format!("{{% include '{}' %}}", name)
}

/// One kind of agent and the prompts it runs with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRole {
    pub role_id: RoleId,
    pub name: String,
    #[serde(default)]
    pub llm_type: String,
    /// Forwarded verbatim into the compiled configuration.
    #[serde(default)]
    pub llm_params: BTreeMap<String, Value>,
    #[serde(default)]
    pub number_of_agents: u32,
    /// Prompt slot name (`system`, `user`, `system_phase_1`, ...) to raw text.
    #[serde(default)]
    pub prompts: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_phases: Option<Vec<u32>>,
}

impl AgentRole {
    /// Create a role with no prompts and a single agent.
    pub fn new(role_id: RoleId, name: impl Into<String>, llm_type: impl Into<String>) -> Self {
        Self {
            role_id,
            name: name.into(),
            llm_type: llm_type.into(),
            llm_params: BTreeMap::new(),
            number_of_agents: 1,
            prompts: BTreeMap::new(),
            task_phases: None,
        }
    }
}

/// Declaration of one state field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl StateField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Shared state schema, split into the three namespaces prompts can reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StateSchema {
    pub meta_information: Vec<StateField>,
    pub public_information: Vec<StateField>,
    pub private_information: Vec<StateField>,
}

/// Phase progression for the simulation.
///
/// The variant set is closed; each variant pairs with exactly one runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type")]
pub enum ManagerConfig {
    /// Agents act one phase at a time, in turn.
    #[default]
    TurnBasedPhaseManager,
    /// Listed phases run continuously with randomized action delays.
    #[serde(rename_all = "camelCase")]
    HybridPhaseManager {
        #[serde(default)]
        continuous_phases: Vec<u32>,
        #[serde(default)]
        max_action_delay: f64,
        #[serde(default)]
        min_action_delay: f64,
    },
}

impl ManagerConfig {
    /// The manager's type tag as it appears in the compiled configuration.
    pub fn type_name(&self) -> &'static str {
        match self {
            ManagerConfig::TurnBasedPhaseManager => "TurnBasedPhaseManager",
            ManagerConfig::HybridPhaseManager { .. } => "HybridPhaseManager",
        }
    }
}

/// Editor-side logging preferences stored with the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            directory: None,
        }
    }
}

/// Execution target embedded in the compiled runner section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub hostname: String,
    pub port: u16,
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            hostname: "localhost".to_string(),
            port: 8080,
            path: "wss".to_string(),
        }
    }
}
