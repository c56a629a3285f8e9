//! The project aggregate and its dashboard summary.

use super::types::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A complete simulation configuration as authored in the editor.
///
/// Project files use camelCase keys. Unknown keys are ignored so files
/// written by newer editors still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Identifier assigned when the project is materialized (empty for drafts).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Creation timestamp, assigned together with `id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<i64>,

    #[serde(default)]
    pub prompt_partials: Vec<PromptPartial>,

    #[serde(default)]
    pub agent_roles: Vec<AgentRole>,

    #[serde(default)]
    pub state: StateSchema,

    #[serde(default)]
    pub manager: ManagerConfig,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// The slice of a project the dashboard lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Create an empty draft project with a turn-based manager.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            created_at: None,
            name: name.into(),
            description: None,
            game_id: None,
            prompt_partials: Vec::new(),
            agent_roles: Vec::new(),
            state: StateSchema::default(),
            manager: ManagerConfig::default(),
            logging: LoggingSettings::default(),
        }
    }

    /// Turn a draft or imported project into a brand-new stored project.
    ///
    /// Always assigns a fresh identifier and creation timestamp, replacing
    /// whatever an imported document carried.
    pub fn materialize(mut self) -> Self {
        self.id = uuid::Uuid::new_v4().to_string();
        self.created_at = Some(Utc::now());
        self
    }

    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            created_at: self.created_at,
        }
    }

    /// The id the next new role receives.
    pub fn next_role_id(&self) -> RoleId {
        self.agent_roles
            .iter()
            .map(|r| r.role_id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Append a new role with a freshly assigned id and return that id.
    pub fn add_role(&mut self, name: impl Into<String>, llm_type: impl Into<String>) -> RoleId {
        let role_id = self.next_role_id();
        self.agent_roles.push(AgentRole::new(role_id, name, llm_type));
        role_id
    }

    pub fn role(&self, role_id: RoleId) -> Option<&AgentRole> {
        self.agent_roles.iter().find(|r| r.role_id == role_id)
    }

    pub fn role_mut(&mut self, role_id: RoleId) -> Option<&mut AgentRole> {
        self.agent_roles.iter_mut().find(|r| r.role_id == role_id)
    }

    pub fn partial(&self, name: &str) -> Option<&PromptPartial> {
        self.prompt_partials.iter().find(|p| p.name == name)
    }
}
