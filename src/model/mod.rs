//! Domain model for simulation projects.
//!
//! A [`Project`] bundles agent roles, reusable prompt partials, the shared
//! state schema, and the phase manager. It carries no export behavior of
//! its own; see [`crate::compile`] for that.

mod operations;
mod project;
mod types;

#[cfg(test)]
mod tests;

pub use project::{Project, ProjectSummary};
pub use types::{
    AgentRole, LoggingSettings, ManagerConfig, PromptPartial, RoleId, ServerConfig, StateField,
    StateSchema, include_reference,
};
