//! Tests for the project model.

use crate::model::{ManagerConfig, Project, PromptPartial, StateField};
use serde_json::json;
use tempfile::TempDir;

fn sample_yaml() -> &'static str {
    r#"
name: Market Sim
description: Two traders
gameId: 3
promptPartials:
  - id: p-1
    name: rules
    content: "Trade fairly.\n"
agentRoles:
  - roleId: 1
    name: Buyer
    llmType: gpt-4o
    llmParams:
      temperature: 0.7
    numberOfAgents: 2
    prompts:
      system: "You buy {{ public_information.item }}."
state:
  metaInformation:
    - name: game_id
      type: int
      default: 0
  publicInformation:
    - name: item
      type: str
manager:
  type: HybridPhaseManager
  continuousPhases: [1, 3]
  maxActionDelay: 5
  minActionDelay: 1
some_future_key: ignored
"#
}

#[test]
fn test_parse_project_yaml() {
    let project = Project::from_yaml(sample_yaml()).unwrap();

    assert_eq!(project.name, "Market Sim");
    assert_eq!(project.description.as_deref(), Some("Two traders"));
    assert_eq!(project.game_id, Some(3));
    assert_eq!(project.prompt_partials.len(), 1);
    assert_eq!(project.agent_roles[0].number_of_agents, 2);
    assert_eq!(project.agent_roles[0].llm_params["temperature"], json!(0.7));
    assert_eq!(project.state.meta_information[0].default, Some(json!(0)));
    assert!(project.state.private_information.is_empty());
    assert_eq!(
        project.manager,
        ManagerConfig::HybridPhaseManager {
            continuous_phases: vec![1, 3],
            max_action_delay: 5.0,
            min_action_delay: 1.0,
        }
    );
    assert_eq!(project.logging.level, "INFO");
}

#[test]
fn test_parse_minimal_project_defaults() {
    let project = Project::from_yaml("name: Bare\n").unwrap();

    assert!(project.id.is_empty());
    assert!(project.created_at.is_none());
    assert!(project.description.is_none());
    assert!(project.game_id.is_none());
    assert!(project.agent_roles.is_empty());
    assert_eq!(project.manager, ManagerConfig::TurnBasedPhaseManager);
}

#[test]
fn test_parse_project_json() {
    let json = r#"{
        "name": "From JSON",
        "agentRoles": [{"roleId": 7, "name": "Seller", "numberOfAgents": 0}],
        "manager": {"type": "TurnBasedPhaseManager"}
    }"#;
    let project = Project::from_json(json).unwrap();

    assert_eq!(project.agent_roles[0].role_id, 7);
    assert_eq!(project.agent_roles[0].number_of_agents, 0);
}

#[test]
fn test_yaml_round_trip_preserves_project() {
    let project = Project::from_yaml(sample_yaml()).unwrap();
    let reparsed = Project::from_yaml(&project.to_yaml().unwrap()).unwrap();

    assert_eq!(project, reparsed);
}

#[test]
fn test_load_and_save() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("project.yaml");

    let project = Project::from_yaml(sample_yaml()).unwrap();
    project.save(&path).unwrap();

    let loaded = Project::load(&path).unwrap();
    assert_eq!(loaded, project);
}

#[test]
fn test_load_json_by_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("export.JSON");
    std::fs::write(&path, r#"{"name": "Imported"}"#).unwrap();

    let project = Project::load(&path).unwrap();
    assert_eq!(project.name, "Imported");
}

#[test]
fn test_load_missing_file_is_user_error() {
    let err = Project::load("/nonexistent/project.yaml").unwrap_err();
    assert!(err.to_string().contains("failed to read project file"));
}

#[test]
fn test_validate_rejects_blank_name() {
    let err = Project::from_yaml("name: '   '\n").unwrap_err();
    assert!(err.to_string().contains("project name must not be empty"));
}

#[test]
fn test_validate_rejects_duplicate_partial_names() {
    let mut project = Project::new("Dupes");
    project.prompt_partials.push(PromptPartial::new("rules", "a"));
    project.prompt_partials.push(PromptPartial::new("rules", "b"));

    let err = project.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate prompt partial name 'rules'"));
}

#[test]
fn test_validate_rejects_duplicate_role_ids() {
    let mut project = Project::new("Dupes");
    project.add_role("A", "gpt-4o");
    let mut clone = project.agent_roles[0].clone();
    clone.name = "B".to_string();
    project.agent_roles.push(clone);

    let err = project.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate role id 1"));
}

#[test]
fn test_validate_field_names_unique_per_namespace_only() {
    let mut project = Project::new("Fields");
    project.state.public_information.push(StateField::new("price", "float"));
    project.state.private_information.push(StateField::new("price", "float"));
    assert!(project.validate().is_ok());

    project.state.private_information.push(StateField::new("price", "int"));
    let err = project.validate().unwrap_err();
    assert!(
        err.to_string()
            .contains("duplicate field 'price' in private_information")
    );
}

#[test]
fn test_validate_accepts_inverted_delay_bounds() {
    let mut project = Project::new("Lenient");
    project.manager = ManagerConfig::HybridPhaseManager {
        continuous_phases: vec![],
        max_action_delay: 1.0,
        min_action_delay: 9.0,
    };

    assert!(project.validate().is_ok());
}

#[test]
fn test_validate_rejects_negative_delay() {
    let mut project = Project::new("Negative");
    project.manager = ManagerConfig::HybridPhaseManager {
        continuous_phases: vec![],
        max_action_delay: -1.0,
        min_action_delay: 0.0,
    };

    let err = project.validate().unwrap_err();
    assert!(err.to_string().contains("maxActionDelay"));
}

#[test]
fn test_materialize_assigns_fresh_identity() {
    let mut imported = Project::new("Imported");
    imported.id = "old-id".to_string();

    let first = imported.clone().materialize();
    let second = imported.materialize();

    assert_ne!(first.id, "old-id");
    assert_ne!(first.id, second.id);
    assert!(first.created_at.is_some());

    let summary = first.summary();
    assert_eq!(summary.id, first.id);
    assert_eq!(summary.name, "Imported");
    assert_eq!(summary.created_at, first.created_at);
}

#[test]
fn test_role_ids_continue_after_highest() {
    let mut project = Project::new("Roles");
    assert_eq!(project.add_role("A", "gpt-4o"), 1);
    assert_eq!(project.add_role("B", "gpt-4o"), 2);

    project.agent_roles.remove(0);
    assert_eq!(project.add_role("C", "gpt-4o"), 3);
    assert_eq!(project.role(3).map(|r| r.name.as_str()), Some("C"));
}

#[test]
fn test_partial_include_reference() {
    let partial = PromptPartial::new("rules", "Trade fairly.");
    assert_eq!(partial.include_reference(), "{% include 'rules' %}");
    assert!(!partial.id.is_empty());
}
