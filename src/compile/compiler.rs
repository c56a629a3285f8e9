//! Section-by-section emission of a project.

use super::agents::expand;
use super::emitter::YamlWriter;
use super::runner::{FieldValue, KeyedFields, resolve};
use crate::model::{AgentRole, Project, PromptPartial, ServerConfig, StateSchema};
use crate::variables::Namespace;
use std::cmp::Ordering;

/// Compile a project into configuration text.
///
/// Sections are emitted in a fixed order: identity, `prompt_partials`,
/// `agent_roles`, `agents`, `state`, `manager`, `runner`. Absent values and
/// empty collections leave their key out instead of writing `null` or `[]`.
pub fn compile(project: &Project, server: &ServerConfig) -> String {
    let mut w = YamlWriter::new();

    w.str_field(0, "name", &project.name);
    if let Some(description) = project.description.as_deref().filter(|d| !d.is_empty()) {
        w.str_field(0, "description", description);
    }
    if let Some(game_id) = project.game_id {
        w.raw_field(0, "game_id", game_id);
    }

    write_partials(&mut w, &project.prompt_partials);
    write_roles(&mut w, &project.agent_roles);
    write_agents(&mut w, &project.agent_roles);
    write_state(&mut w, &project.state);

    let blocks = resolve(&project.manager, project.game_id, server);
    write_block(&mut w, "manager", &blocks.manager);
    write_block(&mut w, "runner", &blocks.runner);

    w.finish()
}

fn write_partials(w: &mut YamlWriter, partials: &[PromptPartial]) {
    if partials.is_empty() {
        return;
    }
    w.section(0, "prompt_partials");
    for partial in partials {
        w.begin_item();
        w.str_field(2, "name", &partial.name);
        w.text_field(2, "content", &partial.content);
    }
}

fn write_roles(w: &mut YamlWriter, roles: &[AgentRole]) {
    if roles.is_empty() {
        return;
    }
    w.section(0, "agent_roles");
    for role in roles {
        w.begin_item();
        w.raw_field(2, "role_id", role.role_id);
        w.str_field(2, "name", &role.name);
        w.str_field(2, "llm_type", &role.llm_type);

        if role.llm_params.values().any(|v| !v.is_null()) {
            w.section(2, "llm_params");
            for (key, value) in &role.llm_params {
                w.value_field(3, key, value);
            }
        }

        w.raw_field(2, "number_of_agents", role.number_of_agents);

        if !role.prompts.is_empty() {
            w.section(2, "prompts");
            let mut slots: Vec<(&String, &String)> = role.prompts.iter().collect();
            slots.sort_by(|a, b| compare_slots(a.0, b.0));
            for (slot, text) in slots {
                w.text_field(3, slot, text);
            }
        }

        if let Some(phases) = role.task_phases.as_ref().filter(|p| !p.is_empty()) {
            w.inline_list(2, "task_phases", phases);
        }
    }
}

fn write_agents(w: &mut YamlWriter, roles: &[AgentRole]) {
    let pool = expand(roles);
    if pool.is_empty() {
        return;
    }
    w.section(0, "agents");
    for agent in pool {
        w.begin_item();
        w.raw_field(2, "id", agent.id);
    }
}

fn write_state(w: &mut YamlWriter, state: &StateSchema) {
    if Namespace::ALL.iter().all(|ns| ns.fields(state).is_empty()) {
        return;
    }
    w.section(0, "state");
    for namespace in Namespace::ALL {
        let fields = namespace.fields(state);
        if fields.is_empty() {
            continue;
        }
        w.section(1, namespace.section_key());
        for field in fields {
            w.begin_item();
            w.str_field(3, "name", &field.name);
            w.str_field(3, "type", &field.field_type);
            if let Some(default) = &field.default {
                w.value_field(3, "default", default);
            }
        }
    }
}

fn write_block(w: &mut YamlWriter, key: &str, fields: &KeyedFields) {
    w.section(0, key);
    for (name, value) in fields {
        match value {
            FieldValue::Str(s) => w.str_field(1, name, s),
            FieldValue::Int(i) => w.raw_field(1, name, i),
            FieldValue::Float(f) => w.raw_field(1, name, f),
            FieldValue::IntList(list) => w.inline_list(1, name, list),
        }
    }
}

/// Canonical prompt slot order.
///
/// Unphased slots come first, then `*_phase_N` slots by ascending phase;
/// within a phase `system` precedes `user`. Unrecognized slot names sort
/// last, alphabetically.
fn compare_slots(a: &str, b: &str) -> Ordering {
    slot_key(a).cmp(&slot_key(b))
}

fn slot_key(slot: &str) -> (u8, u32, u8, &str) {
    let kind_rank = |kind: &str| match kind {
        "system" => Some(0),
        "user" => Some(1),
        _ => None,
    };

    if let Some(rank) = kind_rank(slot) {
        return (0, 0, rank, "");
    }

    if let Some((kind, phase)) = slot.split_once("_phase_")
        && let Some(rank) = kind_rank(kind)
        && let Ok(phase) = phase.parse::<u32>()
    {
        return (1, phase, rank, "");
    }

    (2, 0, 0, slot)
}
