//! Agent pool expansion.

use crate::model::AgentRole;

/// One agent instance in the flattened pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentInstance {
    pub id: u32,
}

/// Flatten per-role agent counts into one globally numbered pool.
///
/// Ids start at 1 and keep counting across roles in declaration order; a
/// role with zero agents contributes nothing.
pub fn expand(roles: &[AgentRole]) -> Vec<AgentInstance> {
    roles
        .iter()
        .fold((1u32, Vec::new()), |(next, mut pool), role| {
            let count = role.number_of_agents;
            pool.extend((next..next + count).map(|id| AgentInstance { id }));
            (next + count, pool)
        })
        .1
}
