//! Manager to runner resolution.
//!
//! Every manager variant pairs with exactly one runner variant:
//!
//! | manager                 | runner               | extra runner fields                                          |
//! |-------------------------|----------------------|--------------------------------------------------------------|
//! | `TurnBasedPhaseManager` | `TurnBasedGameRunner`| none                                                         |
//! | `HybridPhaseManager`    | `HybridGameRunner`   | `continuous_phases`, `max_action_delay`, `min_action_delay`  |
//!
//! The runner block always carries the game id (default `0`) and the
//! server's `hostname`, `port`, and `path`.

use crate::model::{ManagerConfig, ServerConfig};
use std::fmt;

/// A scalar or short list written into a manager or runner block.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Float(f64),
    /// Written inline, e.g. `[1, 3]`.
    IntList(Vec<u32>),
}

/// Ordered `(key, value)` pairs of one block.
pub type KeyedFields = Vec<(&'static str, FieldValue)>;

/// Runner variants the external system can instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerKind {
    TurnBasedGameRunner,
    HybridGameRunner,
}

impl RunnerKind {
    /// The runner paired with `manager`.
    pub fn for_manager(manager: &ManagerConfig) -> Self {
        match manager {
            ManagerConfig::TurnBasedPhaseManager => RunnerKind::TurnBasedGameRunner,
            ManagerConfig::HybridPhaseManager { .. } => RunnerKind::HybridGameRunner,
        }
    }
}

impl fmt::Display for RunnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerKind::TurnBasedGameRunner => write!(f, "TurnBasedGameRunner"),
            RunnerKind::HybridGameRunner => write!(f, "HybridGameRunner"),
        }
    }
}

/// The `manager` and `runner` blocks of a compiled configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBlocks {
    pub manager: KeyedFields,
    pub runner: KeyedFields,
}

/// Resolve the manager and its paired runner into keyed blocks.
pub fn resolve(
    manager: &ManagerConfig,
    game_id: Option<i64>,
    server: &ServerConfig,
) -> ResolvedBlocks {
    let manager_block = vec![("type", FieldValue::Str(manager.type_name().to_string()))];

    let mut runner = vec![
        ("type", FieldValue::Str(RunnerKind::for_manager(manager).to_string())),
        ("game_id", FieldValue::Int(game_id.unwrap_or(0))),
        ("hostname", FieldValue::Str(server.hostname.clone())),
        ("port", FieldValue::Int(i64::from(server.port))),
        ("path", FieldValue::Str(server.path.clone())),
    ];

    match manager {
        ManagerConfig::TurnBasedPhaseManager => {}
        ManagerConfig::HybridPhaseManager {
            continuous_phases,
            max_action_delay,
            min_action_delay,
        } => {
            runner.push((
                "continuous_phases",
                FieldValue::IntList(continuous_phases.clone()),
            ));
            runner.push(("max_action_delay", FieldValue::Float(*max_action_delay)));
            runner.push(("min_action_delay", FieldValue::Float(*min_action_delay)));
        }
    }

    ResolvedBlocks {
        manager: manager_block,
        runner,
    }
}
