//! Configuration compiler.
//!
//! Turns a [`Project`](crate::model::Project) plus a
//! [`ServerConfig`](crate::model::ServerConfig) into the YAML document the
//! external simulation runner consumes. Compilation is a pure function of
//! its inputs: the same project and server always produce byte-identical
//! text.
//!
//! # Output Shape
//!
//! ```text
//! name: "Market Sim"
//! game_id: 1
//! prompt_partials:
//!   - name: "rules"
//!     content: |-
//!       Trade fairly.
//! agent_roles:
//!   - role_id: 1
//!     name: "Buyer"
//!     llm_type: "gpt-4o"
//!     number_of_agents: 2
//!     prompts:
//!       system: |-
//!         You buy {{ public_information.item }}.
//! agents:
//!   - id: 1
//!   - id: 2
//! state:
//!   public_information:
//!     - name: "item"
//!       type: "str"
//! manager:
//!   type: "TurnBasedPhaseManager"
//! runner:
//!   type: "TurnBasedGameRunner"
//!   game_id: 1
//!   hostname: "localhost"
//!   port: 8080
//!   path: "wss"
//! ```

mod agents;
mod compiler;
mod emitter;
mod filename;
mod runner;


pub use agents::{AgentInstance, expand};
pub use compiler::compile;
pub use filename::{EXPORT_SUFFIX, export_filename};
pub use runner::{FieldValue, KeyedFields, ResolvedBlocks, RunnerKind, resolve};
