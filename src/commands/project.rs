//! `simcfg new` and `simcfg import`.

use crate::cli::{ImportArgs, ManagerKind, NewArgs};
use crate::error::Result;
use crate::model::{ManagerConfig, Project};
use std::path::PathBuf;
use tracing::info;

pub fn cmd_new(args: NewArgs) -> Result<()> {
    let mut draft = Project::new(args.name);
    draft.description = args.description;
    draft.game_id = args.game_id;
    draft.manager = match args.manager {
        ManagerKind::TurnBased => ManagerConfig::TurnBasedPhaseManager,
        ManagerKind::Hybrid => ManagerConfig::HybridPhaseManager {
            continuous_phases: args.continuous_phases,
            max_action_delay: args.max_action_delay,
            min_action_delay: args.min_action_delay,
        },
    };

    draft.validate()?;
    store_new(draft, args.output)
}

pub fn cmd_import(args: ImportArgs) -> Result<()> {
    let imported = Project::load(&args.file)?;
    info!(source = %args.file.display(), "importing project");
    store_new(imported, args.output)
}

/// Materialize `draft` as a new project and write it out.
fn store_new(draft: Project, output: Option<PathBuf>) -> Result<()> {
    let project = draft.materialize();
    let path = output.unwrap_or_else(|| PathBuf::from(format!("{}.yaml", project.id)));

    project.save(&path)?;

    let summary = project.summary();
    println!("Created project: {}", summary.name);
    println!("  Id:   {}", summary.id);
    println!("  File: {}", path.display());
    Ok(())
}
