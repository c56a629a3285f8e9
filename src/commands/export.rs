//! `simcfg export`: compile a project, then persist the result.

use crate::cli::ExportArgs;
use crate::compile::{compile, export_filename};
use crate::config::Config;
use crate::error::{Result, SimError};
use crate::model::Project;
use crate::persist::{SaveEnvironment, SaveOutcome, save_with, select_strategy};
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn cmd_export(args: ExportArgs, config_path: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        SimError::UserError(format!("failed to get current working directory: {}", e))
    })?;

    let config = Config::resolve(config_path, &cwd)?.with_server_overrides(
        args.hostname,
        args.port,
        args.path,
    )?;

    // Snapshot of the project as of this export.
    let project = Project::load(&args.project)?;
    let text = compile(&project, &config.server);
    let filename = export_filename(&project.name);
    debug!(project = %project.name, filename = %filename, bytes = text.len(), "compiled");

    if args.stdout {
        print!("{}", text);
        return Ok(());
    }

    let env = SaveEnvironment::probe(
        args.save_mode.unwrap_or(config.export.save_mode),
        args.save_as,
        args.output_dir
            .unwrap_or_else(|| PathBuf::from(&config.export.output_dir)),
    );
    let mut strategy = select_strategy(env);

    match save_with(strategy.as_mut(), &text, &filename)? {
        SaveOutcome::Saved(path) => println!("Exported configuration to {}", path.display()),
        SaveOutcome::Cancelled => println!("Export cancelled."),
    }
    Ok(())
}
