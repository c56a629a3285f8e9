//! Command implementations for simcfg.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod export;
mod insert;
mod project;

use crate::cli::{Command, FilenameArgs, TokenArgs, VarsArgs};
use crate::compile::export_filename;
use crate::error::Result;
use crate::model::Project;
use crate::variables::references;
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// `config_path` is the global `--config` override.
pub fn dispatch(command: Command, config_path: Option<&Path>) -> Result<()> {
    match command {
        Command::New(args) => project::cmd_new(args),
        Command::Import(args) => project::cmd_import(args),
        Command::Export(args) => export::cmd_export(args, config_path),
        Command::Insert(args) => insert::cmd_insert(args),
        Command::Vars(args) => cmd_vars(args),
        Command::Token(args) => cmd_token(args),
        Command::Filename(args) => cmd_filename(args),
    }
}

fn cmd_vars(args: VarsArgs) -> Result<()> {
    let project = Project::load(&args.project)?;
    let refs = references(&project.state);

    if refs.is_empty() && project.prompt_partials.is_empty() {
        println!("No state fields or prompt partials declared.");
        return Ok(());
    }

    for r in refs {
        println!("{:<8} {:<24} {}", r.namespace, r.field, r.token);
    }
    for partial in &project.prompt_partials {
        println!("{:<8} {:<24} {}", "partial", partial.name, partial.include_reference());
    }
    Ok(())
}

fn cmd_token(args: TokenArgs) -> Result<()> {
    println!("{}", args.namespace.token(&args.field));
    Ok(())
}

fn cmd_filename(args: FilenameArgs) -> Result<()> {
    println!("{}", export_filename(&args.name));
    Ok(())
}
