//! CLI argument parsing for simcfg.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::SaveMode;
use crate::variables::Namespace;
use clap::{ArgAction, ArgGroup, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// simcfg: author and export multi-agent simulation configurations.
///
/// Projects are YAML files holding agent roles, prompts, a shared state
/// schema, and a phase manager. `export` compiles a project into the
/// configuration file the simulation runner consumes.
#[derive(Parser, Debug)]
#[command(name = "simcfg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (default: ./simcfg.yaml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for simcfg.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project file.
    ///
    /// The project receives a fresh identifier and creation timestamp.
    New(NewArgs),

    /// Import a project from YAML or JSON as a brand-new project.
    ///
    /// Any identifier in the imported document is replaced.
    Import(ImportArgs),

    /// Compile a project and save the configuration file.
    ///
    /// Uses a save location picker when available and falls back to
    /// downloading into the output directory otherwise.
    Export(ExportArgs),

    /// Insert a variable reference, partial include, or text into a prompt.
    ///
    /// Replaces the selected range (or inserts at the caret) and reports
    /// the caret position after the insertion.
    Insert(InsertArgs),

    /// List the variable reference tokens a project's schema offers.
    Vars(VarsArgs),

    /// Print the reference token for a state field.
    Token(TokenArgs),

    /// Print the export filename derived from a project name.
    Filename(FilenameArgs),
}

/// Manager variants selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerKind {
    TurnBased,
    Hybrid,
}

/// Arguments for the `new` command.
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Project name.
    pub name: String,

    /// Optional description.
    #[arg(short, long)]
    pub description: Option<String>,

    /// Game identifier passed to the runner.
    #[arg(long)]
    pub game_id: Option<i64>,

    /// Phase manager variant.
    #[arg(long, value_enum, default_value = "turn-based")]
    pub manager: ManagerKind,

    /// Continuously running phases (hybrid manager only).
    #[arg(long, value_delimiter = ',')]
    pub continuous_phases: Vec<u32>,

    /// Maximum delay between actions (hybrid manager only).
    #[arg(long, default_value_t = 0.0)]
    pub max_action_delay: f64,

    /// Minimum delay between actions (hybrid manager only).
    #[arg(long, default_value_t = 0.0)]
    pub min_action_delay: f64,

    /// Output file (default: <id>.yaml in the current directory).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `import` command.
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Project document to import (.json or .yaml).
    pub file: PathBuf,

    /// Output file (default: <id>.yaml in the current directory).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Project file to compile.
    pub project: PathBuf,

    /// Print the configuration to stdout instead of saving it.
    #[arg(long, conflicts_with = "save_as")]
    pub stdout: bool,

    /// Save to this path (a directory receives the suggested filename).
    #[arg(long)]
    pub save_as: Option<PathBuf>,

    /// Save strategy: auto, picker, or download.
    #[arg(long, value_parser = parse_save_mode)]
    pub save_mode: Option<SaveMode>,

    /// Download directory and default picker location.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Override the runner hostname.
    #[arg(long)]
    pub hostname: Option<String>,

    /// Override the runner port.
    #[arg(long)]
    pub port: Option<u16>,

    /// Override the runner path.
    #[arg(long)]
    pub path: Option<String>,
}

/// Arguments for the `insert` command.
#[derive(Parser, Debug)]
#[command(group(
    ArgGroup::new("literal")
        .required(true)
        .args(["meta", "public", "private", "partial", "text"])
))]
pub struct InsertArgs {
    /// Project file to edit in place.
    pub project: PathBuf,

    /// Role whose prompt is edited.
    #[arg(long)]
    pub role: u32,

    /// Prompt slot (system, user, system_phase_1, ...).
    #[arg(long)]
    pub slot: String,

    /// Insert a reference to a meta field.
    #[arg(long, value_name = "FIELD")]
    pub meta: Option<String>,

    /// Insert a reference to a public field.
    #[arg(long, value_name = "FIELD")]
    pub public: Option<String>,

    /// Insert a reference to a private field.
    #[arg(long, value_name = "FIELD")]
    pub private: Option<String>,

    /// Insert an include reference to a prompt partial.
    #[arg(long, value_name = "NAME")]
    pub partial: Option<String>,

    /// Insert raw text.
    #[arg(long)]
    pub text: Option<String>,

    /// Selection start in characters (default: end of the prompt).
    #[arg(long)]
    pub start: Option<usize>,

    /// Selection end in characters (default: same as start).
    #[arg(long)]
    pub end: Option<usize>,
}

/// Arguments for the `vars` command.
#[derive(Parser, Debug)]
pub struct VarsArgs {
    /// Project file.
    pub project: PathBuf,
}

/// Arguments for the `token` command.
#[derive(Parser, Debug)]
pub struct TokenArgs {
    /// Namespace: meta, public, or private.
    #[arg(value_parser = parse_namespace)]
    pub namespace: Namespace,

    /// Field name.
    pub field: String,
}

/// Arguments for the `filename` command.
#[derive(Parser, Debug)]
pub struct FilenameArgs {
    /// Project name.
    pub name: String,
}

fn parse_save_mode(s: &str) -> Result<SaveMode, String> {
    SaveMode::from_str(s)
        .ok_or_else(|| format!("invalid save mode '{}' (expected auto, picker, or download)", s))
}

fn parse_namespace(s: &str) -> Result<Namespace, String> {
    Namespace::from_str(s)
        .ok_or_else(|| format!("invalid namespace '{}' (expected meta, public, or private)", s))
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
