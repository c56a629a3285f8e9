//! Persistence strategies for exported configurations.
//!
//! Two implementations of [`SaveStrategy`] exist:
//!
//! - [`PickerSave`]: the preferred path. A [`LocationPicker`] chooses where
//!   to write (or the user cancels), then the text is written atomically.
//! - [`DownloadSave`]: the fallback when no picker is available. The text is
//!   wrapped in a [`Blob`], exposed through a transient object URL and link,
//!   and "downloaded" into a directory. Every transient resource is released
//!   on every path through drop guards.
//!
//! [`select_strategy`] probes the environment once per export and picks one.

mod download;
mod picker;

#[cfg(test)]
mod tests;

pub use download::{Blob, DownloadHost, DownloadSave, FsDownloadHost, YAML_MIME};
pub use picker::{FixedPicker, LocationPicker, PickerSave, PromptPicker};

use crate::config::SaveMode;
use crate::error::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{error, info};

/// How a save attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The text was written to this path.
    Saved(PathBuf),
    /// The user dismissed the picker. Nothing was written.
    Cancelled,
}

/// A way of persisting compiled configuration text.
pub trait SaveStrategy {
    /// Persist `text`, offering `suggested_filename` as the name.
    fn save(&mut self, text: &str, suggested_filename: &str) -> Result<SaveOutcome>;
}

/// Run a strategy and report the outcome on the diagnostic log.
///
/// Failures are logged at error level and returned; cancellation is a
/// normal outcome.
pub fn save_with(
    strategy: &mut dyn SaveStrategy,
    text: &str,
    suggested_filename: &str,
) -> Result<SaveOutcome> {
    match strategy.save(text, suggested_filename) {
        Ok(SaveOutcome::Saved(path)) => {
            info!(path = %path.display(), "saved configuration");
            Ok(SaveOutcome::Saved(path))
        }
        Ok(SaveOutcome::Cancelled) => {
            info!(filename = suggested_filename, "save cancelled");
            Ok(SaveOutcome::Cancelled)
        }
        Err(e) => {
            error!(filename = suggested_filename, error = %e, "failed to save configuration");
            Err(e)
        }
    }
}

/// What the host environment offers for saving.
#[derive(Debug, Clone)]
pub struct SaveEnvironment {
    /// Configured preference.
    pub mode: SaveMode,
    /// An explicit destination chosen up front.
    pub save_as: Option<PathBuf>,
    /// Whether a user can answer a prompt on the terminal.
    pub interactive: bool,
    /// Where downloads and default picker locations go.
    pub output_dir: PathBuf,
}

impl SaveEnvironment {
    /// Probe the current process: interactive when stdin and stderr are terminals.
    pub fn probe(mode: SaveMode, save_as: Option<PathBuf>, output_dir: PathBuf) -> Self {
        Self {
            mode,
            save_as,
            interactive: std::io::stdin().is_terminal() && std::io::stderr().is_terminal(),
            output_dir,
        }
    }

    /// Whether a picker can be offered.
    pub fn has_picker(&self) -> bool {
        match self.mode {
            SaveMode::Download => false,
            SaveMode::Picker => true,
            SaveMode::Auto => self.save_as.is_some() || self.interactive,
        }
    }
}

/// Choose the save strategy for one export.
pub fn select_strategy(env: SaveEnvironment) -> Box<dyn SaveStrategy> {
    if !env.has_picker() {
        return Box::new(DownloadSave::new(FsDownloadHost::new(env.output_dir)));
    }

    match env.save_as {
        Some(path) => Box::new(PickerSave::new(FixedPicker::new(path))),
        None => Box::new(PickerSave::new(PromptPicker::stdin(env.output_dir))),
    }
}
