//! The preferred save path: pick a location, then write atomically.

use super::{SaveOutcome, SaveStrategy};
use crate::error::{Result, SimError};
use crate::fs::atomic_write_file;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Asks where a file should be saved.
pub trait LocationPicker {
    /// Return the chosen path, or `None` when the user cancels.
    fn pick(&mut self, suggested_filename: &str) -> Result<Option<PathBuf>>;
}

/// Saves through a [`LocationPicker`].
///
/// The write is atomic, so a failure never leaves a partial file at the
/// chosen location.
#[derive(Debug)]
pub struct PickerSave<P> {
    picker: P,
}

impl<P: LocationPicker> PickerSave<P> {
    pub fn new(picker: P) -> Self {
        Self { picker }
    }
}

impl<P: LocationPicker> SaveStrategy for PickerSave<P> {
    fn save(&mut self, text: &str, suggested_filename: &str) -> Result<SaveOutcome> {
        let Some(path) = self.picker.pick(suggested_filename)? else {
            return Ok(SaveOutcome::Cancelled);
        };

        atomic_write_file(&path, text)?;
        Ok(SaveOutcome::Saved(path))
    }
}

/// A destination chosen ahead of time (`--save-as`).
///
/// A directory receives the suggested filename.
#[derive(Debug, Clone)]
pub struct FixedPicker {
    path: PathBuf,
}

impl FixedPicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LocationPicker for FixedPicker {
    fn pick(&mut self, suggested_filename: &str) -> Result<Option<PathBuf>> {
        Ok(Some(resolve_choice(&self.path, suggested_filename)))
    }
}

/// Interactive prompt on the terminal.
///
/// An empty answer accepts the suggested name in the default directory;
/// `q` or end of input cancels.
#[derive(Debug)]
pub struct PromptPicker<R> {
    input: R,
    default_dir: PathBuf,
}

impl PromptPicker<std::io::StdinLock<'static>> {
    pub fn stdin(default_dir: PathBuf) -> Self {
        Self::new(std::io::stdin().lock(), default_dir)
    }
}

impl<R: BufRead> PromptPicker<R> {
    pub fn new(input: R, default_dir: PathBuf) -> Self {
        Self { input, default_dir }
    }
}

impl<R: BufRead> LocationPicker for PromptPicker<R> {
    fn pick(&mut self, suggested_filename: &str) -> Result<Option<PathBuf>> {
        let default = self.default_dir.join(suggested_filename);
        eprint!("Save as [{}] (q to cancel): ", default.display());
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .map_err(|e| SimError::PersistError(format!("failed to read save location: {}", e)))?;

        let answer = answer.trim();
        if read == 0 || answer.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if answer.is_empty() {
            return Ok(Some(default));
        }

        Ok(Some(resolve_choice(Path::new(answer), suggested_filename)))
    }
}

fn resolve_choice(path: &Path, suggested_filename: &str) -> PathBuf {
    if path.is_dir() {
        path.join(suggested_filename)
    } else {
        path.to_path_buf()
    }
}
