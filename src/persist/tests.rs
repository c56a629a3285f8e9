//! Tests for the save strategies.

use super::download::unique_destination;
use crate::config::SaveMode;
use crate::error::{Result, SimError};
use crate::persist::{
    Blob, DownloadHost, DownloadSave, FixedPicker, FsDownloadHost, LocationPicker, PickerSave,
    PromptPicker, SaveEnvironment, SaveOutcome, SaveStrategy, YAML_MIME, save_with,
};
use std::cell::RefCell;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

/// Records every host call; can be told to fail at one step.
#[derive(Default)]
struct RecordingHost {
    calls: RefCell<Vec<String>>,
    fail_at: Option<&'static str>,
}

impl RecordingHost {
    fn failing_at(step: &'static str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_at: Some(step),
        }
    }

    fn record(&self, call: &str) -> Result<()> {
        self.calls.borrow_mut().push(call.to_string());
        if self.fail_at == Some(call) {
            return Err(SimError::PersistError(format!("{} failed", call)));
        }
        Ok(())
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn count(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }
}

impl DownloadHost for RecordingHost {
    type Url = String;
    type Link = String;

    fn create_object_url(&self, blob: &Blob) -> Result<String> {
        assert_eq!(blob.mime, YAML_MIME);
        self.record("create_url")?;
        Ok("blob:1".to_string())
    }

    fn revoke_object_url(&self, _url: &String) {
        let _ = self.record("revoke_url");
    }

    fn append_link(&self, url: &String, filename: &str) -> Result<String> {
        self.record("append_link")?;
        Ok(format!("{}#{}", url, filename))
    }

    fn remove_link(&self, _link: &String) {
        let _ = self.record("remove_link");
    }

    fn click(&self, link: &String) -> Result<PathBuf> {
        self.record("click")?;
        Ok(PathBuf::from(link))
    }
}

struct CancellingPicker;

impl LocationPicker for CancellingPicker {
    fn pick(&mut self, _suggested_filename: &str) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}

#[test]
fn test_download_releases_resources_in_order() {
    let mut strategy = DownloadSave::new(RecordingHost::default());

    let outcome = strategy.save("name: \"x\"\n", "x_config.yaml").unwrap();

    assert_eq!(
        outcome,
        SaveOutcome::Saved(PathBuf::from("blob:1#x_config.yaml"))
    );
    assert_eq!(
        strategy.host().calls(),
        vec!["create_url", "append_link", "click", "remove_link", "revoke_url"]
    );
}

#[test]
fn test_download_failure_still_releases_everything_once() {
    let mut strategy = DownloadSave::new(RecordingHost::failing_at("click"));

    let err = strategy.save("text", "x_config.yaml").unwrap_err();

    assert!(err.to_string().contains("click failed"));
    let host = strategy.host();
    assert_eq!(host.count("create_url"), 1);
    assert_eq!(host.count("revoke_url"), 1);
    assert_eq!(host.count("append_link"), 1);
    assert_eq!(host.count("remove_link"), 1);
}

#[test]
fn test_download_link_failure_revokes_url_without_removing_link() {
    let mut strategy = DownloadSave::new(RecordingHost::failing_at("append_link"));

    assert!(strategy.save("text", "x_config.yaml").is_err());
    assert_eq!(
        strategy.host().calls(),
        vec!["create_url", "append_link", "revoke_url"]
    );
}

#[test]
fn test_download_url_failure_acquires_nothing() {
    let mut strategy = DownloadSave::new(RecordingHost::failing_at("create_url"));

    assert!(strategy.save("text", "x_config.yaml").is_err());
    assert_eq!(strategy.host().calls(), vec!["create_url"]);
}

#[test]
fn test_fs_download_writes_into_directory() {
    let temp_dir = TempDir::new().unwrap();
    let mut strategy = DownloadSave::new(FsDownloadHost::new(temp_dir.path()));

    let outcome = strategy.save("name: \"Sim\"\n", "sim_config.yaml").unwrap();

    let expected = temp_dir.path().join("sim_config.yaml");
    assert_eq!(outcome, SaveOutcome::Saved(expected.clone()));
    assert_eq!(fs::read_to_string(expected).unwrap(), "name: \"Sim\"\n");
}

#[test]
fn test_fs_download_does_not_clobber() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("sim_config.yaml"), "old").unwrap();
    let mut strategy = DownloadSave::new(FsDownloadHost::new(temp_dir.path()));

    let outcome = strategy.save("new", "sim_config.yaml").unwrap();

    let expected = temp_dir.path().join("sim_config (1).yaml");
    assert_eq!(outcome, SaveOutcome::Saved(expected.clone()));
    assert_eq!(fs::read_to_string(expected).unwrap(), "new");
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("sim_config.yaml")).unwrap(),
        "old"
    );
}

#[test]
fn test_fs_revoke_removes_staged_blob() {
    let temp_dir = TempDir::new().unwrap();
    let host = FsDownloadHost::new(temp_dir.path());

    let url = host.create_object_url(&Blob::yaml("staged")).unwrap();
    let staged = url.path().to_path_buf();
    assert_eq!(fs::read_to_string(&staged).unwrap(), "staged");

    host.revoke_object_url(&url);
    assert!(!staged.exists());
}

#[test]
fn test_unique_destination_numbering() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    assert_eq!(unique_destination(dir, "a.yaml"), dir.join("a.yaml"));
    fs::write(dir.join("a.yaml"), "").unwrap();
    fs::write(dir.join("a (1).yaml"), "").unwrap();
    assert_eq!(unique_destination(dir, "a.yaml"), dir.join("a (2).yaml"));

    fs::write(dir.join("noext"), "").unwrap();
    assert_eq!(unique_destination(dir, "noext"), dir.join("noext (1)"));
}

#[test]
fn test_picker_save_writes_chosen_path() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("chosen.yaml");
    let mut strategy = PickerSave::new(FixedPicker::new(&target));

    let outcome = strategy.save("content\n", "ignored_config.yaml").unwrap();

    assert_eq!(outcome, SaveOutcome::Saved(target.clone()));
    assert_eq!(fs::read_to_string(target).unwrap(), "content\n");
}

#[test]
fn test_fixed_picker_directory_gets_suggested_name() {
    let temp_dir = TempDir::new().unwrap();
    let mut strategy = PickerSave::new(FixedPicker::new(temp_dir.path()));

    let outcome = strategy.save("content", "sim_config.yaml").unwrap();

    assert_eq!(
        outcome,
        SaveOutcome::Saved(temp_dir.path().join("sim_config.yaml"))
    );
}

#[test]
fn test_picker_cancel_is_clean_noop() {
    let temp_dir = TempDir::new().unwrap();
    let mut strategy = PickerSave::new(CancellingPicker);

    let outcome = save_with(&mut strategy, "content", "sim_config.yaml").unwrap();

    assert_eq!(outcome, SaveOutcome::Cancelled);
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_prompt_picker_answers() {
    let dir = PathBuf::from("/exports");

    let mut picker = PromptPicker::new(Cursor::new("\n"), dir.clone());
    assert_eq!(
        picker.pick("sim_config.yaml").unwrap(),
        Some(dir.join("sim_config.yaml"))
    );

    let mut picker = PromptPicker::new(Cursor::new("q\n"), dir.clone());
    assert_eq!(picker.pick("sim_config.yaml").unwrap(), None);

    let mut picker = PromptPicker::new(Cursor::new(""), dir.clone());
    assert_eq!(picker.pick("sim_config.yaml").unwrap(), None);

    let mut picker = PromptPicker::new(Cursor::new("/tmp/nonexistent-dir/out.yaml\n"), dir);
    assert_eq!(
        picker.pick("sim_config.yaml").unwrap(),
        Some(PathBuf::from("/tmp/nonexistent-dir/out.yaml"))
    );
}

#[test]
fn test_capability_probing() {
    let env = |mode, save_as: Option<&str>, interactive| SaveEnvironment {
        mode,
        save_as: save_as.map(PathBuf::from),
        interactive,
        output_dir: PathBuf::from("."),
    };

    assert!(!env(SaveMode::Auto, None, false).has_picker());
    assert!(env(SaveMode::Auto, None, true).has_picker());
    assert!(env(SaveMode::Auto, Some("out.yaml"), false).has_picker());
    assert!(env(SaveMode::Picker, None, false).has_picker());
    assert!(!env(SaveMode::Download, Some("out.yaml"), true).has_picker());
}
