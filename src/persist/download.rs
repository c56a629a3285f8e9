//! The fallback save path: a transient object URL and link, triggered once.

use super::{SaveOutcome, SaveStrategy};
use crate::error::{Result, SimError};
use crate::fs::atomic_write;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// MIME type of exported configuration files.
pub const YAML_MIME: &str = "text/yaml;charset=utf-8";

/// In-memory file contents tagged with a MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

impl Blob {
    pub fn yaml(text: &str) -> Self {
        Self {
            bytes: text.as_bytes().to_vec(),
            mime: YAML_MIME,
        }
    }
}

/// The primitives a download needs from its host.
///
/// [`DownloadSave`] pairs every `create_object_url` with exactly one
/// `revoke_object_url` and every `append_link` with exactly one
/// `remove_link`, including when a later step fails.
pub trait DownloadHost {
    type Url;
    type Link;

    fn create_object_url(&self, blob: &Blob) -> Result<Self::Url>;
    fn revoke_object_url(&self, url: &Self::Url);

    /// Attach a transient link pointing at `url` that downloads as `filename`.
    fn append_link(&self, url: &Self::Url, filename: &str) -> Result<Self::Link>;
    fn remove_link(&self, link: &Self::Link);

    /// Trigger the link; returns where the file landed.
    fn click(&self, link: &Self::Link) -> Result<PathBuf>;
}

/// Saves by synthesizing a download through a [`DownloadHost`].
#[derive(Debug)]
pub struct DownloadSave<H> {
    host: H,
}

impl<H: DownloadHost> DownloadSave<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: DownloadHost> SaveStrategy for DownloadSave<H> {
    fn save(&mut self, text: &str, suggested_filename: &str) -> Result<SaveOutcome> {
        warn!(
            filename = suggested_filename,
            "save picker unavailable, falling back to download"
        );

        let blob = Blob::yaml(text);
        let url = ObjectUrl::create(&self.host, &blob)?;
        let link = AttachedLink::append(&self.host, url.get(), suggested_filename)?;
        let path = self.host.click(link.get())?;

        // Guards drop in reverse order: the link is removed, then the URL revoked.
        Ok(SaveOutcome::Saved(path))
    }
}

/// Revokes its object URL when dropped.
struct ObjectUrl<'h, H: DownloadHost> {
    host: &'h H,
    url: H::Url,
}

impl<'h, H: DownloadHost> ObjectUrl<'h, H> {
    fn create(host: &'h H, blob: &Blob) -> Result<Self> {
        let url = host.create_object_url(blob)?;
        Ok(Self { host, url })
    }

    fn get(&self) -> &H::Url {
        &self.url
    }
}

impl<H: DownloadHost> Drop for ObjectUrl<'_, H> {
    fn drop(&mut self) {
        self.host.revoke_object_url(&self.url);
    }
}

/// Removes its link when dropped.
struct AttachedLink<'h, H: DownloadHost> {
    host: &'h H,
    link: H::Link,
}

impl<'h, H: DownloadHost> AttachedLink<'h, H> {
    fn append(host: &'h H, url: &H::Url, filename: &str) -> Result<Self> {
        let link = host.append_link(url, filename)?;
        Ok(Self { host, link })
    }

    fn get(&self) -> &H::Link {
        &self.link
    }
}

impl<H: DownloadHost> Drop for AttachedLink<'_, H> {
    fn drop(&mut self) {
        self.host.remove_link(&self.link);
    }
}

/// Filesystem host: blobs are staged as temp files and downloads land in
/// a directory without overwriting existing files.
#[derive(Debug, Clone)]
pub struct FsDownloadHost {
    downloads_dir: PathBuf,
}

/// A staged link: where the blob lives and where it will be downloaded.
#[derive(Debug)]
pub struct StagedLink {
    source: PathBuf,
    target: PathBuf,
}

impl FsDownloadHost {
    pub fn new(downloads_dir: impl Into<PathBuf>) -> Self {
        Self {
            downloads_dir: downloads_dir.into(),
        }
    }
}

impl DownloadHost for FsDownloadHost {
    type Url = NamedTempFile;
    type Link = StagedLink;

    fn create_object_url(&self, blob: &Blob) -> Result<NamedTempFile> {
        let mut staged = tempfile::Builder::new()
            .prefix("simcfg-blob-")
            .suffix(".yaml")
            .tempfile()
            .map_err(|e| SimError::PersistError(format!("failed to stage download: {}", e)))?;
        staged
            .write_all(&blob.bytes)
            .map_err(|e| SimError::PersistError(format!("failed to stage download: {}", e)))?;
        debug!(path = %staged.path().display(), mime = blob.mime, "staged blob");
        Ok(staged)
    }

    fn revoke_object_url(&self, url: &NamedTempFile) {
        if let Err(e) = std::fs::remove_file(url.path()) {
            debug!(error = %e, "failed to remove staged blob");
        }
    }

    fn append_link(&self, url: &NamedTempFile, filename: &str) -> Result<StagedLink> {
        Ok(StagedLink {
            source: url.path().to_path_buf(),
            target: unique_destination(&self.downloads_dir, filename),
        })
    }

    fn remove_link(&self, link: &StagedLink) {
        debug!(destination = %link.target.display(), "released download link");
    }

    fn click(&self, link: &StagedLink) -> Result<PathBuf> {
        let bytes = std::fs::read(&link.source).map_err(|e| {
            SimError::PersistError(format!("failed to read staged download: {}", e))
        })?;
        atomic_write(&link.target, &bytes)?;
        Ok(link.target.clone())
    }
}

/// `dir/name`, or `dir/stem (N).ext` for the first N that is free.
pub(crate) fn unique_destination(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (filename, None),
    };

    (1..)
        .map(|n| match ext {
            Some(ext) => dir.join(format!("{} ({}).{}", stem, n, ext)),
            None => dir.join(format!("{} ({})", stem, n)),
        })
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}
