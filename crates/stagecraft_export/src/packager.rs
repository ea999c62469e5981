//! Asset Packager
//!
//! Builds `game.zip`: the generated page plus one `models/<fileName>` entry
//! per imported model. Entries are snapshotted synchronously in
//! [`AssetPackager::prepare`]; the zip itself is written on a background
//! blocking task by [`AssetPackager::spawn`].

use std::io::{Cursor, Seek, Write};
use std::sync::{Arc, OnceLock};

use stagecraft_scene::SceneState;
use tokio::runtime::Runtime;
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::errors::Result;
use crate::settings::ExportSettings;

fn get_export_runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create export runtime"))
}

/// One file inside the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub data: Arc<[u8]>,
}

/// A snapshot of everything that goes into one archive.
///
/// Holds shared references to model payloads, so the scene can change (or
/// drop the objects) while the job is still being written.
#[derive(Debug, Clone)]
pub struct ArchiveJob {
    file_name: String,
    entries: Vec<ArchiveEntry>,
}

impl ArchiveJob {
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            entries: Vec::new(),
        }
    }

    /// Adds an entry. A name already present keeps its position and takes the
    /// new payload.
    pub fn insert(&mut self, name: impl Into<String>, data: impl Into<Arc<[u8]>>) {
        let name = name.into();
        let data = data.into();
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == name) {
            log::warn!("Archive entry {name} added twice, keeping the last payload");
            existing.data = data;
        } else {
            self.entries.push(ArchiveEntry { name, data });
        }
    }

    #[inline]
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Writes the archive into `writer` and returns it.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<W> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = ZipWriter::new(writer);

        for entry in &self.entries {
            zip.start_file(entry.name.as_str(), options)?;
            zip.write_all(&entry.data)?;
        }

        Ok(zip.finish()?)
    }

    /// Serializes the archive in memory.
    pub fn serialize(self) -> Result<PackagedArchive> {
        let bytes = self.write_to(Cursor::new(Vec::new()))?.into_inner();
        log::debug!(
            "Packaged {} ({} entries, {} bytes)",
            self.file_name,
            self.entries.len(),
            bytes.len()
        );
        Ok(PackagedArchive {
            entries: self.entries.into_iter().map(|e| e.name).collect(),
            file_name: self.file_name,
            bytes,
        })
    }
}

/// A serialized archive ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedArchive {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AssetPackager {
    archive_name: String,
    html_name: String,
    models_dir: String,
}

impl Default for AssetPackager {
    fn default() -> Self {
        Self::new(&ExportSettings::default())
    }
}

impl AssetPackager {
    #[must_use]
    pub fn new(settings: &ExportSettings) -> Self {
        Self {
            archive_name: settings.archive_name.clone(),
            html_name: settings.html_name.clone(),
            models_dir: settings.models_dir().to_string(),
        }
    }

    /// Snapshots the page and every imported model of `scene` into a job.
    ///
    /// Models sharing a file name collapse into one entry holding the payload
    /// of the last one in scene order.
    #[must_use]
    pub fn prepare(&self, html: &str, scene: &SceneState) -> ArchiveJob {
        let mut job = ArchiveJob::new(&self.archive_name);
        job.insert(self.html_name.as_str(), html.as_bytes());

        for (_, model) in scene.models() {
            job.insert(format!("{}{}", self.models_dir, model.file_name), Arc::clone(&model.bytes));
        }
        job
    }

    /// Serializes `job` on a background task and hands the result to
    /// `on_complete` from that task. Returns immediately.
    pub fn spawn<F>(&self, job: ArchiveJob, on_complete: F)
    where
        F: FnOnce(Result<PackagedArchive>) + Send + 'static,
    {
        log::debug!("Scheduling archive {}", job.file_name());
        get_export_runtime().spawn_blocking(move || on_complete(job.serialize()));
    }
}
