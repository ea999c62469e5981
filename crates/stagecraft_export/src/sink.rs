use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::errors::{ExportError, Result};

/// Receives finished export files.
///
/// In the browser this is the client-side download; natively it is usually
/// a directory. Called from the packaging task, hence `Send + Sync`.
pub trait DownloadSink: Send + Sync {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<()>;
}

/// Writes downloads into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DownloadSink for DirectorySink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<()> {
        // Downloads are flat: reject anything that would leave the directory.
        let name = Path::new(file_name)
            .file_name()
            .filter(|name| *name == std::ffi::OsStr::new(file_name))
            .ok_or_else(|| ExportError::InvalidFileName(file_name.to_string()))?;

        std::fs::create_dir_all(&self.root)?;
        let path = self.root.join(name);
        std::fs::write(&path, bytes)?;
        log::info!("Saved {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Keeps downloads in memory, in the order they completed.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<Vec<SavedFile>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn files(&self) -> Vec<SavedFile> {
        self.files.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.lock().is_empty()
    }

    /// Most recent download with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<SavedFile> {
        self.files.lock().iter().rev().find(|f| f.name == name).cloned()
    }

    pub fn take(&self) -> Vec<SavedFile> {
        std::mem::take(&mut *self.files.lock())
    }
}

impl DownloadSink for MemorySink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<()> {
        self.files.lock().push(SavedFile {
            name: file_name.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}
