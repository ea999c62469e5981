//! Export orchestration for Stagecraft.
//!
//! - [`AssetPackager`]: pairs the generated page with imported model payloads
//!   in a zip archive, serialized on a background task
//! - [`ExportTrigger`]: the Preview/CodeView state machine plus the archive
//!   and single-file export actions
//! - [`DownloadSink`]: where finished files go (a directory, memory, or a
//!   browser download in an embedding application)
//! - [`ExportSettings`]: file names, page options and emitter presets

pub mod errors;
pub mod packager;
pub mod settings;
pub mod sink;
pub mod surface;
pub mod task;
pub mod trigger;

pub use errors::{ExportError, Result};
pub use packager::{ArchiveEntry, ArchiveJob, AssetPackager, PackagedArchive};
pub use settings::ExportSettings;
pub use sink::{DirectorySink, DownloadSink, MemorySink, SavedFile};
pub use surface::{DisplaySurface, TextSurface};
pub use task::{ExportReceipt, ExportTask};
pub use trigger::{ExportTrigger, ViewMode};
