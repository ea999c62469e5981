//! Export Trigger
//!
//! The editor's main panel is either the live preview or a read-only code
//! view. Entering the code view always regenerates from the current scene;
//! leaving it just shows the render surface again. Exports can be started
//! from either state and never change it.

use std::sync::Arc;

use stagecraft_codegen::CodeEmitter;
use stagecraft_scene::SceneState;

use crate::errors::Result;
use crate::packager::{AssetPackager, PackagedArchive};
use crate::settings::ExportSettings;
use crate::sink::DownloadSink;
use crate::surface::DisplaySurface;
use crate::task::{ExportReceipt, ExportTask};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Preview,
    CodeView,
}

pub struct ExportTrigger<S: DisplaySurface> {
    settings: ExportSettings,
    packager: AssetPackager,
    sink: Arc<dyn DownloadSink>,
    surface: S,
    mode: ViewMode,
}

impl<S: DisplaySurface> ExportTrigger<S> {
    pub fn new(settings: ExportSettings, sink: Arc<dyn DownloadSink>, surface: S) -> Self {
        Self {
            packager: AssetPackager::new(&settings),
            settings,
            sink,
            surface,
            mode: ViewMode::Preview,
        }
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    #[inline]
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // ========================================================================
    // View state
    // ========================================================================

    /// Switches between preview and code view; returns the new mode.
    pub fn toggle_code_view(&mut self, scene: &SceneState) -> ViewMode {
        match self.mode {
            ViewMode::Preview => self.show_code(scene),
            ViewMode::CodeView => self.show_preview(),
        }
        self.mode
    }

    /// Shows the code view, regenerating from `scene`.
    pub fn show_code(&mut self, scene: &SceneState) {
        let code = CodeEmitter::new(self.settings.preview.clone()).generate(scene);
        self.surface.show_code(&code);
        self.mode = ViewMode::CodeView;
    }

    pub fn show_preview(&mut self) {
        self.surface.show_render_surface();
        self.mode = ViewMode::Preview;
    }

    // ========================================================================
    // Exports
    // ========================================================================

    /// Generates the bundle page for `scene` (models loaded at runtime).
    #[must_use]
    pub fn bundle_html(&self, scene: &SceneState) -> String {
        let program = CodeEmitter::new(self.settings.bundle.clone()).generate(scene);
        self.settings.bundle_document().wrap(&program)
    }

    /// Generates the single-file page for `scene` (models as comments).
    #[must_use]
    pub fn standalone_html(&self, scene: &SceneState) -> String {
        let program = CodeEmitter::new(self.settings.standalone.clone()).generate(scene);
        self.settings.standalone_document().wrap(&program)
    }

    /// Exports `scene` as an archive with its models.
    ///
    /// Code generation and the entry snapshot happen now; the zip is written
    /// in the background and saved through the sink once done. The archive is
    /// built the same way whether or not the scene has models.
    pub fn export_game(&self, scene: &SceneState) -> ExportTask {
        let html = self.bundle_html(scene);
        let job = self.packager.prepare(&html, scene);
        log::info!("Exporting {} with {} entries", job.file_name(), job.entries().len());

        let (tx, rx) = flume::bounded(1);
        let sink = Arc::clone(&self.sink);
        self.packager.spawn(job, move |result| {
            let outcome = deliver(result, sink.as_ref());
            // The handle may have been dropped; the download already happened.
            let _ = tx.send(outcome);
        });

        ExportTask::new(rx)
    }

    /// Legacy export: the page alone, no archive.
    pub fn export_html(&self, scene: &SceneState) -> Result<ExportReceipt> {
        let html = self.standalone_html(scene);
        let file_name = &self.settings.html_name;
        self.sink.save(file_name, html.as_bytes())?;
        log::info!("Exported {file_name} ({} bytes)", html.len());
        Ok(ExportReceipt {
            file_name: file_name.clone(),
            size: html.len(),
            entries: vec![file_name.clone()],
        })
    }
}

/// Completion step of an archive export: save on success, report otherwise.
///
/// A failed archive never reaches the sink, so the user does not get an
/// empty or truncated download.
fn deliver(result: Result<PackagedArchive>, sink: &dyn DownloadSink) -> Result<ExportReceipt> {
    let outcome = result.and_then(|archive| {
        sink.save(&archive.file_name, &archive.bytes)?;
        Ok(ExportReceipt {
            size: archive.bytes.len(),
            file_name: archive.file_name,
            entries: archive.entries,
        })
    });

    match &outcome {
        Ok(receipt) => log::info!("Export saved as {} ({} bytes)", receipt.file_name, receipt.size),
        Err(e) => log::error!("Export failed: {e}"),
    }
    outcome
}
