use std::path::Path;

use serde::{Deserialize, Serialize};
use stagecraft_codegen::document::{ENGINE_SCRIPT_URL, GLTF_LOADER_SCRIPT_URL};
use stagecraft_codegen::{EmitterConfig, HtmlDocument};

use crate::errors::Result;

/// Export configuration.
///
/// Every field has a default, so a settings file only needs the keys it
/// changes:
///
/// ```json
/// { "page_title": "My Level", "archive_name": "level.zip" }
/// ```
///
/// An emitter section given in the file replaces the whole preset; keys
/// missing inside it take [`EmitterConfig::default`] values, not the values
/// of the preset it replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Download name of the archive export.
    pub archive_name: String,
    /// Name of the page, both inside the archive and as the single-file download.
    pub html_name: String,
    pub page_title: String,
    pub engine_url: String,
    pub loader_url: String,

    /// Emitter used for the in-editor code view.
    pub preview: EmitterConfig,
    /// Emitter used for the archive export.
    pub bundle: EmitterConfig,
    /// Emitter used for the single-file export.
    pub standalone: EmitterConfig,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            archive_name: "game.zip".to_string(),
            html_name: "game.html".to_string(),
            page_title: "Exported 3D Game".to_string(),
            engine_url: ENGINE_SCRIPT_URL.to_string(),
            loader_url: GLTF_LOADER_SCRIPT_URL.to_string(),
            preview: EmitterConfig::preview(),
            bundle: EmitterConfig::export_bundle(),
            standalone: EmitterConfig::standalone_html(),
        }
    }
}

impl ExportSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&text)?;
        log::info!("Loaded export settings from {}", path.display());
        Ok(settings)
    }

    /// Archive directory for models, as used by the bundle emitter.
    #[must_use]
    pub fn models_dir(&self) -> &str {
        &self.bundle.models_dir
    }

    /// Page for the archive export.
    #[must_use]
    pub fn bundle_document(&self) -> HtmlDocument {
        HtmlDocument {
            title: self.page_title.clone(),
            engine_url: self.engine_url.clone(),
            loader_url: Some(self.loader_url.clone()),
            loading_indicator: true,
        }
    }

    /// Page for the single-file export.
    #[must_use]
    pub fn standalone_document(&self) -> HtmlDocument {
        HtmlDocument {
            title: self.page_title.clone(),
            engine_url: self.engine_url.clone(),
            loader_url: None,
            loading_indicator: false,
        }
    }
}
