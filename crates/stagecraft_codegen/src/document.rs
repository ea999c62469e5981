use serde::{Deserialize, Serialize};

use crate::templates;

/// three.js distribution referenced by exported pages.
pub const ENGINE_SCRIPT_URL: &str = "https://unpkg.com/three@0.128.0/build/three.min.js";
/// GLTF loader extension matching [`ENGINE_SCRIPT_URL`].
pub const GLTF_LOADER_SCRIPT_URL: &str = "https://unpkg.com/three@0.128.0/examples/js/loaders/GLTFLoader.js";

/// Standalone HTML page wrapping a generated program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlDocument {
    pub title: String,
    pub engine_url: String,
    /// Model loader script; `None` when the page loads no models.
    pub loader_url: Option<String>,
    /// Shows a "Loading..." element the program hides once models settle.
    pub loading_indicator: bool,
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self::standalone()
    }
}

impl HtmlDocument {
    /// Page for the single-file export: engine only.
    #[must_use]
    pub fn standalone() -> Self {
        Self {
            title: "Exported 3D Game".to_string(),
            engine_url: ENGINE_SCRIPT_URL.to_string(),
            loader_url: None,
            loading_indicator: false,
        }
    }

    /// Page for the archive export: engine, model loader and loading indicator.
    #[must_use]
    pub fn bundle() -> Self {
        Self {
            loader_url: Some(GLTF_LOADER_SCRIPT_URL.to_string()),
            loading_indicator: true,
            ..Self::standalone()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Renders the page with `program` inside its script element.
    #[must_use]
    pub fn wrap(&self, program: &str) -> String {
        #[derive(Serialize)]
        struct DocumentContext<'a> {
            title: &'a str,
            engine_url: &'a str,
            loader_url: Option<&'a str>,
            loading_indicator: bool,
            program: &'a str,
        }

        let mut html = templates::render(
            "document.html",
            &DocumentContext {
                title: &self.title,
                engine_url: &self.engine_url,
                loader_url: self.loader_url.as_deref(),
                loading_indicator: self.loading_indicator,
                program: program.trim_end(),
            },
        );
        html.push('\n');
        html
    }
}
