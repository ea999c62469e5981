use crate::trigger::ViewMode;

/// The two things the editor can show in its main panel: the live render
/// surface or a read-only code display.
pub trait DisplaySurface {
    fn show_render_surface(&mut self);
    fn show_code(&mut self, code: &str);
}

/// Headless surface that records what would be visible.
#[derive(Debug, Clone, Default)]
pub struct TextSurface {
    visible: Option<ViewMode>,
    code: String,
    code_updates: usize,
}

impl TextSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What was shown last; `None` before the first call.
    #[must_use]
    pub fn visible(&self) -> Option<ViewMode> {
        self.visible
    }

    /// Text currently in the code display.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// How many times the code display was filled.
    #[must_use]
    pub fn code_updates(&self) -> usize {
        self.code_updates
    }
}

impl DisplaySurface for TextSurface {
    fn show_render_surface(&mut self) {
        self.visible = Some(ViewMode::Preview);
    }

    fn show_code(&mut self, code: &str) {
        self.code.clear();
        self.code.push_str(code);
        self.code_updates += 1;
        self.visible = Some(ViewMode::CodeView);
    }
}
