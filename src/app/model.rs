use crate::editor::EditorBuffer;
use crate::stats::DocStats;

/// Preview visibility.
///
/// Two states, toggled unconditionally by explicit user action. While
/// `Collapsed` the render pipeline never runs; entering `Expanded` forces
/// one immediate render so the first reveal is never stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Collapsed,
    Expanded,
}

impl PreviewState {
    /// The opposite state.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

/// The complete editor-session state.
///
/// All state lives here - no global or scattered state. The buffer is the
/// single source of truth for content; stats and the cached preview HTML
/// are derived from it.
#[derive(Debug, Clone)]
pub struct Model {
    /// The document buffer and its selection
    pub buffer: EditorBuffer,
    /// Derived word/char/line counts, recomputed on every buffer change
    pub stats: DocStats,
    /// Preview visibility state
    pub preview: PreviewState,
    /// Sanitized preview HTML; present only while the preview is expanded
    preview_html: Option<String>,
}

impl Model {
    /// Create a model for a document, preview collapsed.
    pub fn new(text: &str) -> Self {
        Self {
            buffer: EditorBuffer::from_text(text),
            stats: DocStats::compute(text),
            preview: PreviewState::Collapsed,
            preview_html: None,
        }
    }

    /// The full document text.
    pub fn document_text(&self) -> String {
        self.buffer.text()
    }

    /// Whether the preview surface is attached (and the toggle control
    /// should show as pressed).
    pub const fn is_preview_expanded(&self) -> bool {
        matches!(self.preview, PreviewState::Expanded)
    }

    /// The cached sanitized preview HTML, if the preview is expanded.
    pub fn preview_html(&self) -> Option<&str> {
        self.preview_html.as_deref()
    }

    pub(super) fn set_preview_html(&mut self, html: String) {
        self.preview_html = Some(html);
    }

    pub(super) fn clear_preview_html(&mut self) {
        self.preview_html = None;
    }

    pub(super) fn refresh_stats(&mut self) {
        self.stats = DocStats::compute(&self.buffer.text());
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new("")
    }
}
