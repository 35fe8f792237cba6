use crate::app::Model;
use crate::format::FormatAction;

/// All events and actions the engine can process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Replace the buffer with raw host input (every keystroke lands here)
    SetText(String),
    /// Host-reported selection offsets; `None` clears the selection
    SetSelection(Option<(usize, usize)>),
    /// Apply a formatting operation at the current selection
    Apply(FormatAction),
    /// Flip preview visibility
    TogglePreview,
}

impl Message {
    /// Whether this message mutates the document and must run the full
    /// recompute cascade (stats, save, conditional render).
    pub const fn mutates_document(&self) -> bool {
        matches!(self, Self::SetText(_) | Self::Apply(_))
    }
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function; persistence and
/// rendering run afterwards in the session's effects layer.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::SetText(text) => {
            model.buffer.set_text(&text);
            model.refresh_stats();
        }
        Message::SetSelection(range) => {
            model.buffer.set_selection(range);
        }
        Message::Apply(action) => {
            action.apply(&mut model.buffer);
            model.refresh_stats();
        }
        Message::TogglePreview => {
            model.preview = model.preview.toggled();
            if !model.is_preview_expanded() {
                // Stale HTML is unobservable once collapsed
                model.clear_preview_html();
            }
        }
    }
    model
}
