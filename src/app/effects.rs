use crate::app::{Message, Model, Session};

impl Session {
    /// Run the side effects a message requires, after `update` has applied
    /// its pure transition.
    ///
    /// Buffer mutations save unconditionally and re-render while the
    /// preview is expanded; expanding the preview forces one immediate
    /// render. Nothing renders while collapsed.
    pub(super) fn handle_message_side_effects(&mut self, model: &mut Model, msg: &Message) {
        match msg {
            Message::SetText(_) | Message::Apply(_) => {
                let text = model.document_text();
                self.store.save(&text);
                if model.is_preview_expanded() {
                    model.set_preview_html(self.renderer.render_html(&text));
                }
            }
            Message::TogglePreview => {
                if model.is_preview_expanded() {
                    model.set_preview_html(self.renderer.render_html(&model.document_text()));
                }
            }
            Message::SetSelection(_) => {}
        }
    }
}
