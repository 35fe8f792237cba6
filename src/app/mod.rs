//! Editor session and main update cycle.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete editor-session state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`Session::dispatch`]: Update plus the message's side effects
//!
//! For every buffer-mutating message the cascade is strictly sequential:
//! buffer update, stats recompute, persistence save, then a render when the
//! preview is expanded. Everything runs synchronously on the caller's
//! thread.

mod effects;
mod input;
mod model;
mod update;

pub use input::{InputEvent, Routed, route_event};
pub use model::{Model, PreviewState};
pub use update::{Message, update};

use crate::config::EditorConfig;
use crate::persist::{DocumentStore, Storage};
use crate::render::{MarkdownRenderer, PreviewRenderer};

/// Owns the engine's external collaborators: the persistence adapter and
/// the preview renderer. The model stays plain data; the session applies
/// messages to it.
pub struct Session {
    store: DocumentStore,
    renderer: Box<dyn PreviewRenderer>,
    default_text: String,
}

impl Session {
    /// Create a session from a config and a storage backend.
    pub fn new(config: &EditorConfig, storage: Box<dyn Storage>) -> Self {
        Self {
            store: DocumentStore::new(storage, &config.storage_key),
            renderer: Box::new(MarkdownRenderer::new(config.render)),
            default_text: config.default_text.clone(),
        }
    }

    /// Replace the preview renderer (e.g. a host-provided pipeline).
    #[must_use]
    pub fn with_renderer(mut self, renderer: Box<dyn PreviewRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Build the initial model: the persisted document when present, else
    /// the built-in default. The preview starts collapsed.
    pub fn bootstrap(&self) -> Model {
        let text = self
            .store
            .load()
            .unwrap_or_else(|| self.default_text.clone());
        Model::new(&text)
    }

    /// Apply a message: the pure update, then its side effects.
    pub fn dispatch(&mut self, model: Model, msg: Message) -> Model {
        let mut model = update(model, msg.clone());
        self.handle_message_side_effects(&mut model, &msg);
        model
    }

    /// Route a host event and dispatch the resulting message, if any.
    ///
    /// The returned flag tells the host to suppress the platform's default
    /// handling (accelerator key combinations).
    pub fn handle_input(&mut self, model: Model, event: InputEvent) -> (Model, bool) {
        let routed = route_event(event);
        let prevent_default = routed.prevent_default;
        match routed.message {
            Some(msg) => (self.dispatch(model, msg), prevent_default),
            None => (model, prevent_default),
        }
    }
}
