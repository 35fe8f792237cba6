// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. format::FormatAction)
    clippy::module_name_repetitions
)]

//! # Markpad
//!
//! An embeddable markdown editor engine with sanitized live preview.
//!
//! Markpad owns the editing logic of a markdown editing surface:
//! - Selection-relative formatting operations (bold, lists, links, ...)
//! - A markdown-to-sanitized-HTML preview pipeline, gated by visibility
//! - Derived document statistics (words, chars, lines)
//! - Best-effort persistence of the buffer under a fixed key
//!
//! The page shell, the markdown parser internals, and the sanitizer
//! internals are external collaborators; the engine consumes the latter two
//! through narrow interfaces and stays host-toolkit agnostic.
//!
//! ## Architecture
//!
//! Markpad uses The Elm Architecture (TEA) pattern:
//! - **Model**: The complete editor-session state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **Effects**: Persistence and rendering, run after each update
//!
//! ## Modules
//!
//! - [`app`]: Session, messages, reducer, and input routing
//! - [`editor`]: Buffer and selection model
//! - [`format`]: The formatting operator catalog
//! - [`render`]: Markdown-to-sanitized-HTML pipeline
//! - [`stats`]: Document statistics
//! - [`persist`]: Storage backends and the fixed-key document store
//! - [`config`]: Engine configuration

pub mod app;
pub mod config;
pub mod editor;
pub mod format;
pub mod persist;
pub mod render;
pub mod stats;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{InputEvent, Message, Model, PreviewState, Session, update};
    pub use crate::editor::{EditorBuffer, Selection};
    pub use crate::format::FormatAction;
    pub use crate::stats::DocStats;
}
