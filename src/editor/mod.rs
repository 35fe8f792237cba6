//! Buffer and selection model.
//!
//! Provides a rope-backed text buffer with selection management; all
//! mutation is selection-relative, designed for integration into the TEA
//! architecture.

mod buffer;

pub use buffer::{EditorBuffer, Selection};
