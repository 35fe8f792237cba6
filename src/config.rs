//! Engine configuration.
//!
//! Hosts usually run with [`EditorConfig::default`]; a JSON config file can
//! override the storage key, the built-in sample document, and the markdown
//! transform flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Fixed storage key for the persisted document.
pub const STORAGE_KEY: &str = "md-editor-content";

/// Built-in sample shown on first launch, before anything is persisted.
pub const DEFAULT_DOCUMENT: &str = "# Welcome 👋\n\
This is a **simple markdown editor** with live preview.\n\
\n\
- Open the preview with the eye button on the right\n\
- The view splits on wide screens\n\
\n\
**Bold**, *Italic*, `Code`\n";

/// Flags for the markdown-to-HTML transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Enable GitHub-flavored constructs (tables, task lists, autolinks).
    pub gfm: bool,
    /// Render single newlines as hard `<br>` breaks.
    pub breaks: bool,
    /// Assign stable anchor identifiers to headings.
    pub header_ids: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            gfm: true,
            breaks: false,
            header_ids: true,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Key the document is persisted under.
    pub storage_key: String,
    /// Document substituted when nothing is persisted yet.
    pub default_text: String,
    /// Markdown transform flags.
    pub render: RenderOptions,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            default_text: DEFAULT_DOCUMENT.to_string(),
            render: RenderOptions::default(),
        }
    }
}

/// Load a config file, falling back to defaults when it doesn't exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<EditorConfig> {
    if !path.exists() {
        return Ok(EditorConfig::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

/// Save a config file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_config(path: &Path, config: &EditorConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, content).with_context(|| format!("Failed to write config {}", path.display()))
}
