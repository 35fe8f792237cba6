//! The formatting operator catalog.
//!
//! A fixed set of named operations, each expressed purely in terms of the
//! buffer primitives in [`crate::editor`]. Toolbar buttons declare an
//! operation name; unknown names parse to `None` and are silently ignored.

use crate::editor::EditorBuffer;

/// Markdown block inserted by [`FormatAction::Table`].
const TABLE_SNIPPET: &str = "\n| Column | Column |\n|---|---|\n| A | B |\n";

/// A formatting operation applicable to the buffer at its selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatAction {
    /// Wrap the selection in `**` markers.
    Bold,
    /// Wrap the selection in `*` markers.
    Italic,
    /// Prefix the current line with `# `.
    Heading,
    /// Prefix the current line with `- `.
    ListItem,
    /// Wrap the selection as `[selection](https://)`.
    Link,
    /// Wrap the selection in fenced code block markers.
    CodeBlock,
    /// Insert a starter table block at the caret.
    Table,
}

impl FormatAction {
    /// Parse a declared operation name; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "bold" => Some(Self::Bold),
            "italic" => Some(Self::Italic),
            "heading" => Some(Self::Heading),
            "list-item" => Some(Self::ListItem),
            "link" => Some(Self::Link),
            "code-block" => Some(Self::CodeBlock),
            "table" => Some(Self::Table),
            _ => None,
        }
    }

    /// Apply the operation to the buffer.
    pub fn apply(self, buffer: &mut EditorBuffer) {
        match self {
            Self::Bold => buffer.surround("**", None),
            Self::Italic => buffer.surround("*", None),
            Self::Heading => buffer.insert_line_prefix("# "),
            Self::ListItem => buffer.insert_line_prefix("- "),
            Self::Link => buffer.replace_selection("[", "](https://)"),
            Self::CodeBlock => buffer.replace_selection("\n```\n", "\n```\n"),
            // The table is a literal block at the caret; it consumes no
            // selection text, so the whole snippet goes in as the prefix.
            Self::Table => buffer.replace_selection(TABLE_SNIPPET, ""),
        }
    }
}
