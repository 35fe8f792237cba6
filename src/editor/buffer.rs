use ropey::Rope;

/// A contiguous selection range in the buffer, in char offsets.
///
/// Invariant: `start <= end <= buffer length`. A collapsed selection
/// (`start == end`) is a bare caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Zero-based char offset of the selection start.
    pub start: usize,
    /// Zero-based char offset one past the selection end.
    pub end: usize,
}

impl Selection {
    /// Create a collapsed selection (caret) at a char offset.
    pub const fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Whether the selection is collapsed to a caret.
    pub const fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// A text buffer backed by a rope data structure.
///
/// Owns the raw document text and the active selection. Formatting
/// primitives replace the selection or prefix the line containing it;
/// after every mutation the selection collapses to a caret just past the
/// inserted text.
///
/// The selection is `Option` on purpose: an absent selection is a distinct
/// state with documented fallbacks, not a caret at offset 0 in disguise.
#[derive(Debug, Clone)]
pub struct EditorBuffer {
    rope: Rope,
    selection: Option<Selection>,
}

impl EditorBuffer {
    /// Create a new buffer from a string, with no selection.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: None,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Buffer length in chars.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// The active selection, if any.
    pub const fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The text covered by the active selection (empty when absent or
    /// collapsed).
    pub fn selected_text(&self) -> String {
        self.selection.map_or_else(String::new, |sel| {
            self.rope.slice(sel.start..sel.end).to_string()
        })
    }

    /// Replace the whole buffer text (raw host input).
    ///
    /// An existing selection is clamped to the new text; the host reports
    /// caret moves separately.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        if let Some(sel) = self.selection {
            self.selection = Some(self.clamp(sel.start, sel.end));
        }
    }

    /// Set or clear the selection from host-reported offsets.
    ///
    /// Out-of-range offsets are clamped and a reversed pair is reordered;
    /// malformed selections are recovered, never surfaced.
    pub fn set_selection(&mut self, range: Option<(usize, usize)>) {
        self.selection = range.map(|(a, b)| self.clamp(a.min(b), a.max(b)));
    }

    /// Replace the current selection with `before + selected + after`, then
    /// collapse the selection immediately after the inserted `after`.
    ///
    /// An absent selection is treated as an empty selection at offset 0.
    pub fn replace_selection(&mut self, before: &str, after: &str) {
        let sel = self.selection.unwrap_or(Selection::caret(0));
        let selected = self.rope.slice(sel.start..sel.end).to_string();

        let selected_len = sel.end - sel.start;
        self.rope.remove(sel.start..sel.end);
        self.rope.insert(sel.start, before);
        self.rope.insert(sel.start + count_chars(before), &selected);
        self.rope
            .insert(sel.start + count_chars(before) + selected_len, after);

        let caret = sel.start + count_chars(before) + selected_len + count_chars(after);
        self.selection = Some(Selection::caret(caret));
    }

    /// Wrap the selection symmetrically, or with a distinct suffix.
    ///
    /// `surround("**", None)` wraps in bold markers; `suffix` defaults to
    /// `prefix`.
    pub fn surround(&mut self, prefix: &str, suffix: Option<&str>) {
        self.replace_selection(prefix, suffix.unwrap_or(prefix));
    }

    /// Insert `prefix` at the start of the line containing the selection
    /// start, independent of the selection's end.
    ///
    /// With no selection the insertion line is the one containing the end
    /// of the buffer. Line start = just after the nearest preceding
    /// newline, or offset 0 when there is none. The selection collapses
    /// just past the inserted prefix.
    pub fn insert_line_prefix(&mut self, prefix: &str) {
        let from = self
            .selection
            .map_or_else(|| self.rope.len_chars(), |sel| sel.start);
        let line_start = self.rope.line_to_char(self.rope.char_to_line(from));
        self.rope.insert(line_start, prefix);
        self.selection = Some(Selection::caret(line_start + count_chars(prefix)));
    }

    fn clamp(&self, start: usize, end: usize) -> Selection {
        let len = self.rope.len_chars();
        Selection {
            start: start.min(len),
            end: end.min(len),
        }
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

fn count_chars(s: &str) -> usize {
    s.chars().count()
}
