//! Markdown-to-sanitized-HTML preview pipeline.
//!
//! The pipeline composes two black-box capabilities behind the
//! [`PreviewRenderer`] seam: a GFM markdown transform (comrak) and an HTML
//! sanitizer (ammonia). Raw HTML passes through the markdown transform
//! untouched and the sanitizer strips everything script-capable: `<script>`
//! elements, inline event handlers, and `javascript:` URLs. Structural
//! HTML, including heading anchor ids, survives.
//!
//! Rendering runs only while the preview is expanded; the session never
//! invokes this module for a collapsed preview.

use comrak::Options;

use crate::config::RenderOptions;

/// Narrow interface over the markdown + sanitizer capabilities.
///
/// Swappable so hosts can bring their own pipeline and tests can observe
/// invocation counts.
pub trait PreviewRenderer {
    /// Transform markdown source into script-safe HTML.
    fn render_html(&self, source: &str) -> String;
}

/// The default renderer: comrak for GFM markdown, ammonia for
/// sanitization.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a renderer with the given transform options.
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn comrak_options(&self) -> Options {
        let mut options = Options::default();

        if self.options.gfm {
            options.extension.strikethrough = true;
            options.extension.table = true;
            options.extension.autolink = true;
            options.extension.tasklist = true;
        }
        if self.options.header_ids {
            options.extension.header_ids = Some(String::new());
        }
        // Single newlines stay soft breaks unless breaks is requested
        options.render.hardbreaks = self.options.breaks;
        // Raw HTML passes through here; the sanitizer owns script safety
        options.render.unsafe_ = true;

        options
    }

    fn sanitize(html: &str) -> String {
        // Default ammonia policy plus heading anchor ids, which comrak
        // emits for stable intra-document links.
        ammonia::Builder::default()
            .add_generic_attributes(["id"])
            .clean(html)
            .to_string()
    }
}

impl PreviewRenderer for MarkdownRenderer {
    fn render_html(&self, source: &str) -> String {
        let html = comrak::markdown_to_html(source, &self.comrak_options());
        let sanitized = Self::sanitize(&html);
        tracing::debug!(
            source_chars = source.chars().count(),
            html_bytes = sanitized.len(),
            "rendered preview"
        );
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str) -> String {
        MarkdownRenderer::default().render_html(source)
    }

    #[test]
    fn test_emphasis_renders_as_structural_html() {
        let html = render("**bold** and *italic*");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn test_gfm_table_renders_as_table_element() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_fenced_code_block_renders_as_pre_code() {
        let html = render("```\nlet x = 1;\n```");
        assert!(html.contains("<pre><code>"));
    }

    #[test]
    fn test_headings_keep_stable_anchor_ids() {
        let html = render("# Hello World");
        assert!(html.contains("id=\"hello-world\""));
    }

    #[test]
    fn test_single_newline_is_a_soft_break() {
        let html = render("line one\nline two");
        assert!(!html.contains("<br"));
    }

    #[test]
    fn test_breaks_option_forces_hard_breaks() {
        let renderer = MarkdownRenderer::new(RenderOptions {
            breaks: true,
            ..RenderOptions::default()
        });
        let html = renderer.render_html("line one\nline two");
        assert!(html.contains("<br"));
    }

    #[test]
    fn test_script_elements_are_stripped() {
        let html = render("hello <script>alert(1)</script> world");
        assert!(!html.contains("script"));
        assert!(!html.contains("alert"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_inline_event_handlers_are_stripped() {
        let html = render("<b onclick=\"evil()\">click</b>");
        assert!(html.contains("<b"));
        assert!(html.contains("click"));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn test_javascript_urls_are_stripped() {
        let html = render("[x](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains('x'));
    }

    #[test]
    fn test_benign_raw_html_survives_sanitization() {
        let html = render("a <em>kept</em> tag");
        assert!(html.contains("<em>kept</em>"));
    }
}
