//! Markdown rendering for document bodies and formatted fields

use crate::settings::MarkdownSettings;
use pulldown_cmark::{Options, Parser, html};

/// Converts markdown text to HTML
///
/// Implementations may keep state between calls, so callers invoke [`Renderer::reset`]
/// before every formatted field.
pub trait Renderer {
    /// Render `text` to HTML
    fn render(&mut self, text: &str) -> String;

    /// Drop any state left from previous renders
    fn reset(&mut self);
}

/// [`Renderer`] backed by [`pulldown_cmark`]
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
    buffer: String,
}

impl MarkdownRenderer {
    /// Create new [`MarkdownRenderer`]
    #[must_use]
    pub fn new(settings: &MarkdownSettings) -> Self {
        Self {
            options: settings.options(),
            buffer: String::new(),
        }
    }
}

impl Renderer for MarkdownRenderer {
    /// # Example
    /// ```
    /// use yaml_metadata_reader::render::{MarkdownRenderer, Renderer};
    /// use yaml_metadata_reader::settings::MarkdownSettings;
    ///
    /// let mut renderer = MarkdownRenderer::new(&MarkdownSettings::default());
    /// assert_eq!(renderer.render("*hi*"), "<p><em>hi</em></p>\n");
    /// ```
    fn render(&mut self, text: &str) -> String {
        #[cfg(feature = "tracing")]
        tracing::trace!("Render {} bytes of markdown", text.len());

        self.buffer.clear();
        html::push_html(&mut self.buffer, Parser::new_ext(text, self.options));

        self.buffer.clone()
    }

    fn reset(&mut self) {
        self.buffer = String::new();
    }
}
