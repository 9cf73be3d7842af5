//! Markdown rendering backed by pulldown-cmark.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

use super::TextRenderer;

/// CommonMark renderer with tables and strikethrough enabled.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        Self { options }
    }
}

impl TextRenderer for MarkdownRenderer {
    fn render_markdown(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, self.options);
        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }

    fn render_untrusted(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, self.options).filter_map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
            Event::Start(Tag::Link { .. } | Tag::Image { .. })
            | Event::End(TagEnd::Link | TagEnd::Image) => None,
            other => Some(other),
        });
        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
