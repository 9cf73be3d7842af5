//! Rendering capabilities.
//!
//! The composer produces plain data; these traits turn that data into
//! embeddable markup. Swapping the charting or markdown library means
//! providing another implementation, nothing else changes.

pub mod html;
pub mod markdown;
pub mod plotly;

use tweetime_models::ChartSpec;

pub use html::{escape_html, render_document};
pub use markdown::MarkdownRenderer;
pub use plotly::PlotlyRenderer;

/// Renders a chart spec to embeddable HTML.
pub trait ChartRenderer: Send + Sync {
    /// Markup for the chart body.
    fn render_chart(&self, spec: &ChartSpec) -> String;

    /// Markup that must appear in the document head (scripts, styles).
    fn head_markup(&self) -> String {
        String::new()
    }
}

/// Renders a markdown text block to embeddable HTML.
pub trait TextRenderer: Send + Sync {
    /// Renders trusted page text; raw HTML passes through.
    fn render_markdown(&self, text: &str) -> String;

    /// Renders data-sourced text. Raw HTML is shown as text and links are
    /// not followable.
    fn render_untrusted(&self, text: &str) -> String;
}
