//! Page assembly for the tweet time-spending page.
//!
//! The pipeline is a single pass over the startup datasets:
//!
//! ```text
//! Dataset ──► build_chart ────────────┐
//!        └──► format_ranked_groups ───┴──► compose_page ──► render_document
//! ```
//!
//! Rendering goes through two narrow capabilities, [`ChartRenderer`] and
//! [`TextRenderer`], so the composer never depends on a particular charting
//! or markdown library.
//!
//! # Example
//!
//! ```no_run
//! use tweetime_data::Dataset;
//! use tweetime_page::{assemble_page, render_document, ChartConfig, MarkdownRenderer,
//!     PageContent, PlotlyRenderer};
//!
//! let dataset = Dataset::load("data").unwrap();
//! let layout = assemble_page(&dataset, &PageContent::default(), &ChartConfig::default()).unwrap();
//! let html = render_document(&layout, &PlotlyRenderer::default(), &MarkdownRenderer::new());
//! ```

pub mod chart;
pub mod compose;
pub mod config;
pub mod content;
pub mod error;
pub mod pipeline;
pub mod ranked;
pub mod render;

pub use chart::{build_chart, build_chart_with};
pub use compose::compose_page;
pub use config::ChartConfig;
pub use content::PageContent;
pub use error::{PageError, Result};
pub use pipeline::assemble_page;
pub use ranked::format_ranked_groups;
pub use render::{
    render_document, ChartRenderer, MarkdownRenderer, PlotlyRenderer, TextRenderer,
};
