//! Application state shared across handlers.

use std::sync::Arc;

use tweetime_data::Dataset;
use tweetime_models::PageLayout;
use tweetime_page::{
    assemble_page, render_document, ChartConfig, ChartRenderer, MarkdownRenderer, PageContent,
    PlotlyRenderer, Result, TextRenderer,
};

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// Everything here is loaded once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The two startup datasets.
    pub dataset: Arc<Dataset>,
    /// Static page text.
    pub content: Arc<PageContent>,
    /// Chart bands and axis settings.
    pub chart_config: Arc<ChartConfig>,
    /// Chart rendering capability.
    pub chart_renderer: Arc<dyn ChartRenderer>,
    /// Markdown rendering capability.
    pub text_renderer: Arc<dyn TextRenderer>,
}

impl AppState {
    /// Creates state with the default content, chart settings and renderers.
    pub fn new(config: ServerConfig, dataset: Dataset) -> Self {
        Self {
            config: Arc::new(config),
            dataset: Arc::new(dataset),
            content: Arc::new(PageContent::default()),
            chart_config: Arc::new(ChartConfig::default()),
            chart_renderer: Arc::new(PlotlyRenderer::default()),
            text_renderer: Arc::new(MarkdownRenderer::new()),
        }
    }

    /// Replaces the chart settings.
    pub fn with_chart_config(mut self, chart_config: ChartConfig) -> Self {
        self.chart_config = Arc::new(chart_config);
        self
    }

    /// Replaces the page text.
    pub fn with_content(mut self, content: PageContent) -> Self {
        self.content = Arc::new(content);
        self
    }

    /// Replaces the rendering capabilities.
    pub fn with_renderers(
        mut self,
        chart_renderer: Arc<dyn ChartRenderer>,
        text_renderer: Arc<dyn TextRenderer>,
    ) -> Self {
        self.chart_renderer = chart_renderer;
        self.text_renderer = text_renderer;
        self
    }

    /// Runs the assembly pipeline for one display session.
    pub fn layout(&self) -> Result<PageLayout> {
        assemble_page(&self.dataset, &self.content, &self.chart_config)
    }

    /// Assembles and renders the page for one display session.
    pub fn render_page(&self) -> Result<String> {
        let layout = self.layout()?;
        Ok(render_document(
            &layout,
            self.chart_renderer.as_ref(),
            self.text_renderer.as_ref(),
        ))
    }
}
