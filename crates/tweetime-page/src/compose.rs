//! Page composer.

use tweetime_models::{Block, ChartSpec, PageLayout, Panel, Row, Section};

use crate::content::PageContent;

/// Lays out the page in fixed order: heading, a description/image row,
/// the chart, then a headed tab strip with one tab per panel.
///
/// The chart and panels are embedded unchanged.
pub fn compose_page(content: &PageContent, chart: ChartSpec, panels: Vec<Panel>) -> PageLayout {
    let row = Row::new(
        Block::Markdown {
            text: content.description.clone(),
            style: content.description_style.clone(),
        },
        Block::Image {
            src: content.image_url.clone(),
        },
    );

    PageLayout {
        session_title: content.session_title.clone(),
        title: content.title.clone(),
        row,
        chart,
        sections: vec![Section {
            heading: content.section_heading.clone(),
            panels,
        }],
    }
}
