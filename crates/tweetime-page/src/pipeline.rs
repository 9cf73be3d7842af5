//! End-to-end page assembly for one display session.

use tracing::debug;
use tweetime_data::Dataset;
use tweetime_models::PageLayout;

use crate::chart::build_chart_with;
use crate::compose::compose_page;
use crate::config::ChartConfig;
use crate::content::PageContent;
use crate::error::Result;
use crate::ranked::format_ranked_groups;

/// Runs the chart builder, the ranked-list formatter and the composer over
/// the startup datasets. Fails without producing a partial layout.
pub fn assemble_page(
    dataset: &Dataset,
    content: &PageContent,
    chart_config: &ChartConfig,
) -> Result<PageLayout> {
    let chart = build_chart_with(&dataset.series, chart_config)?;
    let panels = format_ranked_groups(&dataset.groups)?;
    let layout = compose_page(content, chart, panels);

    debug!(tabs = layout.tab_count(), "Assembled page layout");
    Ok(layout)
}
