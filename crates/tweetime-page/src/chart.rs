//! Chart builder.

use tracing::debug;
use tweetime_models::{series::is_chronological, ChartSpec, TimeSeriesPoint};

use crate::config::ChartConfig;
use crate::error::{PageError, Result};

/// Builds the history chart with the default presentation settings.
pub fn build_chart(points: &[TimeSeriesPoint]) -> Result<ChartSpec> {
    build_chart_with(points, &ChartConfig::default())
}

/// Builds a line chart over `points` with the two configured bands and the
/// fixed y-axis range.
///
/// Pure: the same input always yields an identical spec.
///
/// # Errors
/// `InvalidInput` if `points` is empty or not chronological, or if the
/// configuration puts a band outside the y-axis range.
pub fn build_chart_with(points: &[TimeSeriesPoint], config: &ChartConfig) -> Result<ChartSpec> {
    if points.is_empty() {
        return Err(PageError::InvalidInput(
            "cannot chart an empty time series".to_string(),
        ));
    }
    if !is_chronological(points) {
        return Err(PageError::InvalidInput(
            "time series is not in chronological order".to_string(),
        ));
    }
    config.validate()?;

    let spec = ChartSpec {
        title: config.title.clone(),
        x_title: config.x_title.clone(),
        y_title: config.y_title.clone(),
        height: config.height,
        template: config.template.clone(),
        points: points.to_vec(),
        bands: config.bands(),
        y_axis_range: config.y_axis_range,
    };

    debug!(
        points = spec.points.len(),
        bands = spec.bands.len(),
        "Built chart spec"
    );
    Ok(spec)
}
