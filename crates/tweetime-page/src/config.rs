//! Chart configuration.
//!
//! The band boundaries and axis range are hand-tuned presentation constants
//! describing one dataset's distribution. They are configuration, not
//! values derived from the series.

use serde::{Deserialize, Serialize};
use tweetime_models::{AxisRange, Band};

use crate::error::{PageError, Result};

/// Default chart title.
pub const DEFAULT_TITLE: &str = "Elon's time spent on tweeting in the past 5 years";

/// Default chart height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

/// Default style template.
pub const DEFAULT_TEMPLATE: &str = "ggplot2";

/// Lower bound of the visible y-axis. Sits slightly below zero so the
/// baseline is visible.
pub const DEFAULT_Y_MIN: f64 = -0.8;

/// Upper bound of the visible y-axis.
pub const DEFAULT_Y_MAX: f64 = 30.0;

/// Fixed presentation settings for the history chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub height: u32,
    pub template: String,
    /// Band highlighting the typical low-usage days.
    pub low_band: Band,
    /// Band highlighting the rare high-usage days.
    pub high_band: Band,
    pub y_axis_range: AxisRange,
}

impl ChartConfig {
    /// Checks that both bands are well formed and inside the y-axis range.
    pub fn validate(&self) -> Result<()> {
        let range = &self.y_axis_range;
        if !(range.min.is_finite() && range.max.is_finite() && range.min < range.max) {
            return Err(PageError::InvalidInput(format!(
                "y-axis range [{}, {}] is empty",
                range.min, range.max
            )));
        }

        for band in [&self.low_band, &self.high_band] {
            if !band.is_well_formed() {
                return Err(PageError::InvalidInput(format!(
                    "band {:?} is malformed: [{}, {}] opacity {}",
                    band.label, band.y0, band.y1, band.opacity
                )));
            }
            if !range.contains_band(band) {
                return Err(PageError::InvalidInput(format!(
                    "band {:?} [{}, {}] lies outside the y-axis range [{}, {}]",
                    band.label, band.y0, band.y1, range.min, range.max
                )));
            }
        }
        Ok(())
    }

    /// Bands in drawing order.
    pub fn bands(&self) -> Vec<Band> {
        vec![self.low_band.clone(), self.high_band.clone()]
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            x_title: tweetime_data::DATE_COLUMN.to_string(),
            y_title: tweetime_data::MINUTES_COLUMN.to_string(),
            height: DEFAULT_HEIGHT,
            template: DEFAULT_TEMPLATE.to_string(),
            low_band: Band::builder(DEFAULT_Y_MIN, 5.0, "Usage below 5 mins: 75% of the days")
                .color("navy")
                .opacity(0.2)
                .annotate_bottom()
                .build(),
            high_band: Band::builder(15.0, DEFAULT_Y_MAX, "Usage above 15 mins: 25 days")
                .color("purple")
                .opacity(0.1)
                .annotate_top()
                .build(),
            y_axis_range: AxisRange::new(DEFAULT_Y_MIN, DEFAULT_Y_MAX),
        }
    }
}
