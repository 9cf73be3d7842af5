//! Chart specification types.
//!
//! A [`ChartSpec`] is a renderer-independent description of the line chart:
//! the series, the annotated horizontal bands and the visible y-axis range.
//! It is derived fresh for every render and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::series::TimeSeriesPoint;

/// Where a band's annotation sits relative to the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BandPosition {
    /// Annotation anchored at the lower edge.
    #[default]
    Bottom,
    /// Annotation anchored at the upper edge.
    Top,
}

impl BandPosition {
    /// Returns the position name used by chart renderers.
    pub fn as_str(&self) -> &'static str {
        match self {
            BandPosition::Bottom => "bottom",
            BandPosition::Top => "top",
        }
    }
}

/// A shaded horizontal region with a text annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Lower bound of the band.
    pub y0: f64,
    /// Upper bound of the band.
    pub y1: f64,
    /// Annotation text.
    pub label: String,
    /// Fill and annotation colour (any CSS colour).
    pub color: String,
    /// Fill opacity in `[0, 1]`.
    pub opacity: f64,
    /// Annotation anchor.
    #[serde(default)]
    pub position: BandPosition,
}

impl Band {
    /// Returns true if `y0 <= y1` and the opacity is in range.
    pub fn is_well_formed(&self) -> bool {
        self.y0.is_finite()
            && self.y1.is_finite()
            && self.y0 <= self.y1
            && (0.0..=1.0).contains(&self.opacity)
    }
}

/// Inclusive visible range of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Creates a new range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if the whole band lies inside this range.
    pub fn contains_band(&self, band: &Band) -> bool {
        self.min <= band.y0 && self.max >= band.y1
    }

    /// Returns the range as a `[min, max]` pair.
    pub fn as_array(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

/// Renderer-independent line chart description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart title.
    pub title: String,
    /// X axis title.
    pub x_title: String,
    /// Y axis title.
    pub y_title: String,
    /// Rendered height in pixels.
    pub height: u32,
    /// Renderer style template name.
    pub template: String,
    /// The plotted series, in source order.
    pub points: Vec<TimeSeriesPoint>,
    /// Annotated bands, in drawing order.
    pub bands: Vec<Band>,
    /// Fixed visible y-axis range.
    pub y_axis_range: AxisRange,
}

impl ChartSpec {
    /// Returns true if the y-axis range contains every band.
    pub fn range_covers_bands(&self) -> bool {
        self.bands
            .iter()
            .all(|band| self.y_axis_range.contains_band(band))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn band(y0: f64, y1: f64) -> Band {
        Band {
            y0,
            y1,
            label: "band".into(),
            color: "navy".into(),
            opacity: 0.2,
            position: BandPosition::Bottom,
        }
    }

    #[test]
    fn test_band_well_formed() {
        assert!(band(-0.8, 5.0).is_well_formed());
        assert!(band(5.0, 5.0).is_well_formed());
        assert!(!band(6.0, 5.0).is_well_formed());

        let mut opaque = band(0.0, 1.0);
        opaque.opacity = 1.5;
        assert!(!opaque.is_well_formed());
    }

    #[test]
    fn test_axis_range_contains_band() {
        let range = AxisRange::new(-0.8, 30.0);
        assert!(range.contains_band(&band(-0.8, 5.0)));
        assert!(range.contains_band(&band(15.0, 30.0)));
        assert!(!range.contains_band(&band(-1.0, 5.0)));
        assert!(!range.contains_band(&band(15.0, 31.0)));
    }

    #[test]
    fn test_band_position_serialization() {
        assert_eq!(BandPosition::default(), BandPosition::Bottom);
        assert_eq!(
            serde_json::to_value(BandPosition::Top).unwrap(),
            serde_json::json!("top")
        );
        assert_eq!(BandPosition::Top.as_str(), "top");
    }

    #[test]
    fn test_range_covers_bands() {
        let d = |n| NaiveDate::from_ymd_opt(2021, 3, n).unwrap();
        let spec = ChartSpec {
            title: String::new(),
            x_title: String::new(),
            y_title: String::new(),
            height: 600,
            template: "ggplot2".into(),
            points: vec![
                TimeSeriesPoint::new(d(1), 1.0),
                TimeSeriesPoint::new(d(2), 9.5),
                TimeSeriesPoint::new(d(3), 4.0),
            ],
            bands: vec![band(0.0, 5.0)],
            y_axis_range: AxisRange::new(-0.8, 30.0),
        };

        assert!(spec.range_covers_bands());

        let mut outside = spec.clone();
        outside.bands.push(band(25.0, 35.0));
        assert!(!outside.range_covers_bands());
    }
}
