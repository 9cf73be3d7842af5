//! Builder patterns for complex types.

use crate::chart::{Band, BandPosition};

/// Builder for creating Band instances with a fluent API.
#[derive(Debug, Clone)]
pub struct BandBuilder {
    y0: f64,
    y1: f64,
    label: String,
    color: Option<String>,
    opacity: Option<f64>,
    position: BandPosition,
}

impl BandBuilder {
    /// Default fill colour when none is set.
    pub const DEFAULT_COLOR: &'static str = "gray";

    /// Default fill opacity when none is set.
    pub const DEFAULT_OPACITY: f64 = 0.2;

    /// Creates a new BandBuilder with required fields.
    pub fn new(y0: f64, y1: f64, label: impl Into<String>) -> Self {
        Self {
            y0,
            y1,
            label: label.into(),
            color: None,
            opacity: None,
            position: BandPosition::default(),
        }
    }

    /// Sets the fill colour.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the fill opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Anchors the annotation at the top edge.
    pub fn annotate_top(mut self) -> Self {
        self.position = BandPosition::Top;
        self
    }

    /// Anchors the annotation at the bottom edge.
    pub fn annotate_bottom(mut self) -> Self {
        self.position = BandPosition::Bottom;
        self
    }

    /// Builds the Band.
    pub fn build(self) -> Band {
        Band {
            y0: self.y0,
            y1: self.y1,
            label: self.label,
            color: self
                .color
                .unwrap_or_else(|| Self::DEFAULT_COLOR.to_string()),
            opacity: self.opacity.unwrap_or(Self::DEFAULT_OPACITY),
            position: self.position,
        }
    }
}

/// Convenience methods on Band for creating builders.
impl Band {
    /// Creates a builder for a new band.
    pub fn builder(y0: f64, y1: f64, label: impl Into<String>) -> BandBuilder {
        BandBuilder::new(y0, y1, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_builder_defaults() {
        let band = Band::builder(0.0, 5.0, "Low").build();

        assert_eq!(band.y0, 0.0);
        assert_eq!(band.y1, 5.0);
        assert_eq!(band.label, "Low");
        assert_eq!(band.color, "gray");
        assert_eq!(band.opacity, 0.2);
        assert_eq!(band.position, BandPosition::Bottom);
    }

    #[test]
    fn test_band_builder_full() {
        let band = Band::builder(15.0, 30.0, "High")
            .color("purple")
            .opacity(0.1)
            .annotate_top()
            .build();

        assert_eq!(band.color, "purple");
        assert_eq!(band.opacity, 0.1);
        assert_eq!(band.position, BandPosition::Top);
    }
}
