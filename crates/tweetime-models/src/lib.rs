//! Core data models for Tweetime.
//!
//! This crate provides the fundamental data types shared by the loader,
//! the page assembly pipeline and the display-session server: the daily
//! time series, the ranked busiest-day groups, and the derived chart and
//! page layout descriptions.

pub mod builders;
pub mod chart;
pub mod layout;
pub mod ranked;
pub mod series;

// Re-export main types
pub use builders::BandBuilder;
pub use chart::{AxisRange, Band, BandPosition, ChartSpec};
pub use layout::{Block, PageLayout, Panel, QuotedBlock, Row, Section};
pub use ranked::RankedGroups;
pub use series::TimeSeriesPoint;
