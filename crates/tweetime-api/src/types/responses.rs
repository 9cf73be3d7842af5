//! Response DTOs for the API.

use serde::Serialize;
use tweetime_models::{ChartSpec, Panel};

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
    /// Number of days in the loaded history.
    pub days: usize,
    /// Number of ranked categories loaded.
    pub categories: usize,
}

/// Chart response.
#[derive(Debug, Clone, Serialize)]
pub struct ChartResponse {
    pub chart: ChartSpec,
}

/// Ranked panels response.
#[derive(Debug, Clone, Serialize)]
pub struct PanelListResponse {
    /// Section heading shown above the tabs.
    pub heading: String,
    /// Panels in ranking order.
    pub panels: Vec<Panel>,
    /// Total count.
    pub total: usize,
}
