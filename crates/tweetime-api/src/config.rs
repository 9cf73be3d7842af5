//! Server configuration.

use std::path::PathBuf;
use std::time::Instant;

/// Display-session server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Directory holding the two static artifacts.
    pub data_dir: PathBuf,
    /// Optional JSON file overriding the chart bands and axis range.
    pub chart_config: Option<PathBuf>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl ServerConfig {
    /// Default port of the published page.
    pub const DEFAULT_PORT: u16 = 9999;

    /// Creates a new configuration with the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Sets the data directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Sets the chart configuration file.
    pub fn with_chart_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.chart_config = Some(path.into());
        self
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: Self::DEFAULT_PORT,
            data_dir: PathBuf::from("data"),
            chart_config: None,
            start_time: Instant::now(),
        }
    }
}
