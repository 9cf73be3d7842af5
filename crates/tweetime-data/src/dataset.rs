//! The pair of artifacts loaded at startup.

use std::path::Path;

use serde::Serialize;
use tracing::info;
use tweetime_models::{RankedGroups, TimeSeriesPoint};

use crate::error::Result;
use crate::ranked::load_ranked_groups;
use crate::series::load_time_series;

/// File name of the daily history inside a data directory.
pub const HISTORY_FILE: &str = "time_spending_hist.csv";

/// File name of the ranked busiest days inside a data directory.
pub const TOP_DAYS_FILE: &str = "top5_busy_days.json";

/// Immutable datasets shared by every display session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub series: Vec<TimeSeriesPoint>,
    pub groups: RankedGroups,
}

impl Dataset {
    /// Creates a dataset from already-loaded parts.
    pub fn new(series: Vec<TimeSeriesPoint>, groups: RankedGroups) -> Self {
        Self { series, groups }
    }

    /// Loads both artifacts from their default names under `data_dir`.
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        let series = load_time_series(data_dir.join(HISTORY_FILE))?;
        let groups = load_ranked_groups(data_dir.join(TOP_DAYS_FILE))?;

        info!(
            data_dir = %data_dir.display(),
            days = series.len(),
            categories = groups.len(),
            "Dataset ready"
        );
        Ok(Self { series, groups })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_dir() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(HISTORY_FILE),
            "Date (PST),Time Spent on Tweeting (mins)\n2020-01-01,2.0\n2020-01-02,6.0\n",
        )
        .unwrap();
        fs::write(dir.path().join(TOP_DAYS_FILE), r#"{"Busiest": ["day1"]}"#).unwrap();

        let dataset = Dataset::load(dir.path()).unwrap();
        assert_eq!(dataset.series.len(), 2);
        assert_eq!(dataset.groups.len(), 1);
    }

    #[test]
    fn test_load_missing_json() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(HISTORY_FILE),
            "Date (PST),Time Spent on Tweeting (mins)\n2020-01-01,2.0\n",
        )
        .unwrap();

        let err = Dataset::load(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::ResourceNotFound { .. }));
        assert!(err.path().ends_with(TOP_DAYS_FILE));
    }
}
