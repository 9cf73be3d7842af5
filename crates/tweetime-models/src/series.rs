//! Daily time-spent series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of estimated tweeting time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Calendar day (PST).
    pub date: NaiveDate,

    /// Estimated minutes spent tweeting that day. Never negative.
    pub minutes_spent: f64,
}

impl TimeSeriesPoint {
    /// Creates a new point.
    pub fn new(date: NaiveDate, minutes_spent: f64) -> Self {
        Self {
            date,
            minutes_spent,
        }
    }

    /// Returns true if the minutes value is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.minutes_spent.is_finite() && self.minutes_spent >= 0.0
    }
}

/// Returns true if the points are in non-decreasing date order.
pub fn is_chronological(points: &[TimeSeriesPoint]) -> bool {
    points.windows(2).all(|w| w[0].date <= w[1].date)
}
