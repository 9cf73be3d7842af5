//! Loader for the precomputed artifacts behind the page.
//!
//! Two static files are read once at process start:
//! - a CSV history with one row per day (`Date (PST)`,
//!   `Time Spent on Tweeting (mins)`)
//! - a JSON object mapping a category label to its ranked entries
//!
//! # Example
//!
//! ```no_run
//! use tweetime_data::Dataset;
//!
//! let dataset = Dataset::load("data").unwrap();
//! println!("{} days loaded", dataset.series.len());
//! ```

pub mod dataset;
pub mod error;
pub mod ranked;
pub mod series;

pub use dataset::{Dataset, HISTORY_FILE, TOP_DAYS_FILE};
pub use error::{DataError, Result};
pub use ranked::load_ranked_groups;
pub use series::{load_time_series, DATE_COLUMN, DATE_FORMAT, MINUTES_COLUMN};
