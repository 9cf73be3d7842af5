//! Display-session server for Tweetime.
//!
//! Serves the assembled page over HTTP. Every request to `/` is one display
//! session: the page is built from the startup datasets and rendered fresh.
//!
//! - `GET /` - the HTML page
//! - `GET /api/health` - liveness and uptime
//! - `GET /api/chart` - the chart spec as JSON
//! - `GET /api/panels` - the busiest-day panels as JSON
//!
//! # Example
//!
//! ```ignore
//! use tweetime_api::{serve, AppState, ServerConfig};
//! use tweetime_data::Dataset;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let dataset = Dataset::load(&config.data_dir)?;
//!     let state = AppState::new(config.clone(), dataset);
//!
//!     serve(config, state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use config::ServerConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
