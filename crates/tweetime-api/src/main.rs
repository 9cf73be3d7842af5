//! Tweetime display-session server binary.
//!
//! Start the server with:
//! ```bash
//! cargo run -p tweetime-api -- --data-dir data
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tweetime_api::{serve, AppState, ServerConfig};
use tweetime_data::Dataset;
use tweetime_page::ChartConfig;

/// Tweetime - how much time was spent tweeting, as a single web page
#[derive(Parser, Debug)]
#[command(name = "tweetime")]
#[command(about = "Serve the tweeting time-spending page", version)]
struct Args {
    /// Host to bind to
    #[arg(long, env = "TWEETIME_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(short, long, env = "TWEETIME_PORT", default_value_t = ServerConfig::DEFAULT_PORT)]
    port: u16,

    /// Directory holding time_spending_hist.csv and top5_busy_days.json
    #[arg(short, long, env = "TWEETIME_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// JSON file overriding the chart bands and y-axis range
    #[arg(long, env = "TWEETIME_CHART_CONFIG")]
    chart_config: Option<PathBuf>,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => "tweetime=info,tweetime_api=info,tweetime_data=info,tower_http=warn",
        1 => "tweetime=debug,tweetime_api=debug,tweetime_data=debug,tweetime_page=debug,tower_http=info",
        2 => "tweetime=trace,tweetime_api=trace,tweetime_data=trace,tweetime_page=trace,tower_http=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(filter))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = ServerConfig::new(args.host, args.port).with_data_dir(args.data_dir);
    if let Some(path) = args.chart_config {
        config = config.with_chart_config(path);
    }

    let dataset = match Dataset::load(&config.data_dir) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load dataset");
            return Err(e.into());
        }
    };

    let chart_config = match &config.chart_config {
        Some(path) => load_chart_config(path)?,
        None => ChartConfig::default(),
    };
    if let Err(e) = chart_config.validate() {
        tracing::error!(error = %e, "Invalid chart configuration");
        return Err(e.into());
    }

    let state = AppState::new(config.clone(), dataset).with_chart_config(chart_config);

    // Fail at startup rather than on the first session.
    state.layout()?;

    serve(config, state).await?;
    Ok(())
}

fn load_chart_config(path: &Path) -> Result<ChartConfig, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)?;
    let config: ChartConfig = serde_json::from_str(&data)?;
    tracing::info!(path = %path.display(), "Loaded chart configuration");
    Ok(config)
}
