//! Command implementations for the Landmark Firewatch CLI.
//!
//! Provides subcommands for querying the Firewatch backend: landmark
//! listing, raster statistics and risk assessments. The same API client
//! the dashboard uses runs natively here.

use clap::Subcommand;

pub mod query;

/// Environment variable holding the bearer credential for the backend.
pub const TOKEN_ENV: &str = "LFW_TOKEN";

#[derive(Subcommand)]
pub enum Command {
    /// List all landmarks known to the backend
    Landmarks {
        /// Backend base URL
        #[arg(short, long, default_value = "http://localhost:8080")]
        base_url: String,

        /// Emit raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Fetch NDVI/NDMI raster statistics for one landmark-month
    Rasters {
        /// Landmark id
        #[arg(short, long)]
        id: i64,

        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,

        /// Backend base URL
        #[arg(short, long, default_value = "http://localhost:8080")]
        base_url: String,

        /// Emit raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Fetch the wildfire risk assessment for one landmark-month
    Risk {
        /// Landmark id
        #[arg(short, long)]
        id: i64,

        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,

        /// Backend base URL
        #[arg(short, long, default_value = "http://localhost:8080")]
        base_url: String,

        /// Emit raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Landmarks { base_url, json } => query::run_landmarks(&base_url, json).await,
        Command::Rasters {
            id,
            year,
            month,
            base_url,
            json,
        } => query::run_rasters(&base_url, id, year, month, json).await,
        Command::Risk {
            id,
            year,
            month,
            base_url,
            json,
        } => query::run_risk(&base_url, id, year, month, json).await,
    }
}
