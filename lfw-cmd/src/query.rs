//! Query implementations against the Firewatch backend.

use chrono::{Datelike, Local};
use lfw_api::{HttpClient, LandmarkSource, RasterSource, RiskSource};
use lfw_domain::raster::find_row;
use lfw_domain::risk::{classify_local_risk, classify_server_risk};
use lfw_domain::IndexType;
use log::info;

use crate::TOKEN_ENV;

fn client(base_url: &str) -> HttpClient {
    match std::env::var(TOKEN_ENV) {
        Ok(token) if !token.is_empty() => HttpClient::new(base_url).with_token(token),
        _ => HttpClient::new(base_url),
    }
}

/// Defaults for the optional year/month arguments.
fn period(year: Option<i32>, month: Option<u32>) -> (i32, u32) {
    let today = Local::now().date_naive();
    (
        year.unwrap_or_else(|| today.year()),
        month.unwrap_or_else(|| today.month()),
    )
}

/// List all landmarks.
pub async fn run_landmarks(base_url: &str, json: bool) -> anyhow::Result<()> {
    let landmarks = client(base_url).fetch_landmarks().await?;
    info!("fetched {} landmarks from {}", landmarks.len(), base_url);

    if json {
        println!("{}", serde_json::to_string_pretty(&landmarks)?);
        return Ok(());
    }

    println!("{:>6}  {:<30} {:<12} {}", "ID", "NAME", "PROVINCE", "COORDS");
    for lm in &landmarks {
        let coords = match lm.coordinate() {
            Some((lon, lat)) => format!("{:.4}, {:.4}", lon, lat),
            None => "-".to_string(),
        };
        println!(
            "{:>6}  {:<30} {:<12} {}",
            lm.id,
            lm.display_label(),
            lm.province,
            coords
        );
    }
    Ok(())
}

/// Fetch and print raster statistics, plus the derived local risk when
/// both bands are present.
pub async fn run_rasters(
    base_url: &str,
    id: i64,
    year: Option<i32>,
    month: Option<u32>,
    json: bool,
) -> anyhow::Result<()> {
    let (year, month) = period(year, month);
    let rows = client(base_url).fetch_rasters(id, year, month).await?;
    info!(
        "fetched {} raster rows for landmark {} @ {}-{:02}",
        rows.len(),
        id,
        year,
        month
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("no raster statistics for landmark {} @ {}-{:02}", id, year, month);
        return Ok(());
    }

    println!(
        "{:<6} {:>8} {:>8} {:>8} {:>8}",
        "INDEX", "MEAN", "MIN", "MAX", "STDDEV"
    );
    for row in &rows {
        println!(
            "{:<6} {:>8.3} {:>8.3} {:>8.3} {:>8.3}",
            row.index_type.as_str(),
            row.val_mean,
            row.val_min,
            row.val_max,
            row.val_stddev
        );
    }

    let local = classify_local_risk(
        find_row(&rows, IndexType::Ndvi),
        find_row(&rows, IndexType::Ndmi),
    );
    if let Some(local) = local {
        println!(
            "\nlocal spread estimate: {}% ({})",
            local.percentage,
            if local.is_safe { "safe" } else { "not safe" }
        );
    }
    Ok(())
}

/// Fetch and print the server risk assessment.
pub async fn run_risk(
    base_url: &str,
    id: i64,
    year: Option<i32>,
    month: Option<u32>,
    json: bool,
) -> anyhow::Result<()> {
    let (year, month) = period(year, month);
    let risk = client(base_url).fetch_risk(id, year, month).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&risk)?);
        return Ok(());
    }

    let level = classify_server_risk(&risk.risk_level_description, risk.risk_score);
    println!(
        "landmark {} @ {}-{:02}: score {:.2} ({})",
        risk.landmark_id, risk.year, risk.month, risk.risk_score, level.as_str()
    );
    if !risk.risk_level_description.is_empty() {
        println!("{}", risk.risk_level_description);
    }
    Ok(())
}
