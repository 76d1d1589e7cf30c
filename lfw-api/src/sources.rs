//! Async source contracts consumed by the fetch pipelines.
//!
//! The orchestrator in `lfw-state` is generic over these traits so tests
//! can script responses and resolution order without a network.

use crate::error::ApiError;
use lfw_domain::{AdmBoundary, Landmark, RasterStat, RiskAssessment};

/// Supplies the full landmark collection.
#[allow(async_fn_in_trait)]
pub trait LandmarkSource {
    async fn fetch_landmarks(&self) -> Result<Vec<Landmark>, ApiError>;
}

/// Supplies the administrative boundaries drawn under the markers.
#[allow(async_fn_in_trait)]
pub trait BoundarySource {
    async fn fetch_boundaries(&self) -> Result<Vec<AdmBoundary>, ApiError>;
}

/// Supplies raster statistic rows for one (landmark, year, month).
///
/// A successful fetch returns zero or more rows, at most one per index
/// type.
#[allow(async_fn_in_trait)]
pub trait RasterSource {
    async fn fetch_rasters(
        &self,
        landmark_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<RasterStat>, ApiError>;
}

/// Supplies the server-computed risk for one (landmark, year, month).
#[allow(async_fn_in_trait)]
pub trait RiskSource {
    async fn fetch_risk(
        &self,
        landmark_id: i64,
        year: i32,
        month: u32,
    ) -> Result<RiskAssessment, ApiError>;
}
