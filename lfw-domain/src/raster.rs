//! Raster statistic records for vegetation and moisture indices.

use serde::{Deserialize, Serialize};

/// Remote-sensing index bands published by the raster backend.
///
/// Index values are conventionally bounded to [-1, 1], though the model
/// tolerates out-of-range aggregates (the risk classifier clamps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexType {
    #[serde(rename = "NDVI")]
    Ndvi,
    #[serde(rename = "NDMI")]
    Ndmi,
}

impl IndexType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexType::Ndvi => "NDVI",
            IndexType::Ndmi => "NDMI",
        }
    }
}

impl std::fmt::Display for IndexType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate statistics of one index over a landmark's footprint for one
/// month. At most one row exists per (landmark, index, year, month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterStat {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub landmark_id: i64,
    pub index_type: IndexType,
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub s3_path: Option<String>,
    pub val_mean: f64,
    pub val_min: f64,
    pub val_max: f64,
    pub val_stddev: f64,
    /// Footprint polygon as a GeoJSON string, when the backend sends one.
    #[serde(default)]
    pub geom_json: Option<String>,
    /// Footprint polygon as an inline GeoJSON object (alternate shape).
    #[serde(default)]
    pub geom: Option<serde_json::Value>,
}

impl RasterStat {
    /// Parse the spatial footprint, if any.
    ///
    /// The backend sends the buffer polygon either inline (`geom`) or as
    /// a serialized string (`geom_json`). Unparseable geometry is logged
    /// and treated as absent so that rendering never trips over it.
    pub fn footprint(&self) -> Option<geojson::Geometry> {
        let raw = match (&self.geom, &self.geom_json) {
            (Some(value), _) => value.to_string(),
            (None, Some(s)) => s.clone(),
            (None, None) => return None,
        };
        match raw.parse::<geojson::GeoJson>() {
            Ok(geojson::GeoJson::Geometry(g)) => Some(g),
            Ok(_) => {
                log::warn!(
                    "raster {:?}/{}-{:02}: footprint is not a bare geometry",
                    self.index_type,
                    self.year,
                    self.month
                );
                None
            }
            Err(e) => {
                log::warn!(
                    "raster {:?}/{}-{:02}: unparseable footprint: {}",
                    self.index_type,
                    self.year,
                    self.month,
                    e
                );
                None
            }
        }
    }
}

/// Find the row for a given index type, if present.
pub fn find_row<'a>(rows: &'a [RasterStat], index: IndexType) -> Option<&'a RasterStat> {
    rows.iter().find(|r| r.index_type == index)
}
