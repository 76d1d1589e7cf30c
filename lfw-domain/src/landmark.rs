//! Landmark records.

use serde::{Deserialize, Serialize};

/// A named point of interest with fixed coordinates.
///
/// The authoritative collection is replaced wholesale on reload and is
/// never mutated client-side. Records arriving from the API can be
/// incomplete: a missing id decodes as 0 and missing text fields decode
/// as empty strings so that search and display never have to deal with
/// absent values. Coordinates stay optional because a landmark without a
/// position is still selectable and searchable; it is only skipped for
/// map placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Landmark {
    /// Display label for the search box: the name, or the stringified id
    /// when the name is empty.
    pub fn display_label(&self) -> String {
        if self.name.is_empty() {
            self.id.to_string()
        } else {
            self.name.clone()
        }
    }

    /// (longitude, latitude) when both are present.
    pub fn coordinate(&self) -> Option<(f64, f64)> {
        match (self.longitude, self.latitude) {
            (Some(lon), Some(lat)) => Some((lon, lat)),
            _ => None,
        }
    }
}
