//! Administrative boundary records for the base map.

use serde::{Deserialize, Serialize};

/// One administrative boundary (province level) drawn under the markers.
///
/// Purely decorative context for the map; nothing selects or filters on
/// boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmBoundary {
    #[serde(default)]
    pub adm_code: String,
    #[serde(default)]
    pub adm_name: String,
    /// Boundary geometry; the backend sends either a GeoJSON object or a
    /// serialized string of one.
    #[serde(default)]
    pub geo_json: Option<serde_json::Value>,
    #[serde(default)]
    pub level: Option<i16>,
}

impl AdmBoundary {
    /// Parse the boundary geometry, if any.
    ///
    /// Mirrors [`crate::RasterStat::footprint`]: a string payload is
    /// parsed as GeoJSON, an inline object is re-serialized and parsed,
    /// and anything unparseable is logged and treated as absent so one
    /// bad row never takes the layer down.
    pub fn geometry(&self) -> Option<geojson::Geometry> {
        let raw = match &self.geo_json {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(value) => value.to_string(),
            None => return None,
        };
        match raw.parse::<geojson::GeoJson>() {
            Ok(geojson::GeoJson::Geometry(g)) => Some(g),
            Ok(_) => {
                log::warn!("boundary {}: geoJson is not a bare geometry", self.adm_code);
                None
            }
            Err(e) => {
                log::warn!("boundary {}: unparseable geoJson: {}", self.adm_code, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLYGON: &str =
        r#"{"type":"Polygon","coordinates":[[[126.0,37.0],[127.0,37.0],[127.0,38.0],[126.0,37.0]]]}"#;

    #[test]
    fn decodes_camel_case_fields() {
        let b: AdmBoundary = serde_json::from_str(
            r#"{"admCode":"11","admName":"Seoul","geoJson":null,"level":1}"#,
        )
        .unwrap();
        assert_eq!(b.adm_code, "11");
        assert_eq!(b.adm_name, "Seoul");
        assert_eq!(b.level, Some(1));
        assert_eq!(b.geometry(), None);
    }

    #[test]
    fn geometry_parses_inline_object() {
        let b: AdmBoundary = serde_json::from_str(&format!(
            r#"{{"admCode":"42","admName":"Gangwon","geoJson":{},"level":1}}"#,
            POLYGON
        ))
        .unwrap();
        assert!(b.geometry().is_some());
    }

    #[test]
    fn geometry_parses_string_payload() {
        let b: AdmBoundary = serde_json::from_str(&format!(
            r#"{{"admCode":"42","admName":"Gangwon","geoJson":{},"level":1}}"#,
            serde_json::to_string(POLYGON).unwrap()
        ))
        .unwrap();
        assert!(b.geometry().is_some());
    }

    #[test]
    fn broken_geometry_is_absent_not_fatal() {
        let b: AdmBoundary = serde_json::from_str(
            r#"{"admCode":"42","admName":"Gangwon","geoJson":"{broken","level":1}"#,
        )
        .unwrap();
        assert_eq!(b.geometry(), None);
    }
}
