//! Reqwest-backed implementation of the source traits.
//!
//! Works both natively (CLI, via tokio) and under wasm (dashboard, via
//! the browser's fetch). The bearer credential, when present, is attached
//! to every request.

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::sources::{BoundarySource, LandmarkSource, RasterSource, RiskSource};
use lfw_domain::{AdmBoundary, Landmark, RasterStat, RiskAssessment};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// HTTP client for the landmark backend.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a client for the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach a bearer credential to every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.get(&url).query(query);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        // The envelope's success flag is authoritative, not the HTTP
        // status, so the body is decoded unconditionally.
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            log::warn!("failed to decode envelope from {}: {}", path, e);
            ApiError::Decode(e.to_string())
        })?;
        envelope.into_result()
    }
}

impl LandmarkSource for HttpClient {
    async fn fetch_landmarks(&self) -> Result<Vec<Landmark>, ApiError> {
        let collection: geojson::FeatureCollection =
            self.get_envelope("/api/landmarks", &[]).await?;
        Ok(collection
            .features
            .iter()
            .map(landmark_from_feature)
            .collect())
    }
}

impl BoundarySource for HttpClient {
    async fn fetch_boundaries(&self) -> Result<Vec<AdmBoundary>, ApiError> {
        self.get_envelope("/api/boundaries", &[]).await
    }
}

impl RasterSource for HttpClient {
    async fn fetch_rasters(
        &self,
        landmark_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<RasterStat>, ApiError> {
        self.get_envelope(
            &format!("/api/landmarks/{}/rasters", landmark_id),
            &[("year", year.to_string()), ("month", month.to_string())],
        )
        .await
    }
}

impl RiskSource for HttpClient {
    async fn fetch_risk(
        &self,
        landmark_id: i64,
        year: i32,
        month: u32,
    ) -> Result<RiskAssessment, ApiError> {
        self.get_envelope(
            &format!("/api/landmarks/{}/risk", landmark_id),
            &[("year", year.to_string()), ("month", month.to_string())],
        )
        .await
    }
}

/// Convert one GeoJSON feature from the landmark endpoint into a
/// [`Landmark`].
///
/// Feature ids arrive as `"landmark.7"` (layer-qualified); the numeric
/// tail is extracted and anything unparsable falls back to a properties
/// `id` and finally to 0. Coordinates come from the Point geometry in
/// (lon, lat) order, with `latitude`/`longitude` properties as a
/// fallback for features that lost their geometry.
pub fn landmark_from_feature(feature: &geojson::Feature) -> Landmark {
    let id = feature_id(feature)
        .or_else(|| prop_i64(feature, "id"))
        .unwrap_or(0);

    let (longitude, latitude) = match feature.geometry.as_ref().map(|g| &g.value) {
        Some(geojson::Value::Point(coords)) => {
            (coords.first().copied(), coords.get(1).copied())
        }
        _ => (prop_f64(feature, "longitude"), prop_f64(feature, "latitude")),
    };

    Landmark {
        id,
        name: prop_str(feature, "name"),
        address: prop_str(feature, "address"),
        province: prop_str(feature, "province"),
        latitude,
        longitude,
    }
}

fn feature_id(feature: &geojson::Feature) -> Option<i64> {
    match &feature.id {
        Some(geojson::feature::Id::Number(n)) => n.as_i64(),
        Some(geojson::feature::Id::String(s)) => s.rsplit('.').next()?.parse().ok(),
        None => None,
    }
}

fn prop_str(feature: &geojson::Feature, key: &str) -> String {
    feature
        .property(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

fn prop_i64(feature: &geojson::Feature, key: &str) -> Option<i64> {
    feature.property(key).and_then(|v| v.as_i64())
}

fn prop_f64(feature: &geojson::Feature, key: &str) -> Option<f64> {
    feature.property(key).and_then(|v| v.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(json: &str) -> geojson::Feature {
        json.parse::<geojson::GeoJson>()
            .ok()
            .and_then(|g| match g {
                geojson::GeoJson::Feature(f) => Some(f),
                _ => None,
            })
            .expect("test fixture should be a feature")
    }

    #[test]
    fn parses_layer_qualified_feature_id() {
        let f = feature(
            r#"{"type":"Feature","id":"landmark.7",
                "geometry":{"type":"Point","coordinates":[127.0,37.5]},
                "properties":{"name":"Test Peak","address":"somewhere","province":"Gangwon"}}"#,
        );
        let lm = landmark_from_feature(&f);
        assert_eq!(lm.id, 7);
        assert_eq!(lm.name, "Test Peak");
        assert_eq!(lm.longitude, Some(127.0));
        assert_eq!(lm.latitude, Some(37.5));
    }

    #[test]
    fn unparsable_id_falls_back_to_property_then_zero() {
        let f = feature(
            r#"{"type":"Feature","id":"landmark.x",
                "geometry":{"type":"Point","coordinates":[1.0,2.0]},
                "properties":{"id":9,"name":"A"}}"#,
        );
        assert_eq!(landmark_from_feature(&f).id, 9);

        let f = feature(
            r#"{"type":"Feature","id":"garbage",
                "geometry":{"type":"Point","coordinates":[1.0,2.0]},
                "properties":{"name":"B"}}"#,
        );
        assert_eq!(landmark_from_feature(&f).id, 0);
    }

    #[test]
    fn missing_geometry_yields_no_coordinates() {
        let f = feature(
            r#"{"type":"Feature","id":"landmark.3","geometry":null,
                "properties":{"name":"No Geom"}}"#,
        );
        let lm = landmark_from_feature(&f);
        assert_eq!(lm.coordinate(), None);
    }

    #[test]
    fn coordinate_properties_back_fill_missing_geometry() {
        let f = feature(
            r#"{"type":"Feature","id":"landmark.4","geometry":null,
                "properties":{"name":"Props","latitude":37.1,"longitude":126.9}}"#,
        );
        let lm = landmark_from_feature(&f);
        assert_eq!(lm.coordinate(), Some((126.9, 37.1)));
    }

    // reqwest refuses relative URLs outright, so a client built with an
    // empty base can never reach the network. Hosts must pass an
    // absolute origin (the dashboard uses window.location.origin).
    #[tokio::test]
    async fn relative_base_url_is_a_transport_error() {
        let client = HttpClient::new("");
        match client.fetch_rasters(5, 2024, 3).await {
            Err(ApiError::Transport(_)) => {}
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[test]
    fn boundary_envelope_decodes() {
        let body = r#"{"success":true,"data":[
            {"admCode":"42","admName":"Gangwon",
             "geoJson":{"type":"Polygon","coordinates":[[[126.0,37.0],[127.0,37.0],[127.0,38.0],[126.0,37.0]]]},
             "level":1}
        ],"error":null}"#;
        let env: Envelope<Vec<AdmBoundary>> = serde_json::from_str(body).unwrap();
        let boundaries = env.into_result().unwrap();
        assert_eq!(boundaries.len(), 1);
        assert_eq!(boundaries[0].adm_name, "Gangwon");
        assert!(boundaries[0].geometry().is_some());
    }

    #[test]
    fn landmark_envelope_decodes_feature_collection() {
        let body = r#"{"success":true,"data":{"type":"FeatureCollection","features":[
            {"type":"Feature","id":"landmark.1",
             "geometry":{"type":"Point","coordinates":[127.0,37.5]},
             "properties":{"name":"Peak","province":"Seoul"}}
        ]},"error":null}"#;
        let env: Envelope<geojson::FeatureCollection> = serde_json::from_str(body).unwrap();
        let collection = env.into_result().unwrap();
        let landmarks: Vec<_> = collection.features.iter().map(landmark_from_feature).collect();
        assert_eq!(landmarks.len(), 1);
        assert_eq!(landmarks[0].id, 1);
        assert_eq!(landmarks[0].province, "Seoul");
    }
}
