//! Pure translation of dashboard state into map commands.
//!
//! The planner never touches the DOM: it turns a state snapshot into a
//! list of [`MapCommand`] values that the `js_bridge` executes against
//! OpenLayers. Keeping this step pure makes marker styling, camera
//! framing and WMS layer naming unit-testable.

use lfw_domain::raster::find_row;
use lfw_domain::{AdmBoundary, Landmark};
use lfw_state::SelectionState;
use serde::Serialize;

/// Zoom level the camera animates to when a landmark is selected.
pub const DETAIL_ZOOM: f64 = 14.0;
/// Camera animation duration.
pub const FLY_DURATION_MS: u32 = 800;

/// One marker on the landmark layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerSpec {
    pub id: i64,
    pub lon: f64,
    pub lat: f64,
    pub selected: bool,
}

/// Commands accepted by the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum MapCommand {
    SetMarkers { markers: Vec<MarkerSpec> },
    AnimateTo {
        lon: f64,
        lat: f64,
        zoom: f64,
        duration_ms: u32,
    },
    ShowPopup { lon: f64, lat: f64 },
    HidePopup,
    ShowThematicLayer { name: String },
    HideThematicLayer,
    SetFootprint { geometry: String },
    ClearFootprint,
    SetBoundaries { collection: String },
}

/// Plan the command list for the current snapshot.
///
/// `previously_selected` is the landmark id the map was last framed on;
/// the camera only moves when the selection changes to a different
/// landmark, and stays put on deselection (only the popup hides).
pub fn plan(
    landmarks: &[Landmark],
    st: &SelectionState,
    previously_selected: Option<i64>,
) -> Vec<MapCommand> {
    let selected_id = st.selected_landmark.as_ref().map(|lm| lm.id);

    let mut commands = Vec::new();

    // Landmarks without coordinates are valid for search and selection
    // but are silently skipped for map placement.
    let markers: Vec<MarkerSpec> = landmarks
        .iter()
        .filter_map(|lm| {
            lm.coordinate().map(|(lon, lat)| MarkerSpec {
                id: lm.id,
                lon,
                lat,
                selected: selected_id == Some(lm.id),
            })
        })
        .collect();
    commands.push(MapCommand::SetMarkers { markers });

    match &st.selected_landmark {
        Some(lm) => {
            if let Some((lon, lat)) = lm.coordinate() {
                if selected_id != previously_selected {
                    commands.push(MapCommand::AnimateTo {
                        lon,
                        lat,
                        zoom: DETAIL_ZOOM,
                        duration_ms: FLY_DURATION_MS,
                    });
                }
                commands.push(MapCommand::ShowPopup { lon, lat });
            } else {
                commands.push(MapCommand::HidePopup);
            }
        }
        None => commands.push(MapCommand::HidePopup),
    }

    commands.extend(thematic_commands(st));
    commands
}

/// Thematic WMS layer + footprint, visible only when a landmark, an index
/// type and a matching raster row are all present.
fn thematic_commands(st: &SelectionState) -> Vec<MapCommand> {
    let visible = match (&st.selected_landmark, st.selected_index_type, &st.selected_month) {
        (Some(lm), Some(index), Some(month)) => {
            find_row(&st.raster_rows, index).map(|row| (lm, index, month, row))
        }
        _ => None,
    };

    match visible {
        Some((lm, index, month, row)) => {
            let mut commands = vec![MapCommand::ShowThematicLayer {
                name: wms_layer_name(&lm.name, index.as_str(), month.year, month.month),
            }];
            match row.footprint() {
                Some(geom) => commands.push(MapCommand::SetFootprint {
                    geometry: serde_json::to_string(&geom).unwrap_or_default(),
                }),
                None => commands.push(MapCommand::ClearFootprint),
            }
            commands
        }
        None => vec![
            MapCommand::HideThematicLayer,
            MapCommand::ClearFootprint,
        ],
    }
}

/// Build the one-shot command that draws the administrative boundary
/// layer under the markers.
///
/// Boundaries with missing or unparseable geometry are skipped (already
/// logged by [`AdmBoundary::geometry`]); the rest become a GeoJSON
/// FeatureCollection with admCode/admName/level carried as properties
/// for debugging in the map console.
pub fn boundary_command(boundaries: &[AdmBoundary]) -> MapCommand {
    let features: Vec<geojson::Feature> = boundaries
        .iter()
        .filter_map(|b| {
            let geometry = b.geometry()?;
            let mut properties = geojson::JsonObject::new();
            properties.insert("admCode".into(), b.adm_code.clone().into());
            properties.insert("admName".into(), b.adm_name.clone().into());
            if let Some(level) = b.level {
                properties.insert("level".into(), level.into());
            }
            Some(geojson::Feature {
                bbox: None,
                geometry: Some(geometry),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            })
        })
        .collect();

    let collection = geojson::FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    MapCommand::SetBoundaries {
        collection: serde_json::to_string(&collection).unwrap_or_default(),
    }
}

/// Compose the published WMS layer name for one landmark-month-index.
///
/// The backend publishes layers as
/// `<sanitized landmark name>_<INDEX>_<year><zero-padded month>`, with
/// punctuation and whitespace stripped from the name. This composition is
/// an external contract with the raster publisher; changing it breaks
/// layer lookup.
pub fn wms_layer_name(landmark_name: &str, index: &str, year: i32, month: u32) -> String {
    let sanitized: String = landmark_name
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();
    format!("{}_{}_{}{:02}", sanitized, index, year, month)
}
