//! Landmark Firewatch map dashboard
//!
//! Single-page map dashboard for browsing landmark wildfire risk:
//! - an OpenLayers map with one marker per landmark;
//! - a search box with an autocomplete dropdown;
//! - month preset buttons driving NDVI/NDMI raster statistics;
//! - a side panel with the server risk assessment and a locally derived
//!   spread estimate.
//!
//! Data flow:
//! 1. On mount, the bearer token (if any) is read from localStorage and
//!    an [`HttpClient`] is configured against the page origin.
//! 2. Administrative boundaries are drawn once under the markers, then
//!    the landmark collection is loaded and replaces the signal
//!    wholesale.
//! 3. Every selection transition emits fetch effects, dispatched through
//!    `AppState::dispatch` with last-selection-wins staleness guards.

use dioxus::prelude::*;
use lfw_api::{ApiError, BoundarySource, HttpClient, LandmarkSource};
use lfw_map_ui::components::{
    ErrorDisplay, LoadingSpinner, MapView, MonthButtons, RasterPanel, RiskPanel, SearchBox,
};
use lfw_map_ui::{js_bridge, projection, session, state::AppState};
use std::rc::Rc;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Configure the client and load boundaries + landmarks once on mount.
    use_hook(move || {
        let base_url = session::api_base_url();
        let client = match session::get_token() {
            Some(token) => HttpClient::new(&base_url).with_token(token),
            None => HttpClient::new(&base_url),
        };
        let client = Rc::new(client);
        state.client.set(Some(client.clone()));

        spawn(async move {
            match client.fetch_boundaries().await {
                Ok(boundaries) => {
                    log::info!("loaded {} administrative boundaries", boundaries.len());
                    js_bridge::apply_commands(&[projection::boundary_command(&boundaries)]);
                }
                Err(ApiError::Unauthorized) => {
                    session::handle_unauthorized();
                    return;
                }
                // The dashboard is usable without the boundary layer.
                Err(e) => log::warn!("boundary load failed: {}", e),
            }

            match client.fetch_landmarks().await {
                Ok(landmarks) => {
                    log::info!("loaded {} landmarks", landmarks.len());
                    state.landmarks.set(landmarks);
                    state.loading.set(false);
                }
                Err(ApiError::Unauthorized) => session::handle_unauthorized(),
                Err(e) => {
                    log::error!("landmark load failed: {}", e);
                    state.error_msg.set(Some(e.user_message()));
                    state.loading.set(false);
                }
            }
        });
    });

    rsx! {
        div {
            style: "display: flex; height: 100vh; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #F9FAFB;",

            aside {
                style: "width: 340px; padding: 16px; display: flex; flex-direction: column; gap: 14px; overflow-y: auto; background: #ffffff; border-right: 1px solid #E5E7EB; z-index: 10;",
                h1 {
                    style: "margin: 0; font-size: 17px; color: #111827;",
                    "Landmark Firewatch"
                }
                if let Some(err) = (state.error_msg)() {
                    ErrorDisplay { message: err }
                } else if (state.loading)() {
                    LoadingSpinner { label: "Loading landmarks...".to_string() }
                } else {
                    RiskPanel {}
                    RasterPanel {}
                }
            }

            main {
                style: "position: relative; flex: 1;",
                MapView {}
                div {
                    style: "position: absolute; top: 16px; left: 16px; right: 16px; display: flex; gap: 12px; align-items: flex-start; z-index: 10;",
                    SearchBox {}
                    MonthButtons {}
                }
            }
        }
    }
}
