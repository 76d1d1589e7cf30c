//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The selection aggregate itself lives in
//! `lfw-state`; this module adds the signal wrapper and the glue that
//! turns transition [`Effect`]s into spawned fetch pipelines.

use dioxus::prelude::*;
use lfw_api::{ApiError, HttpClient, RasterSource, RiskSource};
use lfw_domain::Landmark;
use lfw_state::{orchestrator, Effect, SelectionState};
use std::rc::Rc;

use crate::session;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Authoritative landmark collection (replaced wholesale on reload)
    pub landmarks: Signal<Vec<Landmark>>,
    /// Whether the initial landmark load is still running
    pub loading: Signal<bool>,
    /// Error message from the initial landmark load
    pub error_msg: Signal<Option<String>>,
    /// The selection aggregate driving panels and map
    pub selection: Signal<SelectionState>,
    /// Landmark id the map camera was last framed on
    pub framed_landmark: Signal<Option<i64>>,
    /// API client (None until configured on mount)
    pub client: Signal<Option<Rc<HttpClient>>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            landmarks: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selection: Signal::new(SelectionState::new()),
            framed_landmark: Signal::new(None),
            client: Signal::new(None),
        }
    }

    /// Spawn the fetch pipelines requested by a transition.
    pub fn dispatch(&self, effects: Vec<Effect>) {
        if effects.is_empty() {
            return;
        }
        let Some(client) = (self.client)() else {
            log::warn!("effects dispatched before the API client was configured");
            return;
        };
        for effect in effects {
            spawn(run_signal_effect(self.selection, client.clone(), effect));
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// One pipeline run against the selection signal.
///
/// Same shape as `lfw_state::run_effect`, but the begin/commit halves go
/// through the signal so subscribed components re-render. A 401 from
/// either pipeline escalates through [`session::handle_unauthorized`].
async fn run_signal_effect(
    mut selection: Signal<SelectionState>,
    client: Rc<HttpClient>,
    effect: Effect,
) {
    match effect {
        Effect::FetchRasters(key) => {
            if !selection.with_mut(|st| orchestrator::begin_rasters(st, key)) {
                return;
            }
            let result = client
                .fetch_rasters(key.landmark_id, key.year, key.month)
                .await;
            if matches!(result, Err(ApiError::Unauthorized)) {
                session::handle_unauthorized();
                return;
            }
            selection.with_mut(|st| orchestrator::commit_rasters(st, key, result));
        }
        Effect::FetchRisk(key) => {
            if !selection.with_mut(|st| orchestrator::begin_risk(st, key)) {
                return;
            }
            let result = client
                .fetch_risk(key.landmark_id, key.year, key.month)
                .await;
            if matches!(result, Err(ApiError::Unauthorized)) {
                session::handle_unauthorized();
                return;
            }
            selection.with_mut(|st| orchestrator::commit_risk(st, key, result));
        }
    }
}
