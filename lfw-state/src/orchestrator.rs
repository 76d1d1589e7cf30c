//! Fetch pipelines for raster statistics and risk.
//!
//! Each pipeline runs as begin -> await source -> commit. The begin and
//! commit halves are synchronous functions over `&mut SelectionState` so
//! the host can adapt them to whatever cell it keeps the state in
//! (a `Signal` in the Dioxus app, the [`SharedSelection`] `Rc<RefCell>`
//! in tests and native hosts). Both halves compare the pipeline's
//! originating [`FetchKey`] against the current one, which gives the
//! last-key-wins discipline: a response for an abandoned key is discarded
//! rather than committed.
//!
//! Superseded requests are not aborted at the transport level; their
//! results are simply dropped by the commit guard. A hung request leaves
//! the corresponding loading flag set, which is a documented limitation.

use crate::selection::{Effect, FetchKey, SelectionState};
use lfw_api::{ApiError, RasterSource, RiskSource};
use lfw_domain::{IndexType, RasterStat, RiskAssessment};
use std::cell::RefCell;
use std::rc::Rc;

/// Canonical single-threaded handle to the selection aggregate.
pub type SharedSelection = Rc<RefCell<SelectionState>>;

/// Mark the raster pipeline as in flight for `key`.
///
/// Previous rows stay visible while loading (no flash-to-empty); only
/// the stale error text is cleared. Returns false when the key has
/// already moved on, in which case the fetch must not be issued.
pub fn begin_rasters(state: &mut SelectionState, key: FetchKey) -> bool {
    if state.fetch_key() != Some(key) {
        log::debug!("raster fetch for {} superseded before start", key);
        return false;
    }
    state.raster_loading = true;
    state.raster_error = None;
    true
}

/// Commit a raster fetch outcome, unless the selection has moved on.
pub fn commit_rasters(
    state: &mut SelectionState,
    key: FetchKey,
    result: Result<Vec<RasterStat>, ApiError>,
) -> bool {
    if state.fetch_key() != Some(key) {
        log::debug!("discarding stale raster response for {}", key);
        return false;
    }
    state.raster_loading = false;
    match result {
        Ok(rows) => {
            state.raster_error = None;
            state.selected_index_type = derive_index_type(state.selected_index_type, &rows);
            state.raster_rows = rows;
        }
        Err(e) => {
            log::warn!("raster fetch for {} failed: {}", key, e);
            state.raster_rows.clear();
            state.selected_index_type = None;
            state.raster_error = Some(e.user_message());
        }
    }
    true
}

/// Mark the risk pipeline as in flight for `key`.
pub fn begin_risk(state: &mut SelectionState, key: FetchKey) -> bool {
    if state.fetch_key() != Some(key) {
        log::debug!("risk fetch for {} superseded before start", key);
        return false;
    }
    state.risk_loading = true;
    state.risk_error = None;
    true
}

/// Commit a risk fetch outcome, unless the selection has moved on.
pub fn commit_risk(
    state: &mut SelectionState,
    key: FetchKey,
    result: Result<RiskAssessment, ApiError>,
) -> bool {
    if state.fetch_key() != Some(key) {
        log::debug!("discarding stale risk response for {}", key);
        return false;
    }
    state.risk_loading = false;
    match result {
        Ok(assessment) => {
            state.risk_error = None;
            state.risk = Some(assessment);
        }
        Err(e) => {
            log::warn!("risk fetch for {} failed: {}", key, e);
            state.risk = None;
            state.risk_error = Some(e.user_message());
        }
    }
    true
}

/// Re-derive the selected index type after `rows` replace the old ones:
/// keep the previous selection when still present, otherwise default to
/// the first row's index, or `None` when there are no rows.
pub fn derive_index_type(previous: Option<IndexType>, rows: &[RasterStat]) -> Option<IndexType> {
    if rows.is_empty() {
        return None;
    }
    match previous {
        Some(t) if rows.iter().any(|r| r.index_type == t) => Some(t),
        _ => Some(rows[0].index_type),
    }
}

/// Run one requested fetch against the shared aggregate.
///
/// This is the driver for hosts that keep the state in a
/// [`SharedSelection`]; the Dioxus app provides the equivalent glue over
/// its signal. Borrows are taken only around the synchronous begin and
/// commit steps, never across the await.
pub async fn run_effect<S>(state: SharedSelection, sources: Rc<S>, effect: Effect)
where
    S: RasterSource + RiskSource,
{
    match effect {
        Effect::FetchRasters(key) => {
            if !begin_rasters(&mut state.borrow_mut(), key) {
                return;
            }
            let result = sources
                .fetch_rasters(key.landmark_id, key.year, key.month)
                .await;
            commit_rasters(&mut state.borrow_mut(), key, result);
        }
        Effect::FetchRisk(key) => {
            if !begin_risk(&mut state.borrow_mut(), key) {
                return;
            }
            let result = sources
                .fetch_risk(key.landmark_id, key.year, key.month)
                .await;
            commit_risk(&mut state.borrow_mut(), key, result);
        }
    }
}
