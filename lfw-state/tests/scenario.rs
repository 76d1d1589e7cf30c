//! End-to-end pipeline tests with scripted sources.

use lfw_api::{ApiError, RasterSource, RiskSource};
use lfw_domain::raster::find_row;
use lfw_domain::risk::classify_local_risk;
use lfw_domain::{IndexType, Landmark, MonthPreset, RasterStat, RiskAssessment, RiskLevel};
use lfw_state::{run_effect, SelectionState, SharedSelection};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tokio::sync::oneshot;

/// Scripted backend. Responses resolve immediately unless a oneshot gate
/// has been registered for the landmark, which lets a test hold a
/// response open while the selection moves on.
#[derive(Default)]
struct FakeBackend {
    rasters: RefCell<HashMap<i64, Vec<RasterStat>>>,
    risks: RefCell<HashMap<i64, RiskAssessment>>,
    raster_gates: RefCell<HashMap<i64, oneshot::Receiver<()>>>,
}

impl FakeBackend {
    fn gate_rasters(&self, landmark_id: i64) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.raster_gates.borrow_mut().insert(landmark_id, rx);
        tx
    }
}

impl RasterSource for FakeBackend {
    async fn fetch_rasters(
        &self,
        landmark_id: i64,
        _year: i32,
        _month: u32,
    ) -> Result<Vec<RasterStat>, ApiError> {
        let gate = self.raster_gates.borrow_mut().remove(&landmark_id);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.rasters
            .borrow()
            .get(&landmark_id)
            .cloned()
            .ok_or_else(|| ApiError::Rejected {
                message: "no rasters for landmark".into(),
                code: None,
            })
    }
}

impl RiskSource for FakeBackend {
    async fn fetch_risk(
        &self,
        landmark_id: i64,
        _year: i32,
        _month: u32,
    ) -> Result<RiskAssessment, ApiError> {
        self.risks
            .borrow()
            .get(&landmark_id)
            .cloned()
            .ok_or_else(|| ApiError::Rejected {
                message: "no risk for landmark".into(),
                code: None,
            })
    }
}

fn landmark(id: i64, name: &str) -> Landmark {
    Landmark {
        id,
        name: name.to_string(),
        address: String::new(),
        province: String::new(),
        latitude: Some(37.5),
        longitude: Some(127.0),
    }
}

fn row(landmark_id: i64, index: IndexType, mean: f64, min: f64, max: f64) -> RasterStat {
    RasterStat {
        id: None,
        landmark_id,
        index_type: index,
        year: 2024,
        month: 3,
        s3_path: None,
        val_mean: mean,
        val_min: min,
        val_max: max,
        val_stddev: 0.05,
        geom_json: None,
        geom: None,
    }
}

fn shared() -> SharedSelection {
    Rc::new(RefCell::new(SelectionState::new()))
}

#[tokio::test]
async fn test_peak_scenario_yields_75_percent_not_safe() {
    let backend = Rc::new(FakeBackend::default());
    backend.rasters.borrow_mut().insert(
        5,
        vec![
            row(5, IndexType::Ndvi, 0.6, 0.4, 0.8),
            row(5, IndexType::Ndmi, 0.1, -0.2, 0.3),
        ],
    );
    backend.risks.borrow_mut().insert(
        5,
        RiskAssessment {
            landmark_id: 5,
            year: 2024,
            month: 3,
            risk_score: 0.75,
            risk_level_description: "Critical".into(),
        },
    );

    let state = shared();
    let effects = {
        let mut st = state.borrow_mut();
        st.select_landmark(landmark(5, "Test Peak"));
        st.click_month(&MonthPreset::new("Mar 2024", 2024, 3))
    };
    assert_eq!(effects.len(), 2);
    for effect in effects {
        run_effect(state.clone(), backend.clone(), effect).await;
    }

    let st = state.borrow();
    assert_eq!(st.raster_rows.len(), 2);
    assert_eq!(st.selected_index_type, Some(IndexType::Ndvi));
    assert!(!st.raster_loading);
    assert_eq!(st.raster_error, None);

    let local = classify_local_risk(
        find_row(&st.raster_rows, IndexType::Ndvi),
        find_row(&st.raster_rows, IndexType::Ndmi),
    )
    .expect("both bands fetched");
    assert_eq!(local.diff_max_min, 1.0);
    assert_eq!(local.diff_mean, 0.5);
    assert_eq!(local.percentage, 75);
    assert!(!local.is_safe);

    let risk = st.risk.as_ref().expect("risk fetched");
    assert_eq!(risk.level(), RiskLevel::Critical);
}

#[tokio::test]
async fn late_response_for_abandoned_key_loses() {
    let backend = Rc::new(FakeBackend::default());
    backend
        .rasters
        .borrow_mut()
        .insert(1, vec![row(1, IndexType::Ndvi, 0.9, 0.8, 1.0)]);
    backend
        .rasters
        .borrow_mut()
        .insert(2, vec![row(2, IndexType::Ndmi, 0.2, 0.1, 0.3)]);
    let release_k1 = backend.gate_rasters(1);

    let state = shared();
    let first_effects = {
        let mut st = state.borrow_mut();
        st.select_landmark(landmark(1, "First"));
        st.click_month(&MonthPreset::new("Mar 2024", 2024, 3))
    };

    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            // K1's raster fetch starts and parks on the gate.
            let k1_task = tokio::task::spawn_local(run_effect(
                state.clone(),
                backend.clone(),
                first_effects[0],
            ));
            tokio::task::yield_now().await;
            assert!(state.borrow().raster_loading);

            // Selection moves to K2, whose fetch resolves immediately.
            let second_effects = state.borrow_mut().select_landmark(landmark(2, "Second"));
            run_effect(state.clone(), backend.clone(), second_effects[0]).await;
            assert_eq!(state.borrow().raster_rows[0].landmark_id, 2);

            // K1's response arrives after K2's and must be discarded.
            let _ = release_k1.send(());
            k1_task.await.expect("pipeline task");

            let st = state.borrow();
            assert_eq!(st.raster_rows.len(), 1);
            assert_eq!(st.raster_rows[0].landmark_id, 2);
            assert_eq!(st.selected_index_type, Some(IndexType::Ndmi));
        })
        .await;
}

#[tokio::test]
async fn fetch_failure_surfaces_inline_message() {
    let backend = Rc::new(FakeBackend::default());
    // No scripted data: both pipelines reject.
    let state = shared();
    let effects = {
        let mut st = state.borrow_mut();
        st.select_landmark(landmark(3, "Lonely"));
        st.click_month(&MonthPreset::new("Apr 2024", 2024, 4))
    };
    for effect in effects {
        run_effect(state.clone(), backend.clone(), effect).await;
    }

    let st = state.borrow();
    assert!(st.raster_rows.is_empty());
    assert_eq!(st.raster_error.as_deref(), Some("no rasters for landmark"));
    assert_eq!(st.risk, None);
    assert_eq!(st.risk_error.as_deref(), Some("no risk for landmark"));
    assert!(!st.raster_loading);
    assert!(!st.risk_loading);
}

#[tokio::test]
async fn clearing_selection_mid_flight_leaves_state_cleared() {
    let backend = Rc::new(FakeBackend::default());
    backend
        .rasters
        .borrow_mut()
        .insert(1, vec![row(1, IndexType::Ndvi, 0.5, 0.4, 0.6)]);
    let release = backend.gate_rasters(1);

    let state = shared();
    let effects = {
        let mut st = state.borrow_mut();
        st.select_landmark(landmark(1, "First"));
        st.click_month(&MonthPreset::new("Mar 2024", 2024, 3))
    };

    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let task = tokio::task::spawn_local(run_effect(
                state.clone(),
                backend.clone(),
                effects[0],
            ));
            tokio::task::yield_now().await;

            // Deselect via the map while the fetch is parked.
            state.borrow_mut().click_marker(None);
            let _ = release.send(());
            task.await.expect("pipeline task");

            let st = state.borrow();
            assert!(st.raster_rows.is_empty());
            assert_eq!(st.raster_error, None);
            assert!(!st.raster_loading);
        })
        .await;
}
