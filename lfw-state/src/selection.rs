//! The selection state machine.

use lfw_domain::raster::find_row;
use lfw_domain::{IndexType, Landmark, MonthPreset, RasterStat, RiskAssessment};

/// Identifies one unit of derived-data fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchKey {
    pub landmark_id: i64,
    pub year: i32,
    pub month: u32,
}

impl std::fmt::Display for FetchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "landmark {} @ {}-{:02}",
            self.landmark_id, self.year, self.month
        )
    }
}

/// Fetches requested by a transition. The caller (app glue or test
/// driver) is responsible for actually running them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchRasters(FetchKey),
    FetchRisk(FetchKey),
}

/// The central mutable aggregate for the dashboard.
///
/// Created once per session and mutated exclusively through the
/// transition methods below plus the commit functions in
/// [`crate::orchestrator`]. Invariants held across every transition:
///
/// - a selected month is only meaningful alongside a selected landmark;
/// - re-clicking the selected month toggles it off and drops raster/risk
///   data;
/// - `selected_index_type` always references a row in `raster_rows`
///   (or is `None` when the rows are empty);
/// - clearing the search text clears the landmark and everything derived
///   from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub search_text: String,
    pub dropdown_open: bool,
    pub selected_landmark: Option<Landmark>,
    pub selected_month: Option<MonthPreset>,
    pub selected_index_type: Option<IndexType>,
    pub raster_rows: Vec<RasterStat>,
    pub risk: Option<RiskAssessment>,
    pub raster_loading: bool,
    pub raster_error: Option<String>,
    pub risk_loading: bool,
    pub risk_error: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current fetch key, or `None` while either half of the
    /// selection is missing.
    pub fn fetch_key(&self) -> Option<FetchKey> {
        match (&self.selected_landmark, &self.selected_month) {
            (Some(lm), Some(month)) => Some(FetchKey {
                landmark_id: lm.id,
                year: month.year,
                month: month.month,
            }),
            _ => None,
        }
    }

    /// Update the search text and open the dropdown. Text cleared to
    /// empty also clears the selected landmark and all of its dependents
    /// (documented behavior; see DESIGN.md on this coupling).
    pub fn set_search_text(&mut self, text: &str) -> Vec<Effect> {
        let before = self.fetch_key();
        self.search_text = text.to_string();
        self.dropdown_open = true;
        if text.trim().is_empty() {
            self.selected_landmark = None;
            self.selected_month = None;
            self.clear_derived();
        }
        self.effects_since(before)
    }

    /// Select a landmark from the dropdown. The month selection is
    /// deliberately preserved so the same month refetches for the new
    /// landmark immediately.
    pub fn select_landmark(&mut self, landmark: Landmark) -> Vec<Effect> {
        let before = self.fetch_key();
        self.search_text = landmark.display_label();
        self.selected_landmark = Some(landmark);
        self.dropdown_open = false;
        self.effects_since(before)
    }

    /// Marker click on the map. `Some` behaves like a selection (fills
    /// the search box, keeps the month); `None` is deselect-via-map and
    /// drops the month and all derived data, but leaves the search text
    /// alone. The two are distinct transitions on purpose.
    pub fn click_marker(&mut self, landmark: Option<Landmark>) -> Vec<Effect> {
        let before = self.fetch_key();
        match landmark {
            Some(lm) => {
                self.search_text = lm.display_label();
                self.selected_landmark = Some(lm);
            }
            None => {
                self.selected_landmark = None;
                self.selected_month = None;
                self.clear_derived();
            }
        }
        self.effects_since(before)
    }

    /// Month preset click. Clicking the currently selected period toggles
    /// it off and drops raster/risk data; otherwise the preset becomes
    /// selected and stale rows stay visible until the next fetch commits.
    /// A month click with no landmark selected is absorbed: the month is
    /// recorded but no fetch key exists, so nothing is fetched.
    pub fn click_month(&mut self, preset: &MonthPreset) -> Vec<Effect> {
        let before = self.fetch_key();
        let toggled_off = self
            .selected_month
            .as_ref()
            .is_some_and(|m| m.same_period(preset));
        if toggled_off {
            self.selected_month = None;
            self.clear_derived();
        } else {
            self.selected_month = Some(preset.clone());
        }
        self.effects_since(before)
    }

    /// Re-open the dropdown (focus on the search box). No other field
    /// moves.
    pub fn open_dropdown(&mut self) {
        self.dropdown_open = true;
    }

    /// Toggle the thematic map layer. Selecting an index with no matching
    /// raster row is ignored so the layer invariant holds no matter what
    /// the caller does.
    pub fn select_index_type(&mut self, index: Option<IndexType>) {
        match index {
            None => self.selected_index_type = None,
            Some(t) if find_row(&self.raster_rows, t).is_some() => {
                self.selected_index_type = Some(t);
            }
            Some(t) => {
                log::debug!("ignoring layer selection {} with no matching raster row", t);
            }
        }
    }

    /// Drop everything derived from the fetch key: rows, index layer,
    /// risk, errors and loading flags. Called by every transition that
    /// clears the key, so errors never outlive the selection they
    /// belong to.
    fn clear_derived(&mut self) {
        self.raster_rows.clear();
        self.selected_index_type = None;
        self.risk = None;
        self.raster_error = None;
        self.risk_error = None;
        self.raster_loading = false;
        self.risk_loading = false;
    }

    fn effects_since(&self, before: Option<FetchKey>) -> Vec<Effect> {
        match self.fetch_key() {
            Some(key) if Some(key) != before => {
                vec![Effect::FetchRasters(key), Effect::FetchRisk(key)]
            }
            _ => Vec::new(),
        }
    }
}
