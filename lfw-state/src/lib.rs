//! Client-side state reconciliation for the Landmark Firewatch dashboard.
//!
//! [`selection::SelectionState`] is the single mutable aggregate behind
//! the dashboard: search text, selected landmark/month/index layer,
//! fetched raster rows and risk, and per-pipeline loading/error fields.
//! It is mutated only through its named transition operations, each of
//! which enforces the cross-field clearing rules atomically and reports
//! which fetches the transition triggered.
//!
//! [`orchestrator`] runs those fetches: two independent pipelines (raster
//! statistics, risk) keyed by (landmark, year, month), with a
//! last-key-wins guard so a slow response for an abandoned selection can
//! never overwrite a newer one.

pub mod orchestrator;
pub mod selection;

pub use orchestrator::{run_effect, SharedSelection};
pub use selection::{Effect, FetchKey, SelectionState};
