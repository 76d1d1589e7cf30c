//! Core domain types and pure logic for the Landmark Firewatch dashboard.
//!
//! Everything in this crate is I/O-free: landmark and raster records,
//! month presets, the wildfire risk classifiers and the landmark search
//! filter. Network access and UI state live in `lfw-api` and `lfw-state`.

pub mod boundary;
pub mod landmark;
pub mod month;
pub mod raster;
pub mod risk;
pub mod search;

pub use boundary::AdmBoundary;
pub use landmark::Landmark;
pub use month::MonthPreset;
pub use raster::{IndexType, RasterStat};
pub use risk::{LocalRisk, RiskAssessment, RiskLevel};
