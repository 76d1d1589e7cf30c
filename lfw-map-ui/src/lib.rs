//! Shared Dioxus components and OpenLayers bridge for the Landmark
//! Firewatch dashboard.
//!
//! This crate provides:
//! - `projection`: pure translation of dashboard state into map commands
//! - `js_bridge`: Rust wrappers over the OpenLayers glue in `assets/js`
//! - `session`: bearer token storage and the 401 escape hatch
//! - `state`: reactive AppState plus the effect-dispatch glue
//! - `components`: reusable RSX components (search, months, panels, map)

pub mod components;
pub mod js_bridge;
pub mod projection;
pub mod session;
pub mod state;
