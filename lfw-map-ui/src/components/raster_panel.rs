//! Vegetation index statistics panel.

use crate::components::{ErrorDisplay, LoadingSpinner};
use crate::state::AppState;
use dioxus::prelude::*;
use lfw_domain::raster::find_row;
use lfw_domain::risk::classify_local_risk;
use lfw_domain::IndexType;

/// Shows the NDVI/NDMI statistics for the selected landmark-month,
/// plus the layer toggle buttons and the locally derived risk reading.
#[component]
pub fn RasterPanel() -> Element {
    let mut state = use_context::<AppState>();
    let selection = state.selection.read().clone();

    if selection.selected_landmark.is_none() {
        return rsx! {
            div {
                style: "padding: 24px 16px; color: #6B7280; font-size: 13px;",
                "Search for a landmark or click a marker to see vegetation indices."
            }
        };
    }
    if selection.selected_month.is_none() {
        return rsx! {
            div {
                style: "padding: 24px 16px; color: #6B7280; font-size: 13px;",
                "Pick a month above to load NDVI / NDMI statistics."
            }
        };
    }

    if selection.raster_loading {
        return rsx! { LoadingSpinner { label: "Loading raster statistics..." } };
    }
    if let Some(msg) = &selection.raster_error {
        return rsx! { ErrorDisplay { message: msg.clone() } };
    }
    if selection.raster_rows.is_empty() {
        return rsx! {
            div {
                style: "padding: 24px 16px; color: #6B7280; font-size: 13px;",
                "No raster statistics for this landmark and month."
            }
        };
    }

    let ndvi = find_row(&selection.raster_rows, IndexType::Ndvi).cloned();
    let ndmi = find_row(&selection.raster_rows, IndexType::Ndmi).cloned();
    let local = classify_local_risk(ndvi.as_ref(), ndmi.as_ref());
    let rows = selection.raster_rows.clone();
    let active_index = selection.selected_index_type;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px;",

            // Layer toggle buttons, one per available band.
            div {
                style: "display: flex; gap: 8px;",
                for index in rows.iter().map(|r| r.index_type) {
                    {
                        let active = active_index == Some(index);
                        let style = if active {
                            "flex: 1; padding: 7px 0; border-radius: 8px; border: 1px solid #2563EB; background: #2563EB; color: #ffffff; font-size: 12px; font-weight: 600; cursor: pointer;"
                        } else {
                            "flex: 1; padding: 7px 0; border-radius: 8px; border: 1px solid #D1D5DB; background: #ffffff; color: #374151; font-size: 12px; cursor: pointer;"
                        };
                        rsx! {
                            button {
                                key: "{index}",
                                r#type: "button",
                                style,
                                onclick: move |_| {
                                    let next = if active { None } else { Some(index) };
                                    state.selection.write().select_index_type(next);
                                },
                                if active { "Hide {index} layer" } else { "Show {index} layer" }
                            }
                        }
                    }
                }
            }

            table {
                style: "width: 100%; border-collapse: collapse; font-size: 12px;",
                thead {
                    tr {
                        style: "color: #6B7280; text-align: right;",
                        th { style: "text-align: left; padding: 4px 6px;", "Index" }
                        th { style: "padding: 4px 6px;", "Mean" }
                        th { style: "padding: 4px 6px;", "Min" }
                        th { style: "padding: 4px 6px;", "Max" }
                        th { style: "padding: 4px 6px;", "Stddev" }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        tr {
                            key: "{row.index_type}",
                            style: "border-top: 1px solid #F3F4F6; text-align: right; color: #111827;",
                            td { style: "text-align: left; padding: 6px; font-weight: 600;", "{row.index_type}" }
                            td { style: "padding: 6px;", {format!("{:.3}", row.val_mean)} }
                            td { style: "padding: 6px;", {format!("{:.3}", row.val_min)} }
                            td { style: "padding: 6px;", {format!("{:.3}", row.val_max)} }
                            td { style: "padding: 6px;", {format!("{:.3}", row.val_stddev)} }
                        }
                    }
                }
            }

            if let Some(local) = local {
                div {
                    style: format!(
                        "padding: 12px; border-radius: 10px; border: 1px solid {}; background: {};",
                        if local.is_safe { "#BBF7D0" } else { "#FECACA" },
                        if local.is_safe { "#F0FDF4" } else { "#FEF2F2" },
                    ),
                    div {
                        style: "display: flex; justify-content: space-between; align-items: baseline;",
                        span {
                            style: "font-size: 12px; color: #374151; font-weight: 600;",
                            "Local spread estimate"
                        }
                        span {
                            style: format!(
                                "font-size: 18px; font-weight: 700; color: {};",
                                if local.is_safe { "#16a34a" } else { "#dc2626" },
                            ),
                            "{local.percentage}%"
                        }
                    }
                    div {
                        style: "font-size: 11px; color: #6B7280; margin-top: 4px;",
                        if local.is_safe {
                            "Moisture spread within the vegetation band; no local warning."
                        } else {
                            "NDVI/NDMI spread exceeds the mean gap; treat as not safe."
                        }
                    }
                }
            }
        }
    }
}
