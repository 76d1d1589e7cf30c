//! Server-assessed wildfire risk panel.

use crate::components::{ErrorDisplay, LoadingSpinner};
use crate::state::AppState;
use dioxus::prelude::*;
use lfw_domain::risk::classify_server_risk;
use lfw_domain::RiskLevel;

fn badge_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "#16a34a",
        RiskLevel::Alert => "#f59e0b",
        RiskLevel::Critical => "#dc2626",
    }
}

/// Shows the backend risk assessment for the selected landmark-month.
#[component]
pub fn RiskPanel() -> Element {
    let state = use_context::<AppState>();
    let selection = state.selection.read().clone();

    if selection.fetch_key().is_none() {
        return rsx! {};
    }

    if selection.risk_loading {
        return rsx! { LoadingSpinner { label: "Assessing wildfire risk..." } };
    }
    if let Some(msg) = &selection.risk_error {
        return rsx! { ErrorDisplay { message: msg.clone() } };
    }
    let Some(risk) = selection.risk else {
        return rsx! {};
    };

    let level = classify_server_risk(&risk.risk_level_description, risk.risk_score);
    let color = badge_color(level);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; padding: 14px; border-radius: 10px; border: 1px solid #E5E7EB; background: #ffffff;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                span {
                    style: "font-size: 12px; color: #374151; font-weight: 600;",
                    "Wildfire risk \u{00B7} {risk.year}-{risk.month:02}"
                }
                span {
                    style: format!(
                        "padding: 3px 10px; border-radius: 999px; background: {color}; color: #ffffff; font-size: 11px; font-weight: 700; text-transform: uppercase; letter-spacing: 0.04em;",
                    ),
                    "{level.as_str()}"
                }
            }
            div {
                style: "display: flex; align-items: baseline; gap: 6px;",
                span {
                    style: format!("font-size: 26px; font-weight: 700; color: {color};"),
                    {format!("{:.2}", risk.risk_score)}
                }
                span { style: "font-size: 11px; color: #9CA3AF;", "score (0 - 1)" }
            }
            if !risk.risk_level_description.is_empty() {
                div {
                    style: "font-size: 12px; color: #6B7280;",
                    "{risk.risk_level_description}"
                }
            }
        }
    }
}
