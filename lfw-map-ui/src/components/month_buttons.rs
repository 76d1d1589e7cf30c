//! Month preset buttons.

use crate::state::AppState;
use dioxus::prelude::*;
use lfw_domain::month::month_presets;

/// One button per offered month. The active period is highlighted;
/// clicking it again toggles the month off.
#[component]
pub fn MonthButtons() -> Element {
    let mut state = use_context::<AppState>();
    let selected_month = state.selection.read().selected_month.clone();

    rsx! {
        div {
            style: "display: flex; gap: 8px;",
            for preset in month_presets() {
                {
                    let active = selected_month
                        .as_ref()
                        .is_some_and(|m| m.same_period(&preset));
                    let style = if active {
                        "padding: 8px 14px; border-radius: 999px; border: 1px solid #ea580c; background: #ea580c; color: #ffffff; font-size: 13px; font-weight: 600; cursor: pointer; box-shadow: 0 6px 16px rgba(234, 88, 12, 0.35);"
                    } else {
                        "padding: 8px 14px; border-radius: 999px; border: 1px solid #E5E7EB; background: #ffffff; color: #374151; font-size: 13px; font-weight: 500; cursor: pointer; box-shadow: 0 6px 16px rgba(15, 23, 42, 0.08);"
                    };
                    rsx! {
                        button {
                            key: "{preset.year}-{preset.month}",
                            r#type: "button",
                            style,
                            onclick: {
                                let preset = preset.clone();
                                move |_| {
                                    let effects = state.selection.write().click_month(&preset);
                                    state.dispatch(effects);
                                }
                            },
                            "{preset.label}"
                        }
                    }
                }
            }
        }
    }
}
