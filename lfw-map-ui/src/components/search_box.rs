//! Landmark search box with autocomplete dropdown.

use crate::state::AppState;
use dioxus::prelude::*;
use lfw_domain::search::filter_landmarks;

/// Free-text landmark search with a result dropdown.
///
/// Typing filters by id, name, address and province; picking an entry
/// selects the landmark and closes the dropdown. Clearing the text
/// clears the whole selection (see the state machine's documented
/// coupling).
#[component]
pub fn SearchBox() -> Element {
    let mut state = use_context::<AppState>();
    let landmarks = state.landmarks.read().clone();
    let selection = state.selection.read().clone();

    let results = filter_landmarks(&landmarks, &selection.search_text);
    let selected_id = selection.selected_landmark.as_ref().map(|lm| lm.id);

    let on_input = move |evt: Event<FormData>| {
        let effects = state.selection.write().set_search_text(&evt.value());
        state.dispatch(effects);
    };

    let on_focus = move |_| {
        state.selection.write().open_dropdown();
    };

    rsx! {
        div {
            style: "position: relative; flex: 1;",
            div {
                style: "display: flex; align-items: center; background: #ffffff; border-radius: 999px; box-shadow: 0 10px 25px rgba(15, 23, 42, 0.12); padding: 8px 14px; gap: 8px; border: 1px solid #E5E7EB;",
                span { style: "font-size: 15px; color: #9CA3AF;", "\u{1F50D}" }
                input {
                    r#type: "text",
                    placeholder: "Search landmarks or regions",
                    value: "{selection.search_text}",
                    oninput: on_input,
                    onfocus: on_focus,
                    style: "flex: 1; border: none; outline: none; font-size: 14px; color: #111827;",
                }
            }

            if selection.dropdown_open && !results.is_empty() {
                div {
                    style: "position: absolute; top: 100%; left: 0; right: 0; margin-top: 6px; background: #ffffff; border-radius: 12px; box-shadow: 0 12px 30px rgba(15, 23, 42, 0.18); max-height: 260px; overflow-y: auto; border: 1px solid #E5E7EB; z-index: 20;",
                    div {
                        style: "padding: 8px 12px; font-size: 12px; color: #6B7280; border-bottom: 1px solid #F3F4F6; position: sticky; top: 0; background: #ffffff;",
                        "{results.len()} results"
                    }
                    for lm in results.into_iter() {
                        button {
                            key: "{lm.id}",
                            r#type: "button",
                            style: format!(
                                "width: 100%; text-align: left; padding: 10px 12px; border: none; cursor: pointer; display: flex; flex-direction: column; gap: 2px; border-bottom: 1px solid #F3F4F6; background: {};",
                                if selected_id == Some(lm.id) { "#EFF6FF" } else { "#ffffff" }
                            ),
                            onclick: {
                                let pick = lm.clone();
                                move |_| {
                                    let effects = state.selection.write().select_landmark(pick.clone());
                                    state.dispatch(effects);
                                }
                            },
                            span {
                                style: "font-size: 13px; font-weight: 600; color: #111827;",
                                "#{lm.id} \u{00B7} {lm.display_label()}"
                            }
                            span {
                                style: "font-size: 11px; color: #6B7280;",
                                if lm.province.is_empty() { "unassigned region" } else { "{lm.province}" }
                                if !lm.address.is_empty() { " \u{00B7} {lm.address}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
