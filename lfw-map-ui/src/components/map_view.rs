//! OpenLayers map host component.

use crate::state::AppState;
use crate::{js_bridge, projection};
use dioxus::prelude::*;

const MAP_CONTAINER_ID: &str = "landmark-map";
const POPUP_ID: &str = "landmark-map-popup";

/// Hosts the OpenLayers map and keeps it in sync with the dashboard
/// state.
///
/// The component renders the container and popup divs; everything inside
/// the container belongs to OpenLayers. A reactive effect replans the
/// command batch whenever the landmark collection or the selection
/// changes, and marker clicks come back through the `js_bridge` handler.
#[component]
pub fn MapView() -> Element {
    let mut state = use_context::<AppState>();

    // Runs once; the bridge polls until the script tag and the container
    // div are both live.
    use_hook(|| {
        js_bridge::init_map(MAP_CONTAINER_ID, POPUP_ID);
        js_bridge::on_marker_click(move |clicked: Option<i64>| {
            let transition = match clicked {
                Some(id) => {
                    let already = state
                        .selection
                        .peek()
                        .selected_landmark
                        .as_ref()
                        .is_some_and(|lm| lm.id == id);
                    if already {
                        // Clicking the selected marker again deselects it.
                        None
                    } else {
                        state.landmarks.peek().iter().find(|lm| lm.id == id).cloned()
                    }
                }
                None => None,
            };
            let effects = state.selection.write().click_marker(transition);
            state.dispatch(effects);
        });
    });

    use_drop(js_bridge::destroy_map);

    // Replan on every landmark or selection change. `framed_landmark` is
    // peeked, not read, so writing it back does not loop the effect.
    use_effect(move || {
        let landmarks = state.landmarks.read();
        let selection = state.selection.read();
        let framed = *state.framed_landmark.peek();

        let commands = projection::plan(&landmarks, &selection, framed);
        js_bridge::apply_commands(&commands);

        let now = selection.selected_landmark.as_ref().map(|lm| lm.id);
        drop(selection);
        drop(landmarks);
        if now != framed {
            state.framed_landmark.set(now);
        }
    });

    let selected = state.selection.read().selected_landmark.clone();

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            style: "position: absolute; inset: 0;",
        }
        // Popup anchored by OpenLayers; content rendered from state.
        div {
            id: POPUP_ID,
            style: "position: absolute; background: #ffffff; border-radius: 10px; box-shadow: 0 12px 30px rgba(15, 23, 42, 0.25); padding: 10px 14px; min-width: 180px; transform: translate(-50%, calc(-100% - 14px)); pointer-events: none;",
            if let Some(lm) = selected {
                div {
                    style: "font-size: 13px; font-weight: 700; color: #111827;",
                    "{lm.display_label()}"
                }
                div {
                    style: "font-size: 11px; color: #6B7280;",
                    "#{lm.id}"
                    if !lm.address.is_empty() { " \u{00B7} {lm.address}" }
                }
            }
        }
    }
}
