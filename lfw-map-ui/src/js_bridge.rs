//! Typed wrappers around the OpenLayers glue via `js_sys::eval()`.
//!
//! The map itself lives in `assets/js/map.js`, loaded at runtime and
//! exposed as `window.*` globals. This module serializes
//! [`crate::projection::MapCommand`] batches and hands them to those
//! globals, and routes marker clicks back into Rust through a DOM
//! CustomEvent.

use crate::projection::MapCommand;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// OpenLayers glue, embedded at compile time.
static MAP_JS: &str = include_str!("../assets/js/map.js");

/// DOM event name used by map.js to report marker clicks.
const MARKER_CLICK_EVENT: &str = "lfw-marker-click";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('LFW JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Load the map script and create the map inside `container_id`.
///
/// OpenLayers is loaded from a script tag and may not be ready when the
/// WASM module starts, so creation waits on a polling loop, mirroring
/// how the chart glue waits for its library. Safe to call once per page.
pub fn init_map(container_id: &str, popup_id: &str) {
    let store_js = format!(
        "window.__lfwMapScript = {};",
        serde_json::to_string(MAP_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    call_js(&format!(
        r#"
        (function() {{
            var waitForOl = setInterval(function() {{
                if (typeof ol !== 'undefined' &&
                    document.getElementById('{container_id}') &&
                    document.getElementById('{popup_id}')) {{
                    clearInterval(waitForOl);
                    (0, eval)(window.__lfwMapScript);
                    delete window.__lfwMapScript;
                    if (typeof initLandmarkMap !== 'undefined') window.initLandmarkMap = initLandmarkMap;
                    if (typeof applyMapCommands !== 'undefined') window.applyMapCommands = applyMapCommands;
                    window.initLandmarkMap('{container_id}', '{popup_id}');
                    window.__lfwMapReady = true;
                    console.log('LFW map initialized');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Apply a batch of planned commands to the map.
///
/// Queues behind the same readiness poll as [`init_map`], so commands
/// planned before the map finished loading are not lost. The poll gives
/// up after ~15s so a blocked OpenLayers script does not leave an
/// interval per batch spinning forever.
pub fn apply_commands(commands: &[MapCommand]) {
    let payload = match serde_json::to_string(commands) {
        Ok(json) => json,
        Err(e) => {
            log::error!("failed to serialize map commands: {}", e);
            return;
        }
    };
    let escaped = payload.replace('\\', "\\\\").replace('\'', "\\'");
    call_js(&format!(
        r#"
        (function() {{
            var tries = 0;
            var poll = setInterval(function() {{
                if (window.__lfwMapReady && typeof window.applyMapCommands !== 'undefined') {{
                    clearInterval(poll);
                    try {{
                        window.applyMapCommands('{escaped}');
                    }} catch(e) {{ console.error('[LFW] applyMapCommands error:', e); }}
                }} else if (++tries > 300) {{
                    clearInterval(poll);
                    console.warn('[LFW] map never became ready; dropping command batch');
                }}
            }}, 50);
        }})();
        "#,
    ));
}

/// Register the marker click handler.
///
/// map.js dispatches a `lfw-marker-click` CustomEvent on the document
/// with `detail.id` set to the clicked landmark id, or null for a click
/// on empty map. The callback lives for the page lifetime.
pub fn on_marker_click(mut callback: impl FnMut(Option<i64>) + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document; marker clicks will not be delivered");
        return;
    };

    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let id = event
            .dyn_ref::<web_sys::CustomEvent>()
            .map(|e| e.detail())
            .and_then(|detail| detail.as_f64())
            .map(|id| id as i64);
        callback(id);
    });

    if document
        .add_event_listener_with_callback(MARKER_CLICK_EVENT, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::error!("failed to attach {} listener", MARKER_CLICK_EVENT);
    }
    // Handler lives as long as the page; intentionally leaked.
    closure.forget();
}

/// Tear down the map (page teardown).
pub fn destroy_map() {
    call_js("if (window.destroyLandmarkMap) window.destroyLandmarkMap();");
}
