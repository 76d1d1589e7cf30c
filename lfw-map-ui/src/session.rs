//! Backend connection context: the API origin, bearer token storage and
//! the 401 escape hatch.
//!
//! The token is written by the login flow (outside this dashboard) into
//! localStorage; the dashboard only reads it, attaches it to requests,
//! and clears it on an authentication rejection.

const TOKEN_KEY: &str = "lfw.token";

/// Absolute base URL for the backend.
///
/// The API is served from the same origin as the page. reqwest rejects
/// relative URLs, so the client must be built from this and never from
/// an empty base.
pub fn api_base_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8080".to_string())
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// The stored bearer credential, if any.
pub fn get_token() -> Option<String> {
    local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

/// Drop the stored credential.
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Hard auth failure: invalidate the credential and leave the dashboard
/// for the unauthenticated entry point. Not locally recoverable.
pub fn handle_unauthorized() {
    log::warn!("authentication rejected; clearing token and leaving the dashboard");
    clear_token();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}
