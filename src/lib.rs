//! Domino score keeper as an in-browser WASM server.
//!
//! Exports `handle_request(method, path, query, body)` for the Service Worker
//! bridge to call. Uses `matchit` for URL routing. Every `/api/domino/*`
//! POST carries one user intent and answers with the re-rendered app as an
//! HTML fragment for HTMX to swap in.

use wasm_bindgen::prelude::*;

pub mod error;
pub mod game;
pub mod routes;

/// Process an HTTP-like request and return an HTML fragment (or JSON for
/// `/api/domino/state`).
///
/// # Arguments
/// * `method` — HTTP method ("GET" or "POST")
/// * `path`   — URL path (e.g., "/api/domino/entry")
/// * `query`  — Query string, may be empty
/// * `body`   — URL-encoded form body. Empty string for GET requests.
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    let mut router = matchit::Router::new();

    router.insert("/api/domino/view", "view").ok();
    router.insert("/api/domino/state", "state").ok();
    router.insert("/api/domino/setup", "setup").ok();
    router.insert("/api/domino/settings", "settings").ok();
    router.insert("/api/domino/start", "start").ok();
    router.insert("/api/domino/entry", "entry").ok();
    router.insert("/api/domino/undo", "undo").ok();
    router.insert("/api/domino/reset", "reset").ok();
    router.insert("/api/domino/new", "new").ok();
    router.insert("/api/domino/back", "back").ok();
    router.insert("/api/domino/notice/dismiss", "notice_dismiss").ok();

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            ("view", "GET") => routes::domino::handle_view_get(query),
            ("state", "GET") => routes::domino::handle_state_get(query),

            ("setup", "POST") => routes::domino::handle_setup_post(body),
            ("settings", "POST") => routes::domino::handle_settings_post(body),
            ("start", "POST") => routes::domino::handle_start_post(body),
            ("entry", "POST") => routes::domino::handle_entry_post(body),
            ("undo", "POST") => routes::domino::handle_undo_post(body),
            ("reset", "POST") => routes::domino::handle_reset_post(body),
            ("new", "POST") => routes::domino::handle_new_post(body),
            ("back", "POST") => routes::domino::handle_back_post(body),
            ("notice_dismiss", "POST") => routes::domino::handle_notice_dismiss_post(body),

            _ => method_not_allowed(),
        },
        Err(_) => not_found(),
    }
}

fn not_found() -> String {
    r#"<span class="text-rose-600">404 — route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-rose-600">405 — method not allowed</span>"#.to_string()
}
