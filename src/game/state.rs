//! Global game controller.
//!
//! Uses `thread_local!` + `RefCell` for safe mutable access in single-threaded
//! WASM. The Web Worker keeps the module alive, so the game survives across
//! `handle_request` calls until the page is closed. Nothing is persisted.

use serde::Serialize;
use std::cell::RefCell;

use crate::game::controller::{Game, GameController};
use crate::game::notice::Notice;

thread_local! {
    static CONTROLLER: RefCell<GameController> = RefCell::new(GameController::from_entropy());
}

/// Execute a closure with read access to the controller.
pub fn with_state<F, R>(f: F) -> R
where
    F: FnOnce(&GameController) -> R,
{
    CONTROLLER.with(|c| f(&c.borrow()))
}

/// Execute a closure with mutable access to the controller.
pub fn with_state_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut GameController) -> R,
{
    CONTROLLER.with(|c| f(&mut c.borrow_mut()))
}

/// Replace the whole controller (tests start from a known seed this way).
pub fn replace_state(controller: GameController) {
    CONTROLLER.with(|c| {
        *c.borrow_mut() = controller;
    });
}

#[derive(Serialize)]
struct Snapshot<'a> {
    #[serde(flatten)]
    game: &'a Game,
    notice: Option<Notice>,
}

/// Current game plus the visible notice, as JSON for the presentation layer.
pub fn export_state_json() -> String {
    with_state(|c| {
        let snapshot = Snapshot {
            game: c.game(),
            notice: c.notice(),
        };
        serde_json::to_string(&snapshot).unwrap_or_else(|_| "{}".to_string())
    })
}
