//! `/api/domino/*` routes — one handler per user intent.
//!
//! POST handlers turn the form body into an `Intent`, dispatch it to the
//! global controller and return the re-rendered app. A body that cannot be
//! parsed leaves the game untouched and renders the app with an error banner.

use crate::error::{DominoError, Result};
use crate::game::controller::Intent;
use crate::game::screens::{escape_html, render_app, render_toast};
use crate::game::settings::{SettingsPatch, Threshold};
use crate::game::state::{export_state_json, with_state, with_state_mut};
use crate::game::team::TeamSide;
use crate::routes::util::Params;

/// Appended to a response when the game was just won. The page defines
/// `dominoCelebrate` (confetti); the core does not wait on it.
const CELEBRATE_HOOK: &str =
    r#"<script>window.dominoCelebrate && window.dominoCelebrate();</script>"#;

/// Dispatch `intent` and render the result. The toast is only included
/// when this intent posted a new notice.
fn respond(intent: Intent) -> String {
    let mut celebrated = false;
    let mut html = with_state_mut(|c| {
        let before = c.notice().map(|n| n.id);
        c.dispatch(intent, &mut || celebrated = true);
        let mut html = render_app(c);
        if c.notice().map(|n| n.id) != before {
            html.push_str(&render_toast(c.notice()));
        }
        html
    });
    if celebrated {
        html.push_str(CELEBRATE_HOOK);
    }
    html
}

fn respond_with(parsed: Result<Intent>) -> String {
    match parsed {
        Ok(intent) => respond(intent),
        Err(e) => render_error(&e),
    }
}

fn render_error(err: &DominoError) -> String {
    log::warn!("rejected request: {}", err);
    let mut html = format!(
        r#"<div role="alert" class="fixed bottom-4 inset-x-0 z-50 text-center"><span class="text-rose-600 font-bold">{}</span></div>"#,
        escape_html(&err.to_string())
    );
    html.push_str(&with_state(render_app));
    html
}

// ── GET /api/domino/view ───────────────────────────────────────────

/// Handle GET /api/domino/view
/// Returns the screen for the current phase. Used for the initial load, so
/// a notice that is still up comes along with it.
pub fn handle_view_get(_query: &str) -> String {
    with_state(|c| {
        let mut html = render_app(c);
        if c.notice().is_some() {
            html.push_str(&render_toast(c.notice()));
        }
        html
    })
}

// ── GET /api/domino/state ──────────────────────────────────────────

/// Handle GET /api/domino/state
/// Returns the full game snapshot as JSON.
pub fn handle_state_get(_query: &str) -> String {
    export_state_json()
}

// ── POST /api/domino/setup ─────────────────────────────────────────

pub fn handle_setup_post(_body: &str) -> String {
    respond(Intent::BeginSetup)
}

// ── POST /api/domino/settings ──────────────────────────────────────

/// Handle POST /api/domino/settings
/// Body params (all optional): `team_a`, `team_b`, `limit` (51, 101 or 151).
pub fn handle_settings_post(body: &str) -> String {
    respond_with(settings_intent(&Params::from_form(body)))
}

fn settings_intent(params: &Params) -> Result<Intent> {
    let limit = params.get("limit").map(str::parse::<Threshold>).transpose()?;
    Ok(Intent::UpdateSettings(SettingsPatch {
        team_a_name: params.get("team_a").map(str::to_string),
        team_b_name: params.get("team_b").map(str::to_string),
        limit,
    }))
}

// ── POST /api/domino/start ─────────────────────────────────────────

pub fn handle_start_post(_body: &str) -> String {
    respond(Intent::StartGame)
}

// ── POST /api/domino/entry ─────────────────────────────────────────

/// Handle POST /api/domino/entry
/// Body params:
///   - action=open&team={a|b}   → open the pad for a team
///   - action=digit&digit={0-9} → append a digit
///   - action=delete            → remove the last digit
///   - action=clear             → clear all digits
///   - action=confirm           → record the score (or close if empty)
///   - action=cancel            → close without recording
pub fn handle_entry_post(body: &str) -> String {
    respond_with(entry_intent(&Params::from_form(body)))
}

fn entry_intent(params: &Params) -> Result<Intent> {
    match params.require("action")? {
        "open" => Ok(Intent::OpenEntry(params.require("team")?.parse()?)),
        "digit" => parse_digit(params.require("digit")?).map(Intent::PressDigit),
        "delete" => Ok(Intent::DeleteDigit),
        "clear" => Ok(Intent::ClearDigits),
        "confirm" => Ok(Intent::ConfirmEntry),
        "cancel" => Ok(Intent::CancelEntry),
        other => Err(DominoError::UnknownAction(other.to_string())),
    }
}

fn parse_digit(raw: &str) -> Result<u8> {
    match raw.as_bytes() {
        [b @ b'0'..=b'9'] => Ok(b - b'0'),
        _ => Err(DominoError::InvalidDigit(raw.to_string())),
    }
}

// ── POST /api/domino/undo ──────────────────────────────────────────

/// Handle POST /api/domino/undo
/// Body params: `team={a|b}`.
pub fn handle_undo_post(body: &str) -> String {
    let params = Params::from_form(body);
    respond_with(
        params
            .require("team")
            .and_then(|t| t.parse::<TeamSide>())
            .map(Intent::UndoLast),
    )
}

// ── POST /api/domino/reset | new | back ────────────────────────────

pub fn handle_reset_post(_body: &str) -> String {
    respond(Intent::ResetScores)
}

pub fn handle_new_post(_body: &str) -> String {
    respond(Intent::NewGame)
}

pub fn handle_back_post(_body: &str) -> String {
    respond(Intent::GoToSetup)
}

// ── POST /api/domino/notice/dismiss ────────────────────────────────

/// Handle POST /api/domino/notice/dismiss
/// Body params: `id` of the notice whose timer expired. Stale ids are ignored.
pub fn handle_notice_dismiss_post(body: &str) -> String {
    let params = Params::from_form(body);
    let id = params.require("id").and_then(|raw| {
        raw.trim()
            .parse::<u64>()
            .map_err(|_| DominoError::InvalidNoticeId(raw.to_string()))
    });
    match id {
        Ok(id) => with_state_mut(|c| {
            let mut html = render_app(c);
            if c.dismiss_notice(id) {
                html.push_str(&render_toast(None));
            }
            html
        }),
        Err(e) => render_error(&e),
    }
}
