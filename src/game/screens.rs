//! HTML rendering for each phase.
//!
//! Every response replaces the inner HTML of `#domino-app`. Buttons post
//! back through HTMX with their intent in `hx-vals`; the markup carries no
//! state of its own.
//!
//! The toast lives in `#domino-toast`, a sibling of `#domino-app` on the
//! page. It is only swapped (out-of-band) by the response that posted or
//! cleared it, so its dismissal timer starts once per notice.

use crate::game::controller::{Game, GameController, Phase, WinnerRecord};
use crate::game::entry::PendingEntry;
use crate::game::notice::{NOTICE_DISMISS_MS, Notice};
use crate::game::settings::{Settings, Threshold};
use crate::game::team::{TeamSide, TeamState};

/// How many recent round scores each team panel shows.
const RECENT_SCORES: usize = 4;

/// Render the screen for the current phase.
pub fn render_app(controller: &GameController) -> String {
    let game = controller.game();
    match game.phase() {
        Phase::Welcome => render_welcome(),
        Phase::Setup => render_setup(game.settings()),
        Phase::Playing => render_playing(game),
        Phase::Won => match game.winner() {
            Some(winner) => render_won(game, winner),
            None => render_playing(game),
        },
    }
}

/// Escape user-supplied text for element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `hx-post` attributes for a button that sends `vals` to `path`.
fn hx_post(path: &str, vals: &[(&str, &str)]) -> String {
    let mut attrs = format!(r##"hx-post="{}" hx-target="#domino-app" hx-swap="innerHTML""##, path);
    if !vals.is_empty() {
        let body = vals
            .iter()
            .map(|(k, v)| format!(r#""{}":"{}""#, k, v))
            .collect::<Vec<_>>()
            .join(",");
        attrs.push_str(&format!(" hx-vals='{{{}}}'", body));
    }
    attrs
}

/// Out-of-band replacement for `#domino-toast`: the notice with its one
/// dismissal timer, or an empty container once it is gone.
pub fn render_toast(notice: Option<Notice>) -> String {
    let Some(notice) = notice else {
        return r#"<div id="domino-toast" hx-swap-oob="true"></div>"#.to_string();
    };
    let id = notice.id.to_string();
    format!(
        r#"<div id="domino-toast" hx-swap-oob="true" class="fixed top-14 inset-x-0 z-50 flex justify-center pointer-events-none" {} hx-trigger="load delay:{}ms"><div class="bg-slate-900 text-white px-8 py-4 rounded-full shadow-2xl font-black text-xl">{}</div></div>"#,
        hx_post("/api/domino/notice/dismiss", &[("id", id.as_str())]),
        NOTICE_DISMISS_MS,
        notice.kind.text()
    )
}

fn render_welcome() -> String {
    let mut html = String::with_capacity(512);
    html.push_str(r#"<div class="h-full flex flex-col items-center justify-center p-10 text-center">"#);
    html.push_str(r#"<h1 class="text-7xl font-black mb-4">دومينو</h1>"#);
    html.push_str(r#"<p class="text-slate-500 text-xl mb-12 font-bold">الحاسبة الذكية للديوانية</p>"#);
    html.push_str(&format!(
        r#"<button class="bg-blue-600 text-white text-2xl font-black px-16 py-6 rounded-full" {}>نبلش؟</button>"#,
        hx_post("/api/domino/setup", &[])
    ));
    html.push_str("</div>");
    html
}

fn render_setup(settings: &Settings) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div class="h-full flex flex-col bg-slate-50 p-8 pt-20">"#);
    html.push_str(r#"<h2 class="text-5xl font-black mb-12 text-right">الإعدادات</h2>"#);

    for (field, label, value, placeholder) in [
        ("team_a", "الفريق الأول", &settings.team_a_name, "مثلاً: فريقنا"),
        ("team_b", "الفريق الثاني", &settings.team_b_name, "مثلاً: فريقهم"),
    ] {
        html.push_str(&format!(
            r##"<div class="space-y-3 mb-8"><label class="block text-right text-slate-500 font-bold" for="{field}">{label}</label><input type="text" id="{field}" name="{field}" value="{value}" placeholder="{placeholder}" class="w-full border-2 rounded-3xl p-6 text-2xl font-bold text-right" hx-post="/api/domino/settings" hx-trigger="change" hx-target="#domino-app" hx-swap="innerHTML"></div>"##,
            value = escape_html(value),
        ));
    }

    html.push_str(r#"<div class="pt-8 text-right"><label class="block mb-4 text-slate-500 font-bold">من شقد تلعبون؟</label><div class="flex gap-3">"#);
    for option in Threshold::OPTIONS {
        let points = option.to_string();
        let class = if option == settings.limit {
            "bg-blue-600 border-blue-600 text-white"
        } else {
            "bg-white border-slate-200 text-slate-400"
        };
        html.push_str(&format!(
            r#"<button class="flex-1 py-6 rounded-3xl text-3xl font-black border-2 {}" aria-pressed="{}" {}>{}</button>"#,
            class,
            option == settings.limit,
            hx_post("/api/domino/settings", &[("limit", points.as_str())]),
            points
        ));
    }
    html.push_str("</div></div>");

    html.push_str(&format!(
        r#"<button class="mt-auto bg-blue-600 text-white text-3xl font-black py-8 rounded-[2.5rem] mb-12" {}>يا الله</button>"#,
        hx_post("/api/domino/start", &[])
    ));
    html.push_str("</div>");
    html
}

fn render_playing(game: &Game) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(r#"<div class="h-full flex flex-col relative">"#);

    // Header: back to setup, target, reset
    html.push_str(r#"<div class="absolute top-0 left-0 w-full z-20 p-6 pt-14 flex justify-between items-center">"#);
    html.push_str(&format!(
        r#"<button class="p-3 rounded-2xl" aria-label="Back to setup" {}>&#x21BA;</button>"#,
        hx_post("/api/domino/back", &[])
    ));
    html.push_str(&format!(
        r#"<div class="px-6 py-2 rounded-full font-black text-sm text-blue-600">الهدف: {}</div>"#,
        game.settings().limit
    ));
    html.push_str(&format!(
        r#"<button class="p-3 rounded-2xl text-rose-500" aria-label="Reset scores" {}>&#x2715;</button>"#,
        hx_post("/api/domino/reset", &[])
    ));
    html.push_str("</div>");

    html.push_str(r#"<div class="flex-1 flex flex-col">"#);
    for side in [TeamSide::A, TeamSide::B] {
        html.push_str(&render_team_panel(side, game.team(side)));
    }
    html.push_str("</div>");

    if let Some(entry) = game.entry() {
        html.push_str(&render_pad(entry, game.team(entry.target)));
    }

    html.push_str("</div>");
    html
}

fn team_color(side: TeamSide) -> &'static str {
    match side {
        TeamSide::A => "blue",
        TeamSide::B => "rose",
    }
}

fn render_team_panel(side: TeamSide, team: &TeamState) -> String {
    let color = team_color(side);
    let mut html = String::with_capacity(1024);
    html.push_str(&format!(
        r#"<div id="team-{}" class="flex-1 relative bg-{}-50/30 flex flex-col items-center justify-center cursor-pointer" {}>"#,
        side.as_str(),
        color,
        hx_post("/api/domino/entry", &[("action", "open"), ("team", side.as_str())])
    ));
    html.push_str(&format!(
        r#"<span class="font-black text-{}-600 fluid-score">{}</span>"#,
        color,
        team.total()
    ));
    html.push_str(&format!(
        r#"<span class="text-{}-800 font-black text-2xl">{}</span>"#,
        color,
        escape_html(team.name())
    ));

    html.push_str(r#"<div class="absolute bottom-6 left-6 flex gap-2">"#);
    for score in team.recent(RECENT_SCORES) {
        html.push_str(&format!(
            r#"<span class="text-{}-600 text-sm font-black bg-white px-3 py-1.5 rounded-xl">+{}</span>"#,
            color, score
        ));
    }
    html.push_str("</div>");

    if !team.round_scores().is_empty() {
        // keep the click from also opening the pad
        html.push_str(&format!(
            r#"<button class="absolute bottom-6 right-6 p-2 hover:text-rose-500" aria-label="Undo last score" onclick="event.stopPropagation()" {}>&#x232B;</button>"#,
            hx_post("/api/domino/undo", &[("team", side.as_str())])
        ));
    }
    html.push_str("</div>");
    html
}

fn render_pad(entry: &PendingEntry, team: &TeamState) -> String {
    let color = team_color(entry.target);
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div id="numpad" class="fixed inset-0 z-50 flex flex-col justify-end">"#);
    html.push_str(&format!(
        r#"<div class="absolute inset-0 bg-slate-900/40" {}></div>"#,
        hx_post("/api/domino/entry", &[("action", "cancel")])
    ));
    html.push_str(r#"<div class="relative bg-white rounded-t-[4rem] p-8 pb-14">"#);

    let shown = if entry.is_empty() { "0" } else { entry.digits() };
    html.push_str(&format!(
        r#"<div class="flex justify-between items-center mb-10 px-4"><div class="flex flex-col"><span class="text-xl font-bold text-{}-500">نقاط {}</span><span class="text-slate-400 text-sm">أدخل النتيجة المضافة</span></div><div id="pad-value" class="text-7xl font-black tabular-nums">{}</div></div>"#,
        color,
        escape_html(team.name()),
        shown
    ));

    html.push_str(r#"<div class="grid grid-cols-3 gap-4 mb-8">"#);
    for key in ["1", "2", "3", "4", "5", "6", "7", "8", "9", "C", "0", "DEL"] {
        let (label, vals): (&str, Vec<(&str, &str)>) = match key {
            "C" => ("C", vec![("action", "clear")]),
            "DEL" => ("&#x232B;", vec![("action", "delete")]),
            digit => (digit, vec![("action", "digit"), ("digit", digit)]),
        };
        html.push_str(&format!(
            r#"<button class="h-[18vw] max-h-24 bg-slate-50 rounded-[2rem] text-3xl font-black" {}>{}</button>"#,
            hx_post("/api/domino/entry", &vals),
            label
        ));
    }
    html.push_str("</div>");

    let confirm = if entry.is_empty() { "إغلاق" } else { "تأكيد" };
    html.push_str(&format!(
        r#"<button class="w-full py-7 rounded-[2.5rem] text-3xl font-black bg-{}-600 text-white" {}>{}</button>"#,
        color,
        hx_post("/api/domino/entry", &[("action", "confirm")]),
        confirm
    ));

    html.push_str("</div></div>");
    html
}

fn render_won(game: &Game, winner: &WinnerRecord) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div id="winner" class="h-full flex flex-col items-center justify-center p-8">"#);
    html.push_str(r#"<h2 class="text-2xl font-bold text-slate-400 mb-2">الفائز بطل اللعبة</h2>"#);
    html.push_str(&format!(
        r#"<h3 class="text-6xl font-black mb-4 text-center">{}</h3>"#,
        escape_html(&winner.name)
    ));
    html.push_str(&format!(
        r#"<p class="text-2xl font-black text-blue-600 text-center mb-10">{}</p>"#,
        escape_html(&winner.message)
    ));

    html.push_str(r#"<div class="w-full max-w-sm bg-slate-50 rounded-[3rem] p-8 mb-12 flex flex-col items-center gap-6"><div class="text-slate-500 font-bold">النتيجة النهائية</div><div class="flex justify-between w-full items-center px-4">"#);
    let finals = [(TeamSide::A, winner.final_a), (TeamSide::B, winner.final_b)];
    for (i, (side, total)) in finals.into_iter().enumerate() {
        if i == 1 {
            html.push_str(r#"<div class="text-2xl font-black text-slate-300">VS</div>"#);
        }
        html.push_str(&format!(
            r#"<div class="flex flex-col items-center"><span class="text-sm font-bold text-{}-500 mb-1">{}</span><span class="text-4xl font-black tabular-nums">{}</span></div>"#,
            team_color(side),
            escape_html(game.team(side).name()),
            total
        ));
    }
    html.push_str("</div></div>");

    html.push_str(&format!(
        r#"<div class="w-full space-y-4 max-w-sm px-4"><button class="w-full bg-slate-900 text-white text-2xl font-black py-7 rounded-[2.5rem]" {}>لعبة جديدة</button><button class="w-full bg-slate-100 text-slate-600 text-xl font-bold py-5 rounded-[2rem]" {}>تغيير الفرق</button></div>"#,
        hx_post("/api/domino/new", &[]),
        hx_post("/api/domino/back", &[])
    ));
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::controller::Intent;
    use crate::game::settings::SettingsPatch;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn controller() -> GameController {
        GameController::new(StdRng::seed_from_u64(9))
    }

    fn send(c: &mut GameController, intent: Intent) {
        c.dispatch(intent, &mut || {});
    }

    fn playing() -> GameController {
        let mut c = controller();
        send(&mut c, Intent::BeginSetup);
        send(
            &mut c,
            Intent::UpdateSettings(SettingsPatch {
                team_a_name: Some("<b>X</b>".to_string()),
                team_b_name: Some("Y".to_string()),
                limit: Some(Threshold::Fifty1),
            }),
        );
        send(&mut c, Intent::StartGame);
        c
    }

    #[test]
    fn welcome_has_begin_button() {
        let html = render_app(&controller());
        assert!(html.contains("/api/domino/setup"));
        assert!(!html.contains("domino-toast"));
    }

    #[test]
    fn setup_marks_selected_limit() {
        let mut c = controller();
        send(&mut c, Intent::BeginSetup);
        let html = render_app(&c);
        assert!(html.contains(r##"aria-pressed="true" hx-post="/api/domino/settings" hx-target="#domino-app" hx-swap="innerHTML" hx-vals='{"limit":"101"}'"##));
        assert_eq!(html.matches(r#"aria-pressed="false""#).count(), 2);
        assert!(html.contains(r#"value="فريقنا""#));
    }

    #[test]
    fn playing_escapes_names_and_leaves_toast_out() {
        let c = playing();
        let html = render_app(&c);
        assert!(html.contains("&lt;b&gt;X&lt;/b&gt;"));
        assert!(!html.contains("<b>X</b>"));
        assert!(!html.contains("domino-toast"));
        assert!(html.contains("الهدف: 51"));
        assert!(!html.contains("numpad"));
    }

    #[test]
    fn toast_carries_one_dismiss_timer() {
        let c = playing();
        let html = render_toast(c.notice());
        assert!(html.contains(r#"id="domino-toast" hx-swap-oob="true""#));
        assert!(html.contains("load delay:3000ms"));
        assert!(html.contains("/api/domino/notice/dismiss"));
        assert!(html.contains("يلا شدو حيلكم"));

        let cleared = render_toast(None);
        assert!(cleared.contains("domino-toast"));
        assert!(!cleared.contains("hx-trigger"));
    }

    #[test]
    fn pad_shows_digits_and_confirm_label() {
        let mut c = playing();
        send(&mut c, Intent::OpenEntry(TeamSide::B));
        let html = render_app(&c);
        assert!(html.contains(r#"<div id="pad-value" class="text-7xl font-black tabular-nums">0</div>"#));
        assert!(html.contains("إغلاق"));

        send(&mut c, Intent::PressDigit(4));
        send(&mut c, Intent::PressDigit(2));
        let html = render_app(&c);
        assert!(html.contains(">42</div>"));
        assert!(html.contains("تأكيد"));
        assert!(html.contains("نقاط Y"));
    }

    #[test]
    fn panel_shows_last_four_and_undo() {
        let mut c = playing();
        for score in [1, 2, 3, 4, 5] {
            send(&mut c, Intent::OpenEntry(TeamSide::B));
            send(&mut c, Intent::PressDigit(score));
            send(&mut c, Intent::ConfirmEntry);
        }
        let html = render_app(&c);
        assert!(!html.contains("+1<"));
        for shown in ["+2<", "+3<", "+4<", "+5<"] {
            assert!(html.contains(shown));
        }
        assert_eq!(html.matches("Undo last score").count(), 1);
    }

    #[test]
    fn winner_screen_shows_finals() {
        let mut c = playing();
        send(&mut c, Intent::OpenEntry(TeamSide::B));
        for d in [6, 0] {
            send(&mut c, Intent::PressDigit(d));
        }
        send(&mut c, Intent::ConfirmEntry);
        let html = render_app(&c);
        assert!(html.contains(r#"id="winner""#));
        assert!(html.contains(">60</span>"));
        assert!(html.contains("/api/domino/new"));
        let message = c.game().winner().unwrap().message.clone();
        assert!(html.contains(&escape_html(&message)));
    }

    #[test]
    fn escape_html_covers_quotes() {
        assert_eq!(escape_html(r#"a"b'c&"#), "a&quot;b&#39;c&amp;");
    }
}
