//! Game progression: WELCOME → SETUP → PLAYING → WON.
//!
//! A `Game` is a snapshot. `Game::apply` never mutates it; it returns the next
//! snapshot plus the events the intent produced. An intent that does not
//! apply to the current phase yields an identical snapshot and no events.
//!
//! `GameController` owns the current snapshot together with the pieces that
//! sit outside the authoritative state: the random source for winner
//! messages and the notice board.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::game::entry::PendingEntry;
use crate::game::messages::{WIN_MESSAGES, pick_message};
use crate::game::notice::{Notice, NoticeBoard, NoticeKind};
use crate::game::settings::{Settings, SettingsPatch};
use crate::game::team::{TeamSide, TeamState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    #[default]
    Welcome,
    Setup,
    Playing,
    Won,
}

/// Everything the user can ask the game to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    BeginSetup,
    UpdateSettings(SettingsPatch),
    StartGame,
    OpenEntry(TeamSide),
    PressDigit(u8),
    DeleteDigit,
    ClearDigits,
    ConfirmEntry,
    CancelEntry,
    UndoLast(TeamSide),
    ResetScores,
    NewGame,
    GoToSetup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    PhaseChanged { from: Phase, to: Phase },
    ScoreRecorded { side: TeamSide, score: u32 },
    ScoreUndone { side: TeamSide, score: u32 },
    Notice(NoticeKind),
    Won(TeamSide),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerRecord {
    pub side: TeamSide,
    pub name: String,
    pub message: String,
    pub final_a: u32,
    pub final_b: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    phase: Phase,
    settings: Settings,
    team_a: TeamState,
    team_b: TeamState,
    entry: Option<PendingEntry>,
    winner: Option<WinnerRecord>,
}

/// Result of applying one intent.
#[derive(Debug, Clone)]
pub struct Step {
    pub game: Game,
    pub events: Vec<Event>,
}

impl Game {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn team(&self, side: TeamSide) -> &TeamState {
        match side {
            TeamSide::A => &self.team_a,
            TeamSide::B => &self.team_b,
        }
    }

    fn team_mut(&mut self, side: TeamSide) -> &mut TeamState {
        match side {
            TeamSide::A => &mut self.team_a,
            TeamSide::B => &mut self.team_b,
        }
    }

    /// The open numeric pad, if any.
    pub fn entry(&self) -> Option<&PendingEntry> {
        self.entry.as_ref()
    }

    pub fn winner(&self) -> Option<&WinnerRecord> {
        self.winner.as_ref()
    }

    pub fn apply<R: Rng + ?Sized>(&self, intent: &Intent, rng: &mut R) -> Step {
        let mut next = self.clone();
        let mut events = Vec::new();

        match (self.phase, intent) {
            (Phase::Welcome, Intent::BeginSetup) => {
                next.go_to(Phase::Setup, &mut events);
            }
            (Phase::Setup, Intent::UpdateSettings(patch)) => {
                next.settings = self.settings.merged(patch);
            }
            (Phase::Setup, Intent::StartGame) => {
                next.team_a = TeamState::new(self.settings.display_name_a());
                next.team_b = TeamState::new(self.settings.display_name_b());
                next.entry = None;
                next.winner = None;
                next.go_to(Phase::Playing, &mut events);
                events.push(Event::Notice(NoticeKind::GameStarted));
            }
            (Phase::Playing, Intent::OpenEntry(side)) => {
                next.entry = Some(PendingEntry::open(*side));
            }
            (Phase::Playing, Intent::PressDigit(d)) => {
                if let Some(entry) = next.entry.as_mut() {
                    entry.press(*d);
                }
            }
            (Phase::Playing, Intent::DeleteDigit) => {
                if let Some(entry) = next.entry.as_mut() {
                    entry.delete();
                }
            }
            (Phase::Playing, Intent::ClearDigits) => {
                if let Some(entry) = next.entry.as_mut() {
                    entry.clear();
                }
            }
            (Phase::Playing, Intent::ConfirmEntry) => {
                if let Some(entry) = next.entry.take() {
                    if let Some(score) = entry.value() {
                        next.team_mut(entry.target).record(score);
                        events.push(Event::ScoreRecorded {
                            side: entry.target,
                            score,
                        });
                        next.evaluate_win(rng, &mut events);
                    }
                }
            }
            (Phase::Playing, Intent::CancelEntry) => {
                next.entry = None;
            }
            (Phase::Playing, Intent::UndoLast(side)) => {
                if let Some(score) = next.team_mut(*side).undo_last() {
                    events.push(Event::ScoreUndone { side: *side, score });
                    next.evaluate_win(rng, &mut events);
                }
            }
            (Phase::Playing, Intent::ResetScores) => {
                next.team_a.clear();
                next.team_b.clear();
                next.entry = None;
                events.push(Event::Notice(NoticeKind::ScoresReset));
            }
            (Phase::Won, Intent::NewGame) => {
                next.team_a.clear();
                next.team_b.clear();
                next.winner = None;
                next.go_to(Phase::Playing, &mut events);
                events.push(Event::Notice(NoticeKind::NewGame));
            }
            (Phase::Playing | Phase::Won, Intent::GoToSetup) => {
                next.entry = None;
                next.winner = None;
                next.go_to(Phase::Setup, &mut events);
            }
            _ => {}
        }

        Step { game: next, events }
    }

    fn go_to(&mut self, to: Phase, events: &mut Vec<Event>) {
        events.push(Event::PhaseChanged {
            from: self.phase,
            to,
        });
        self.phase = to;
    }

    /// A team wins once its total reaches the limit while strictly ahead.
    fn winning_side(&self) -> Option<TeamSide> {
        let limit = self.settings.limit.points();
        [TeamSide::A, TeamSide::B].into_iter().find(|&side| {
            let own = self.team(side).total();
            own >= limit && own > self.team(side.other()).total()
        })
    }

    fn evaluate_win<R: Rng + ?Sized>(&mut self, rng: &mut R, events: &mut Vec<Event>) {
        let Some(side) = self.winning_side() else {
            return;
        };
        self.winner = Some(WinnerRecord {
            side,
            name: self.team(side).name().to_string(),
            message: pick_message(rng, WIN_MESSAGES).to_string(),
            final_a: self.team_a.total(),
            final_b: self.team_b.total(),
        });
        self.entry = None;
        self.go_to(Phase::Won, events);
        events.push(Event::Won(side));
    }
}

/// Fire-once celebratory effect (confetti and the like) run on a win.
pub trait Celebration {
    fn celebrate(&mut self);
}

impl<F: FnMut()> Celebration for F {
    fn celebrate(&mut self) {
        self()
    }
}

pub struct GameController {
    game: Game,
    notices: NoticeBoard,
    rng: StdRng,
}

impl GameController {
    pub fn new(rng: StdRng) -> Self {
        Self {
            game: Game::default(),
            notices: NoticeBoard::default(),
            rng,
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notices.current()
    }

    pub fn dismiss_notice(&mut self, id: u64) -> bool {
        self.notices.dismiss(id)
    }

    /// Apply `intent`, post any notices it raised and run `celebration` if it
    /// ended the game. Returns the events for the caller to inspect.
    pub fn dispatch(&mut self, intent: Intent, celebration: &mut dyn Celebration) -> Vec<Event> {
        let Step { game, events } = self.game.apply(&intent, &mut self.rng);
        if events.is_empty() && game == self.game {
            log::debug!("ignored {:?} in {:?}", intent, self.game.phase);
            return events;
        }
        self.game = game;

        for event in &events {
            match *event {
                Event::PhaseChanged { from, to } => log::info!("phase {:?} -> {:?}", from, to),
                Event::ScoreRecorded { side, score } => {
                    log::debug!("team {} +{} (total {})", side.as_str(), score, self.game.team(side).total())
                }
                Event::ScoreUndone { side, score } => {
                    log::debug!("team {} undo {} (total {})", side.as_str(), score, self.game.team(side).total())
                }
                Event::Notice(kind) => {
                    self.notices.post(kind);
                }
                Event::Won(side) => {
                    log::info!("team {} wins", self.game.team(side).name());
                    celebration.celebrate();
                }
            }
        }
        events
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::from_entropy()
    }
}
