//! Transient toast notifications.
//!
//! Only one notice is shown at a time. Posting a new one replaces the current
//! notice, which also invalidates the dismissal the presentation layer
//! scheduled for it: `dismiss` only clears the notice whose id it names.
//! Nothing here touches scores or settings.

use serde::{Deserialize, Serialize};

/// How long the presentation layer waits before asking to dismiss a notice.
pub const NOTICE_DISMISS_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    GameStarted,
    ScoresReset,
    NewGame,
}

impl NoticeKind {
    pub fn text(self) -> &'static str {
        match self {
            NoticeKind::GameStarted => "يلا شدو حيلكم 💪",
            NoticeKind::ScoresReset => "تم التصفير 🧼",
            NoticeKind::NewGame => "لعبة جديدة.. حظ موفق! 🔥",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
}

#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    current: Option<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    /// Show `kind`, replacing whatever was showing. Returns the new notice's id.
    pub fn post(&mut self, kind: NoticeKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notice { id, kind });
        id
    }

    /// Clear the notice with this id. Returns false for stale or unknown ids.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.current {
            Some(n) if n.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.current
    }
}
