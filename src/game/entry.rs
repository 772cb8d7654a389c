//! Numeric pad buffer for the round score being typed in.

use serde::{Deserialize, Serialize};

use crate::game::team::TeamSide;

/// Longest score the pad accepts (999).
pub const MAX_ENTRY_DIGITS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEntry {
    pub target: TeamSide,
    digits: String,
}

impl PendingEntry {
    pub fn open(target: TeamSide) -> Self {
        Self {
            target,
            digits: String::new(),
        }
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Append a digit. Ignored once the buffer is full or for values above 9.
    pub fn press(&mut self, digit: u8) {
        if digit > 9 || self.digits.len() >= MAX_ENTRY_DIGITS {
            return;
        }
        self.digits.push(char::from(b'0' + digit));
    }

    pub fn delete(&mut self) {
        self.digits.pop();
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Parsed score, or `None` for an empty buffer.
    pub fn value(&self) -> Option<u32> {
        self.digits.parse().ok()
    }
}
