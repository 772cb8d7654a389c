//! Game settings chosen on the setup screen.

use serde::{Deserialize, Serialize};

use crate::error::DominoError;

/// Name shown for team A until the user edits it.
pub const DEFAULT_TEAM_A: &str = "فريقنا";
/// Name shown for team B until the user edits it.
pub const DEFAULT_TEAM_B: &str = "فريقهم";
/// Used at game start when team A's name was left blank.
pub const FALLBACK_TEAM_A: &str = "فريق 1";
/// Used at game start when team B's name was left blank.
pub const FALLBACK_TEAM_B: &str = "فريق 2";

/// Target score a team must reach (while leading) to win.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Threshold {
    Fifty1,
    #[default]
    Hundred1,
    Hundred51,
}

impl Threshold {
    /// Every limit offered on the setup screen, ascending.
    pub const OPTIONS: [Threshold; 3] = [Threshold::Fifty1, Threshold::Hundred1, Threshold::Hundred51];

    pub fn points(self) -> u32 {
        match self {
            Threshold::Fifty1 => 51,
            Threshold::Hundred1 => 101,
            Threshold::Hundred51 => 151,
        }
    }
}

impl TryFrom<u32> for Threshold {
    type Error = DominoError;

    fn try_from(points: u32) -> Result<Self, Self::Error> {
        Threshold::OPTIONS
            .into_iter()
            .find(|t| t.points() == points)
            .ok_or_else(|| DominoError::InvalidLimit(points.to_string()))
    }
}

impl From<Threshold> for u32 {
    fn from(t: Threshold) -> u32 {
        t.points()
    }
}

impl std::str::FromStr for Threshold {
    type Err = DominoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let points: u32 = s
            .trim()
            .parse()
            .map_err(|_| DominoError::InvalidLimit(s.to_string()))?;
        Threshold::try_from(points)
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.points())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub team_a_name: String,
    pub team_b_name: String,
    pub limit: Threshold,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            team_a_name: DEFAULT_TEAM_A.to_string(),
            team_b_name: DEFAULT_TEAM_B.to_string(),
            limit: Threshold::default(),
        }
    }
}

impl Settings {
    /// Apply the fields present in `patch`, leaving the rest untouched.
    pub fn merged(&self, patch: &SettingsPatch) -> Settings {
        Settings {
            team_a_name: patch.team_a_name.clone().unwrap_or_else(|| self.team_a_name.clone()),
            team_b_name: patch.team_b_name.clone().unwrap_or_else(|| self.team_b_name.clone()),
            limit: patch.limit.unwrap_or(self.limit),
        }
    }

    /// Team A's name as it appears in play. Blank names fall back to a placeholder.
    pub fn display_name_a(&self) -> String {
        non_blank_or(&self.team_a_name, FALLBACK_TEAM_A)
    }

    pub fn display_name_b(&self) -> String {
        non_blank_or(&self.team_b_name, FALLBACK_TEAM_B)
    }
}

fn non_blank_or(name: &str, fallback: &str) -> String {
    if name.trim().is_empty() {
        fallback.to_string()
    } else {
        name.to_string()
    }
}

/// Partial settings update from the setup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub team_a_name: Option<String>,
    pub team_b_name: Option<String>,
    pub limit: Option<Threshold>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_enumerated_limits_are_accepted() {
        assert_eq!(Threshold::try_from(51), Ok(Threshold::Fifty1));
        assert_eq!(Threshold::try_from(101), Ok(Threshold::Hundred1));
        assert_eq!(Threshold::try_from(151), Ok(Threshold::Hundred51));
        assert!(Threshold::try_from(100).is_err());
        assert!(Threshold::try_from(0).is_err());
        assert!("abc".parse::<Threshold>().is_err());
        assert_eq!(" 151 ".parse::<Threshold>(), Ok(Threshold::Hundred51));
    }

    #[test]
    fn default_settings() {
        let s = Settings::default();
        assert_eq!(s.team_a_name, DEFAULT_TEAM_A);
        assert_eq!(s.team_b_name, DEFAULT_TEAM_B);
        assert_eq!(s.limit.points(), 101);
    }

    #[test]
    fn merge_keeps_missing_fields() {
        let s = Settings::default();
        let merged = s.merged(&SettingsPatch {
            team_a_name: Some("X".to_string()),
            ..Default::default()
        });
        assert_eq!(merged.team_a_name, "X");
        assert_eq!(merged.team_b_name, DEFAULT_TEAM_B);
        assert_eq!(merged.limit, Threshold::Hundred1);
    }

    #[test]
    fn blank_names_fall_back() {
        let s = Settings {
            team_a_name: "   ".to_string(),
            team_b_name: String::new(),
            limit: Threshold::Fifty1,
        };
        assert_eq!(s.display_name_a(), FALLBACK_TEAM_A);
        assert_eq!(s.display_name_b(), FALLBACK_TEAM_B);
    }

    #[test]
    fn threshold_serializes_as_points() {
        let json = serde_json::to_string(&Threshold::Hundred51).unwrap();
        assert_eq!(json, "151");
        assert!(serde_json::from_str::<Threshold>("99").is_err());
    }
}
