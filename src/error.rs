//! Request-parsing errors.
//!
//! The scoring core itself never fails: intents that do not apply to the
//! current phase are no-ops. These errors only come from turning a form body
//! or query string into an intent.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DominoError {
    #[error("Missing {0} parameter")]
    MissingParam(&'static str),
    #[error("Unknown team \"{0}\" (expected a or b)")]
    InvalidTeam(String),
    #[error("Invalid digit \"{0}\"")]
    InvalidDigit(String),
    #[error("Invalid limit \"{0}\" (expected 51, 101 or 151)")]
    InvalidLimit(String),
    #[error("Unknown action \"{0}\"")]
    UnknownAction(String),
    #[error("Invalid notice id \"{0}\"")]
    InvalidNoticeId(String),
}

pub type Result<T> = std::result::Result<T, DominoError>;
