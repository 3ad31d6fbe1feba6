use thiserror::Error;

use crate::models::ActionId;

/// Failures of ledger mutations. All recoverable: the caller reports and
/// leaves its own state unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("action not found: {0}")]
    NotFound(ActionId),

    #[error("team {team_id} is not part of this match")]
    InvalidTeamReference { team_id: String },
}

/// Failures of session-level operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no team currently holds possession")]
    NoPossession,

    #[error("both teams share the id {0}")]
    DuplicateTeamId(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
