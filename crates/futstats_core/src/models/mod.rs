pub mod action;
pub mod team;

pub use action::{
    ActionDraft, ActionId, ActionKind, ActionPatch, GameAction, Zone, GENERIC_ACTION_LABEL,
    GRID_COLS, GRID_ROWS, POSSESSION_LABEL,
};
pub use team::{Player, Team, TeamColors};
