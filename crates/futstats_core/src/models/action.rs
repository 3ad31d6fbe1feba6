use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grid dimensions of the spatial partition of the playing surface.
pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 5;

/// Display label for possession events. The export filter keys on this exact
/// string, so it is part of the contract rather than a presentation detail.
pub const POSSESSION_LABEL: &str = "Posse de Bola";
/// Fallback label for a discrete action recorded without a name.
pub const GENERIC_ACTION_LABEL: &str = "Ação";

/// Identifier of a ledger entry. Assigned at creation, never reused.
pub type ActionId = Uuid;

/// Cell coordinate in the 5x5 partition.
///
/// Signed on purpose: the ledger keeps out-of-range coordinates (legacy or
/// hand-edited data) and aggregation excludes them, so the type must be able
/// to represent them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Zone {
    pub row: i32,
    pub col: i32,
}

impl Zone {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The single bounds predicate used by aggregation.
    pub fn in_bounds(&self) -> bool {
        (0..GRID_ROWS as i32).contains(&self.row) && (0..GRID_COLS as i32).contains(&self.col)
    }
}

/// What kind of event a ledger entry records.
///
/// Serialized with a `type` tag (`"possession"` / `"discrete-action"`), the
/// wire shape the render and storage collaborators already consume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ActionKind {
    /// Which team controls the ball; fed through the same aggregation
    /// pipeline as discrete actions.
    Possession,
    /// A named, operator-recorded event such as "Shot" or "Substitution".
    DiscreteAction { action_name: String },
}

/// One recorded match event, i.e. a ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameAction {
    pub id: ActionId,
    #[serde(flatten)]
    pub kind: ActionKind,
    /// Must equal one of the match's two team ids; enforced at append/update.
    pub team_id: String,
    /// Display-only roster reference; unknown ids render as "N/A".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    pub zone: Zone,
    /// Elapsed match-seconds at record time. Edits may set any value, so the
    /// ledger is not timestamp-monotonic.
    pub timestamp: u32,
}

impl GameAction {
    /// Display label: the action name, `"Posse de Bola"` for possession,
    /// `"Ação"` when a discrete action carries an empty name.
    pub fn label(&self) -> &str {
        match &self.kind {
            ActionKind::Possession => POSSESSION_LABEL,
            ActionKind::DiscreteAction { action_name } if action_name.is_empty() => {
                GENERIC_ACTION_LABEL
            }
            ActionKind::DiscreteAction { action_name } => action_name,
        }
    }

    pub fn is_possession(&self) -> bool {
        matches!(self.kind, ActionKind::Possession)
    }
}

/// Input for appending a new ledger entry. The ledger assigns the id; the
/// timestamp defaults to the session clock unless overridden (manual or
/// backdated entry).
#[derive(Debug, Clone)]
pub struct ActionDraft {
    pub kind: ActionKind,
    pub team_id: String,
    pub player_id: Option<String>,
    pub zone: Zone,
    pub timestamp: Option<u32>,
}

impl ActionDraft {
    pub fn possession(team_id: impl Into<String>, zone: Zone) -> Self {
        Self {
            kind: ActionKind::Possession,
            team_id: team_id.into(),
            player_id: None,
            zone,
            timestamp: None,
        }
    }

    pub fn discrete(
        action_name: impl Into<String>,
        team_id: impl Into<String>,
        zone: Zone,
    ) -> Self {
        Self {
            kind: ActionKind::DiscreteAction { action_name: action_name.into() },
            team_id: team_id.into(),
            player_id: None,
            zone,
            timestamp: None,
        }
    }

    pub fn with_player(mut self, player_id: impl Into<String>) -> Self {
        self.player_id = Some(player_id.into());
        self
    }

    /// Override the clock-supplied timestamp (backdated entry).
    pub fn at(mut self, timestamp: u32) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Field-wise merge patch for `ActionLedger::update`. Unset fields keep the
/// stored value; `player_id` distinguishes "leave alone" from "clear".
#[derive(Debug, Clone, Default)]
pub struct ActionPatch {
    pub kind: Option<ActionKind>,
    pub team_id: Option<String>,
    pub player_id: Option<Option<String>>,
    pub zone: Option<Zone>,
    pub timestamp: Option<u32>,
}

impl ActionPatch {
    pub fn team(team_id: impl Into<String>) -> Self {
        Self { team_id: Some(team_id.into()), ..Default::default() }
    }

    pub fn timestamp(timestamp: u32) -> Self {
        Self { timestamp: Some(timestamp), ..Default::default() }
    }

    pub fn with_timestamp(mut self, timestamp: u32) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = Some(zone);
        self
    }
}
