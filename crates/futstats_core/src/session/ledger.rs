use tracing::debug;
use uuid::Uuid;

use crate::error::LedgerError;
use crate::models::{ActionDraft, ActionId, ActionKind, ActionPatch, GameAction};

/// Canonical ordered store of a match's recorded events.
///
/// Entries are kept in insertion order; display order (`recent_first`) sorts
/// by timestamp instead, since edits can change a timestamp without moving
/// the entry. The ledger is constructed with the two team ids and rejects any
/// mutation that references a team outside that set.
#[derive(Debug, Clone)]
pub struct ActionLedger {
    team_a_id: String,
    team_b_id: String,
    actions: Vec<GameAction>,
}

impl ActionLedger {
    pub fn new(team_a_id: impl Into<String>, team_b_id: impl Into<String>) -> Self {
        Self { team_a_id: team_a_id.into(), team_b_id: team_b_id.into(), actions: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// All entries in insertion order.
    pub fn actions(&self) -> &[GameAction] {
        &self.actions
    }

    pub fn get(&self, id: ActionId) -> Option<&GameAction> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Append a new entry. A fresh id is assigned; the timestamp comes from
    /// the draft's override or else from `clock_time` (the session clock).
    pub fn append(
        &mut self,
        draft: ActionDraft,
        clock_time: u32,
    ) -> Result<GameAction, LedgerError> {
        self.check_team(&draft.team_id)?;

        let action = GameAction {
            id: Uuid::new_v4(),
            kind: draft.kind,
            team_id: draft.team_id,
            player_id: draft.player_id,
            zone: draft.zone,
            timestamp: draft.timestamp.unwrap_or(clock_time),
        };
        debug!(id = %action.id, label = action.label(), t = action.timestamp, "ledger append");
        self.actions.push(action.clone());
        Ok(action)
    }

    /// Merge `patch` into the entry identified by `id`.
    ///
    /// Validation happens before any field is touched, so a failed update
    /// leaves the entry exactly as it was.
    pub fn update(&mut self, id: ActionId, patch: ActionPatch) -> Result<GameAction, LedgerError> {
        if let Some(team_id) = &patch.team_id {
            self.check_team(team_id)?;
        }

        let action = self
            .actions
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(LedgerError::NotFound(id))?;

        if let Some(kind) = patch.kind {
            action.kind = kind;
        }
        if let Some(team_id) = patch.team_id {
            action.team_id = team_id;
        }
        if let Some(player_id) = patch.player_id {
            action.player_id = player_id;
        }
        if let Some(zone) = patch.zone {
            action.zone = zone;
        }
        if let Some(timestamp) = patch.timestamp {
            action.timestamp = timestamp;
        }
        debug!(id = %id, "ledger update");
        Ok(action.clone())
    }

    /// Delete the entry identified by `id`, returning it. Removal is not
    /// idempotent: a second removal of the same id fails with `NotFound`.
    pub fn remove(&mut self, id: ActionId) -> Result<GameAction, LedgerError> {
        let idx = self
            .actions
            .iter()
            .position(|a| a.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        debug!(id = %id, "ledger remove");
        Ok(self.actions.remove(idx))
    }

    /// Entries ordered by timestamp descending (most recent match-time
    /// first). The sort is stable, so equal timestamps keep insertion order.
    pub fn recent_first(&self) -> Vec<&GameAction> {
        let mut sorted: Vec<&GameAction> = self.actions.iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted
    }

    /// Distinct discrete-action names in first-appearance order; the source
    /// for the export dialog's checklist.
    pub fn action_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for action in &self.actions {
            if let ActionKind::DiscreteAction { action_name } = &action.kind {
                if !names.iter().any(|n| n == action_name) {
                    names.push(action_name.clone());
                }
            }
        }
        names
    }

    fn check_team(&self, team_id: &str) -> Result<(), LedgerError> {
        if team_id == self.team_a_id || team_id == self.team_b_id {
            Ok(())
        } else {
            Err(LedgerError::InvalidTeamReference { team_id: team_id.to_string() })
        }
    }
}
