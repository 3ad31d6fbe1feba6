use std::collections::HashSet;

use tracing::debug;

use crate::analysis::{
    aggregate, team_action_counts, zone_action_details, HeatGrid, ZoneActionDetail,
};
use crate::error::{LedgerError, SessionError};
use crate::export::{project_for_export, HeatMapExport};
use crate::models::{ActionDraft, ActionId, ActionPatch, GameAction, Team, Zone};
use crate::save::MatchArchive;
use crate::session::clock::format_clock;
use crate::session::ledger::ActionLedger;

/// The live match: clock, play state, possession holder, and the action
/// ledger it owns exclusively.
///
/// Instantiated once per match and passed by reference to whoever needs it;
/// there is no ambient singleton. Two states only, `Paused` (initial) and
/// `Playing`; ending a match is the caller's concern and consumes the session
/// via [`MatchSession::into_archive`].
#[derive(Debug, Clone)]
pub struct MatchSession {
    team_a: Team,
    team_b: Team,
    ledger: ActionLedger,
    current_time: u32,
    is_playing: bool,
    current_possession: Option<String>,
}

impl MatchSession {
    pub fn new(team_a: Team, team_b: Team) -> Result<Self, SessionError> {
        if team_a.id == team_b.id {
            return Err(SessionError::DuplicateTeamId(team_a.id));
        }
        let ledger = ActionLedger::new(&team_a.id, &team_b.id);
        Ok(Self {
            team_a,
            team_b,
            ledger,
            current_time: 0,
            is_playing: false,
            current_possession: None,
        })
    }

    pub fn team_a(&self) -> &Team {
        &self.team_a
    }

    pub fn team_b(&self) -> &Team {
        &self.team_b
    }

    pub fn team_for(&self, team_id: &str) -> Option<&Team> {
        if team_id == self.team_a.id {
            Some(&self.team_a)
        } else if team_id == self.team_b.id {
            Some(&self.team_b)
        } else {
            None
        }
    }

    pub fn ledger(&self) -> &ActionLedger {
        &self.ledger
    }

    pub fn current_time(&self) -> u32 {
        self.current_time
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_possession(&self) -> Option<&str> {
        self.current_possession.as_deref()
    }

    // ========================
    // Clock
    // ========================

    /// Flip between `Paused` and `Playing`; returns the new playing state.
    pub fn toggle_play_pause(&mut self) -> bool {
        self.is_playing = !self.is_playing;
        debug!(playing = self.is_playing, t = self.current_time, "play/pause toggled");
        self.is_playing
    }

    /// Direct clock set: callers pass the already-computed elapsed total, not
    /// an offset. Independent of any action's own timestamp.
    pub fn update_timer(&mut self, seconds: u32) {
        self.current_time = seconds;
    }

    /// The cooperative 1-second callback body: advances the clock by one
    /// while playing, no-op while paused. Returns the current total.
    pub fn tick(&mut self) -> u32 {
        if self.is_playing {
            self.current_time += 1;
        }
        self.current_time
    }

    /// Zero the clock regardless of play state. Never touches the ledger.
    pub fn reset_timer(&mut self) {
        self.current_time = 0;
    }

    /// Clock formatted `MM:SS` for display.
    pub fn clock_display(&self) -> String {
        format_clock(self.current_time)
    }

    // ========================
    // Possession
    // ========================

    /// State transition only: set the current holder. Logging the change into
    /// the ledger is the separate [`MatchSession::record_possession_change`]
    /// step; [`MatchSession::claim_possession`] does both.
    pub fn set_possession(&mut self, team_id: &str) -> Result<(), LedgerError> {
        if self.team_for(team_id).is_none() {
            return Err(LedgerError::InvalidTeamReference { team_id: team_id.to_string() });
        }
        self.current_possession = Some(team_id.to_string());
        debug!(team_id, "possession set");
        Ok(())
    }

    /// Append the possession event for the current holder at the current
    /// clock time and the zone of interaction.
    pub fn record_possession_change(&mut self, zone: Zone) -> Result<GameAction, SessionError> {
        let holder = self.current_possession.clone().ok_or(SessionError::NoPossession)?;
        let draft = ActionDraft::possession(holder, zone);
        Ok(self.ledger.append(draft, self.current_time)?)
    }

    /// Convenience layer preserving the one-call behavior of the possession
    /// buttons: sets the holder and records the event.
    pub fn claim_possession(
        &mut self,
        team_id: &str,
        zone: Zone,
    ) -> Result<GameAction, SessionError> {
        self.set_possession(team_id)?;
        self.record_possession_change(zone)
    }

    // ========================
    // Ledger operations
    // ========================

    /// Append an event; the session clock supplies the timestamp unless the
    /// draft overrides it.
    pub fn record_action(&mut self, draft: ActionDraft) -> Result<GameAction, LedgerError> {
        self.ledger.append(draft, self.current_time)
    }

    pub fn update_action(
        &mut self,
        id: ActionId,
        patch: ActionPatch,
    ) -> Result<GameAction, LedgerError> {
        self.ledger.update(id, patch)
    }

    pub fn remove_action(&mut self, id: ActionId) -> Result<GameAction, LedgerError> {
        self.ledger.remove(id)
    }

    // ========================
    // Derived views
    // ========================

    /// The heat map over the full ledger, recomputed on every call.
    pub fn heat_map(&self) -> HeatGrid {
        aggregate(self.ledger.actions(), &self.team_a.id, &self.team_b.id)
    }

    /// Detail list for one cell: label, team name, timestamp per matching
    /// ledger entry.
    pub fn zone_actions(&self, zone: Zone) -> Vec<ZoneActionDetail> {
        zone_action_details(self.ledger.actions(), zone, &self.team_a, &self.team_b)
    }

    /// Per-team totals over the full ledger (bounds-independent), for the
    /// summary footer.
    pub fn team_action_counts(&self) -> (u32, u32) {
        team_action_counts(self.ledger.actions(), &self.team_a.id, &self.team_b.id)
    }

    /// Filtered snapshot + grid for export. The returned value owns a copy of
    /// the selected actions, so in-flight exports never observe later edits.
    pub fn export_heat_map(&self, selected: &HashSet<String>) -> HeatMapExport {
        project_for_export(self.ledger.actions(), selected, &self.team_a.id, &self.team_b.id)
    }

    /// End the match: consume the session into the persisted record shape.
    pub fn into_archive(self) -> MatchArchive {
        MatchArchive::new(
            self.team_a,
            self.team_b,
            self.ledger.actions().to_vec(),
            self.current_time,
        )
    }
}
