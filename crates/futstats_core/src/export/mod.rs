//! # Export Projection
//!
//! A one-shot, filtered re-aggregation of the ledger used to produce a static
//! snapshot for the export image. Selection is by display name (the
//! possession pseudo-name `"Posse de Bola"` plus discrete action names), so
//! two discrete actions sharing a name are indistinguishable to the filter.
//! Known limitation of the name-keyed contract.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::analysis::{aggregate, team_action_counts, HeatGrid};
use crate::models::{ActionKind, GameAction, POSSESSION_LABEL};

/// Snapshot handed to the export renderer.
///
/// Owns a copy of the filtered actions: an in-flight export keeps rendering
/// the state it was invoked with even while the live ledger is edited, and
/// cancelling the export is just dropping this value.
#[derive(Debug, Clone, Serialize)]
pub struct HeatMapExport {
    /// The filtered ledger subset, in ledger order.
    pub actions: Vec<GameAction>,
    /// Grid aggregated from exactly `actions`.
    pub grid: HeatGrid,
    /// The selection that produced this snapshot, sorted for display.
    pub included: Vec<String>,
    /// Filtered per-team counts for the export footer.
    pub team_a_actions: u32,
    pub team_b_actions: u32,
}

/// Apply the name-keyed filter and aggregate the surviving subset.
///
/// An action is included iff it is a possession event and `"Posse de Bola"`
/// is selected, or its action name is selected.
pub fn project_for_export(
    actions: &[GameAction],
    selected: &HashSet<String>,
    team_a_id: &str,
    team_b_id: &str,
) -> HeatMapExport {
    let filtered: Vec<GameAction> =
        actions.iter().filter(|a| is_selected(a, selected)).cloned().collect();
    let grid = aggregate(&filtered, team_a_id, team_b_id);
    let (team_a_actions, team_b_actions) =
        team_action_counts(&filtered, team_a_id, team_b_id);

    let mut included: Vec<String> = selected.iter().cloned().collect();
    included.sort();

    debug!(selected = included.len(), kept = filtered.len(), total = actions.len(),
        "export projection");

    HeatMapExport { actions: filtered, grid, included, team_a_actions, team_b_actions }
}

fn is_selected(action: &GameAction, selected: &HashSet<String>) -> bool {
    match &action.kind {
        ActionKind::Possession => selected.contains(POSSESSION_LABEL),
        ActionKind::DiscreteAction { action_name } => selected.contains(action_name),
    }
}

/// What the export dialog offers: the possession entry plus each distinct
/// discrete name, with occurrence counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionCatalog {
    pub possession_count: u32,
    pub discrete: Vec<ActionCatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionCatalogEntry {
    pub name: String,
    pub count: u32,
}

/// Build the dialog checklist from a ledger: possession count plus per-name
/// counts in first-appearance order.
pub fn action_catalog(actions: &[GameAction]) -> ActionCatalog {
    let mut possession_count = 0;
    let mut discrete: Vec<ActionCatalogEntry> = Vec::new();
    for action in actions {
        match &action.kind {
            ActionKind::Possession => possession_count += 1,
            ActionKind::DiscreteAction { action_name } => {
                if let Some(entry) = discrete.iter_mut().find(|e| &e.name == action_name) {
                    entry.count += 1;
                } else {
                    discrete.push(ActionCatalogEntry { name: action_name.clone(), count: 1 });
                }
            }
        }
    }
    ActionCatalog { possession_count, discrete }
}

/// Suggested file name for the exported image:
/// `mapa_calor_{teamA}_vs_{teamB}.png`, whitespace replaced by underscores.
pub fn export_file_name(team_a_name: &str, team_b_name: &str) -> String {
    format!("mapa_calor_{}_vs_{}.png", sanitize(team_a_name), sanitize(team_b_name))
}

fn sanitize(name: &str) -> String {
    name.chars().map(|c| if c.is_whitespace() { '_' } else { c }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Zone;
    use uuid::Uuid;

    const TEAM_A: &str = "home";
    const TEAM_B: &str = "away";

    fn possession(team_id: &str) -> GameAction {
        GameAction {
            id: Uuid::new_v4(),
            kind: ActionKind::Possession,
            team_id: team_id.to_string(),
            player_id: None,
            zone: Zone::new(2, 2),
            timestamp: 0,
        }
    }

    fn discrete(name: &str, team_id: &str) -> GameAction {
        GameAction {
            id: Uuid::new_v4(),
            kind: ActionKind::DiscreteAction { action_name: name.to_string() },
            team_id: team_id.to_string(),
            player_id: None,
            zone: Zone::new(1, 1),
            timestamp: 0,
        }
    }

    fn selection(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_possession_only_selection() {
        let actions =
            vec![possession(TEAM_A), discrete("Shot", TEAM_A), discrete("Shot", TEAM_B)];
        let export =
            project_for_export(&actions, &selection(&[POSSESSION_LABEL]), TEAM_A, TEAM_B);

        assert_eq!(export.actions.len(), 1);
        assert!(export.actions[0].is_possession());
        let total: u32 = export.grid.iter().map(|(_, stats)| stats.total).sum();
        assert_eq!(total, 1);
        assert_eq!((export.team_a_actions, export.team_b_actions), (1, 0));
    }

    #[test]
    fn test_name_selection_excludes_possession() {
        let actions =
            vec![possession(TEAM_A), discrete("Shot", TEAM_B), discrete("Falta", TEAM_B)];
        let export = project_for_export(&actions, &selection(&["Shot"]), TEAM_A, TEAM_B);

        assert_eq!(export.actions.len(), 1);
        assert_eq!(export.actions[0].label(), "Shot");
        assert_eq!((export.team_a_actions, export.team_b_actions), (0, 1));
    }

    #[test]
    fn test_empty_selection_yields_empty_snapshot() {
        let actions = vec![possession(TEAM_A), discrete("Shot", TEAM_B)];
        let export = project_for_export(&actions, &HashSet::new(), TEAM_A, TEAM_B);

        assert!(export.actions.is_empty());
        assert_eq!(export.grid.max_total(), 0);
    }

    #[test]
    fn test_snapshot_is_independent_of_source() {
        let mut actions = vec![possession(TEAM_A)];
        let export =
            project_for_export(&actions, &selection(&[POSSESSION_LABEL]), TEAM_A, TEAM_B);

        // Mutating the live list after projection must not affect the snapshot.
        actions.clear();
        assert_eq!(export.actions.len(), 1);
    }

    #[test]
    fn test_action_catalog_counts() {
        let actions = vec![
            possession(TEAM_A),
            possession(TEAM_B),
            discrete("Shot", TEAM_A),
            discrete("Shot", TEAM_B),
            discrete("Falta", TEAM_A),
        ];
        let catalog = action_catalog(&actions);

        assert_eq!(catalog.possession_count, 2);
        assert_eq!(
            catalog.discrete,
            vec![
                ActionCatalogEntry { name: "Shot".to_string(), count: 2 },
                ActionCatalogEntry { name: "Falta".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_export_file_name_replaces_whitespace() {
        assert_eq!(
            export_file_name("São Paulo", "Atlético MG"),
            "mapa_calor_São_Paulo_vs_Atlético_MG.png"
        );
    }
}
