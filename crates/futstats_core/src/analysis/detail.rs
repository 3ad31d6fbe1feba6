use serde::Serialize;

use crate::models::{GameAction, Team, Zone};

/// One line of the per-cell tooltip/detail list: what happened, who did it,
/// when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneActionDetail {
    pub label: String,
    pub team_name: String,
    pub timestamp: u32,
}

/// Join a cell's matching ledger entries with team display names, in ledger
/// order. Entries attributable to neither team are skipped, consistent with
/// aggregation.
pub fn zone_action_details(
    actions: &[GameAction],
    zone: Zone,
    team_a: &Team,
    team_b: &Team,
) -> Vec<ZoneActionDetail> {
    actions
        .iter()
        .filter(|action| action.zone == zone)
        .filter_map(|action| {
            let team_name = if action.team_id == team_a.id {
                &team_a.name
            } else if action.team_id == team_b.id {
                &team_b.name
            } else {
                return None;
            };
            Some(ZoneActionDetail {
                label: action.label().to_string(),
                team_name: team_name.clone(),
                timestamp: action.timestamp,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionKind, TeamColors, POSSESSION_LABEL};
    use uuid::Uuid;

    fn team(id: &str, name: &str) -> Team {
        Team {
            id: id.to_string(),
            name: name.to_string(),
            colors: TeamColors::default(),
            players: vec![],
        }
    }

    fn action(kind: ActionKind, team_id: &str, zone: Zone, timestamp: u32) -> GameAction {
        GameAction {
            id: Uuid::new_v4(),
            kind,
            team_id: team_id.to_string(),
            player_id: None,
            zone,
            timestamp,
        }
    }

    #[test]
    fn test_details_join_labels_and_team_names() {
        let team_a = team("home", "Santos");
        let team_b = team("away", "Grêmio");
        let target = Zone::new(2, 2);
        let actions = vec![
            action(ActionKind::Possession, "home", target, 30),
            action(
                ActionKind::DiscreteAction { action_name: "Shot".to_string() },
                "away",
                target,
                45,
            ),
            action(ActionKind::Possession, "home", Zone::new(0, 0), 50),
        ];

        let details = zone_action_details(&actions, target, &team_a, &team_b);
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].label, POSSESSION_LABEL);
        assert_eq!(details[0].team_name, "Santos");
        assert_eq!(details[0].timestamp, 30);
        assert_eq!(details[1].label, "Shot");
        assert_eq!(details[1].team_name, "Grêmio");
    }

    #[test]
    fn test_details_skip_unattributable_entries() {
        let team_a = team("home", "Santos");
        let team_b = team("away", "Grêmio");
        let target = Zone::new(1, 1);
        let actions = vec![action(ActionKind::Possession, "ghost", target, 10)];

        assert!(zone_action_details(&actions, target, &team_a, &team_b).is_empty());
    }
}
