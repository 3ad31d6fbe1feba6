use serde::{Deserialize, Serialize};

/// One of the two sides of a match. Fixed for a session's lifetime; roster
/// edits happen outside the live match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    /// Stable unique identifier, referenced by `GameAction::team_id`.
    pub id: String,
    pub name: String,
    pub colors: TeamColors,
    pub players: Vec<Player>,
}

/// Display colors carried for render consumers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TeamColors {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    /// Unique within the team.
    pub id: String,
    /// Jersey number.
    pub number: u8,
    pub name: String,
    pub is_starter: bool,
}

impl Team {
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Display label for a roster entry, e.g. `"10 - Ronaldo"`.
    /// Returns `None` for unknown ids; callers fall back to `"N/A"`.
    pub fn player_label(&self, player_id: &str) -> Option<String> {
        self.player(player_id).map(|p| format!("{} - {}", p.number, p.name))
    }

    pub fn starters(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_starter)
    }

    pub fn substitutes(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.is_starter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_with_roster() -> Team {
        Team {
            id: "t1".to_string(),
            name: "Botafogo".to_string(),
            colors: TeamColors { primary: "#000000".to_string(), secondary: "#ffffff".to_string() },
            players: vec![
                Player { id: "p1".to_string(), number: 10, name: "Ana".to_string(), is_starter: true },
                Player { id: "p2".to_string(), number: 7, name: "Bia".to_string(), is_starter: false },
            ],
        }
    }

    #[test]
    fn test_player_label_format() {
        let team = team_with_roster();
        assert_eq!(team.player_label("p1"), Some("10 - Ana".to_string()));
        assert_eq!(team.player_label("missing"), None);
    }

    #[test]
    fn test_starter_split() {
        let team = team_with_roster();
        assert_eq!(team.starters().count(), 1);
        assert_eq!(team.substitutes().count(), 1);
    }
}
