use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};

use super::error::SaveError;
use super::ARCHIVE_VERSION;
use crate::analysis::{aggregate, zone_action_details, HeatGrid, ZoneActionDetail};
use crate::models::{GameAction, Team, Zone};

/// The persisted record of a finished match: both full rosters, the complete
/// action ledger, and the final clock value. Serialized whole; no partial or
/// streaming persistence.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MatchArchive {
    /// Archive format version for migration.
    pub version: u32,

    /// Save timestamp (unix milliseconds).
    pub saved_at: u64,

    pub team_a: Team,
    pub team_b: Team,

    /// The complete ledger, every field, in insertion order.
    pub actions: Vec<GameAction>,

    /// Final `current_time` of the session.
    pub duration_seconds: u32,
}

impl MatchArchive {
    pub fn new(team_a: Team, team_b: Team, actions: Vec<GameAction>, duration_seconds: u32) -> Self {
        Self {
            version: ARCHIVE_VERSION,
            saved_at: current_timestamp(),
            team_a,
            team_b,
            actions,
            duration_seconds,
        }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.team_a.id == self.team_b.id {
            return Err(SaveError::Corrupted);
        }

        // Action ids must be unique within a match
        let mut ids = HashSet::new();
        for action in &self.actions {
            if !ids.insert(action.id) {
                return Err(SaveError::Corrupted);
            }
        }

        Ok(())
    }

    /// Heat map over the archived ledger. Saved matches render through the
    /// same aggregation as live ones.
    pub fn heat_map(&self) -> HeatGrid {
        aggregate(&self.actions, &self.team_a.id, &self.team_b.id)
    }

    pub fn zone_actions(&self, zone: Zone) -> Vec<ZoneActionDetail> {
        zone_action_details(&self.actions, zone, &self.team_a, &self.team_b)
    }
}

/// Serialize and compress an archive.
pub fn serialize_and_compress(archive: &MatchArchive) -> Result<Vec<u8>, SaveError> {
    // Validate before serialization
    archive.validate()?;

    // 1. Serialize to MessagePack with field names
    let msgpack = to_vec_named(archive).map_err(SaveError::Serialization)?;

    // 2. Compress with LZ4 (size prepended for easy decompression)
    let compressed = compress_prepend_size(&msgpack);

    // 3. Add SHA256 checksum at the end
    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

/// Decompress and deserialize an archive.
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<MatchArchive, SaveError> {
    // Check minimum size (header + checksum)
    if bytes.len() < 4 + 32 {
        return Err(SaveError::Corrupted);
    }

    // Split payload and checksum
    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - 32);

    // Verify checksum
    let mut hasher = Sha256::new();
    hasher.update(payload);
    let calculated_checksum = hasher.finalize();

    if &calculated_checksum[..] != checksum_bytes {
        return Err(SaveError::ChecksumMismatch);
    }

    // Decompress
    let msgpack = decompress_size_prepended(payload).map_err(|_| SaveError::Decompression)?;

    // Deserialize
    let archive: MatchArchive = from_slice(&msgpack).map_err(SaveError::Deserialization)?;

    // Validate version
    if archive.version > ARCHIVE_VERSION {
        return Err(SaveError::VersionMismatch {
            found: archive.version,
            expected: ARCHIVE_VERSION,
        });
    }

    archive.validate()?;

    Ok(archive)
}

pub fn current_timestamp() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionKind, TeamColors, Zone};
    use uuid::Uuid;

    fn team(id: &str, name: &str) -> Team {
        Team {
            id: id.to_string(),
            name: name.to_string(),
            colors: TeamColors::default(),
            players: vec![],
        }
    }

    fn shot(team_id: &str, row: i32, col: i32, timestamp: u32) -> GameAction {
        GameAction {
            id: Uuid::new_v4(),
            kind: ActionKind::DiscreteAction { action_name: "Shot".to_string() },
            team_id: team_id.to_string(),
            player_id: None,
            zone: Zone::new(row, col),
            timestamp,
        }
    }

    fn archive() -> MatchArchive {
        MatchArchive::new(
            team("home", "Santos"),
            team("away", "Grêmio"),
            vec![shot("home", 2, 2, 30), shot("away", 0, 0, 65)],
            5400,
        )
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let archive = archive();

        let serialized = serialize_and_compress(&archive).unwrap();
        let deserialized = decompress_and_deserialize(&serialized).unwrap();

        assert_eq!(deserialized.version, archive.version);
        assert_eq!(deserialized.duration_seconds, 5400);
        assert_eq!(deserialized.actions, archive.actions);
        assert_eq!(deserialized.team_a.name, "Santos");
    }

    #[test]
    fn test_checksum_validation() {
        let archive = archive();
        let mut serialized = serialize_and_compress(&archive).unwrap();

        // Corrupt the checksum
        if let Some(last) = serialized.last_mut() {
            *last = last.wrapping_add(1);
        }

        let result = decompress_and_deserialize(&serialized);
        assert!(matches!(result, Err(SaveError::ChecksumMismatch)));
    }

    #[test]
    fn test_payload_corruption_is_detected() {
        let archive = archive();
        let mut serialized = serialize_and_compress(&archive).unwrap();

        // Flip a payload byte; the checksum no longer matches
        serialized[10] = serialized[10].wrapping_add(1);

        assert!(decompress_and_deserialize(&serialized).is_err());
    }

    #[test]
    fn test_truncated_input_is_corrupted() {
        assert!(matches!(
            decompress_and_deserialize(&[0u8; 10]),
            Err(SaveError::Corrupted)
        ));
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let mut archive = archive();
        archive.version = ARCHIVE_VERSION + 1;

        let serialized = serialize_and_compress(&archive).unwrap();
        let result = decompress_and_deserialize(&serialized);
        assert!(matches!(result, Err(SaveError::VersionMismatch { .. })));
        assert!(result.unwrap_err().is_recoverable());
    }

    #[test]
    fn test_duplicate_action_ids_fail_validation() {
        let mut archive = archive();
        let dup = archive.actions[0].clone();
        archive.actions.push(dup);

        assert!(matches!(archive.validate(), Err(SaveError::Corrupted)));
        assert!(serialize_and_compress(&archive).is_err());
    }

    #[test]
    fn test_archived_heat_map_matches_ledger() {
        let archive = archive();
        let grid = archive.heat_map();
        assert_eq!(grid.cell(2, 2).unwrap().team_a, 1);
        assert_eq!(grid.cell(0, 0).unwrap().team_b, 1);
        assert_eq!(grid.max_total(), 1);
    }
}
