//! # futstats_core - Match Session & Spatial Aggregation Engine
//!
//! In-memory model of a live football match (clock, play/pause state, ball
//! possession, and an append/edit/delete-capable event ledger) plus the pure
//! aggregation that projects the ledger onto a 5x5 heat-map grid with
//! per-team, per-zone statistics.
//!
//! ## Features
//! - Single-writer session state machine, passed explicitly (no globals)
//! - Order-independent, recompute-on-read heat-map aggregation
//! - Name-keyed export projection over an immutable snapshot
//! - Versioned, checksummed match archives (MessagePack + LZ4 + SHA256)

pub mod analysis;
pub mod error;
pub mod export;
pub mod models;
pub mod save;
pub mod session;

// Re-export the engine surface
pub use analysis::{
    aggregate, team_action_counts, zone_action_details, HeatBand, HeatGrid, ZoneActionDetail,
    ZoneStats,
};
pub use error::{LedgerError, SessionError};
pub use export::{
    action_catalog, export_file_name, project_for_export, ActionCatalog, ActionCatalogEntry,
    HeatMapExport,
};
pub use models::{
    ActionDraft, ActionId, ActionKind, ActionPatch, GameAction, Player, Team, TeamColors, Zone,
    GENERIC_ACTION_LABEL, GRID_COLS, GRID_ROWS, POSSESSION_LABEL,
};
pub use save::{
    decompress_and_deserialize, serialize_and_compress, MatchArchive, SaveError, ARCHIVE_VERSION,
};
pub use session::{format_clock, ActionLedger, MatchSession};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
