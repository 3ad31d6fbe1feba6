//! # Heat Map Aggregation
//!
//! Projects a sequence of ledger entries onto the fixed 5x5 zone grid. The
//! projection is a pure function: no side effects, safe to call repeatedly
//! over any subset, and order-independent because accumulation is
//! commutative. It is the single mechanism shared by the live display and
//! the export path.

use serde::Serialize;
use tracing::{trace, warn};

use crate::analysis::intensity::HeatBand;
use crate::models::{GameAction, Zone, GRID_COLS, GRID_ROWS};

/// Per-zone counters. `total == team_a + team_b` always: an entry that can be
/// attributed to neither team increments nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ZoneStats {
    pub team_a: u32,
    pub team_b: u32,
    pub total: u32,
}

/// The derived 5x5 grid plus the maximum cell total used for intensity
/// normalization. Recomputed from the ledger on every query; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatGrid {
    cells: [[ZoneStats; GRID_COLS]; GRID_ROWS],
    max_total: u32,
}

impl Default for HeatGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl HeatGrid {
    pub fn new() -> Self {
        Self { cells: [[ZoneStats::default(); GRID_COLS]; GRID_ROWS], max_total: 0 }
    }

    /// 0 when the input yielded no in-bounds entries.
    pub fn max_total(&self) -> u32 {
        self.max_total
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&ZoneStats> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub fn zone_stats(&self, zone: Zone) -> Option<&ZoneStats> {
        if zone.in_bounds() {
            Some(&self.cells[zone.row as usize][zone.col as usize])
        } else {
            None
        }
    }

    pub fn rows(&self) -> &[[ZoneStats; GRID_COLS]; GRID_ROWS] {
        &self.cells
    }

    /// Iterate every cell with its zone coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Zone, &ZoneStats)> {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .map(move |(col, stats)| (Zone::new(row as i32, col as i32), stats))
        })
    }

    /// Intensity band for one cell, normalized against `max_total`.
    pub fn band(&self, row: usize, col: usize) -> Option<HeatBand> {
        self.cell(row, col).map(|stats| HeatBand::classify(stats.total, self.max_total))
    }

    /// Bump the counters for one entry.
    ///
    /// Out-of-bounds zones are silently dropped (tolerance for malformed or
    /// legacy data, not a validation layer). An entry attributed to neither
    /// team is skipped entirely so `total == team_a + team_b` holds.
    fn accumulate(&mut self, action: &GameAction, team_a_id: &str, team_b_id: &str) {
        if !action.zone.in_bounds() {
            warn!(id = %action.id, row = action.zone.row, col = action.zone.col,
                "skipping out-of-bounds zone in aggregation");
            return;
        }
        let cell = &mut self.cells[action.zone.row as usize][action.zone.col as usize];
        if action.team_id == team_a_id {
            cell.team_a += 1;
        } else if action.team_id == team_b_id {
            cell.team_b += 1;
        } else {
            warn!(id = %action.id, team_id = %action.team_id,
                "skipping action attributable to neither team");
            return;
        }
        cell.total += 1;
    }

    fn finalize(&mut self) {
        self.max_total =
            self.cells.iter().flatten().map(|cell| cell.total).max().unwrap_or(0);
    }
}

/// Project `actions` onto the zone grid.
///
/// Both team ids are taken so that entries belonging to neither team can be
/// skipped rather than misattributed. Given the same input set, the output is
/// identical under any permutation.
pub fn aggregate<'a, I>(actions: I, team_a_id: &str, team_b_id: &str) -> HeatGrid
where
    I: IntoIterator<Item = &'a GameAction>,
{
    let mut grid = HeatGrid::new();
    let mut scanned = 0usize;
    for action in actions {
        grid.accumulate(action, team_a_id, team_b_id);
        scanned += 1;
    }
    grid.finalize();
    trace!(scanned, max_total = grid.max_total, "aggregation pass");
    grid
}

/// Per-team entry counts over a full action list, independent of zone bounds.
/// Used by the summary footer next to the heat map.
pub fn team_action_counts<'a, I>(actions: I, team_a_id: &str, team_b_id: &str) -> (u32, u32)
where
    I: IntoIterator<Item = &'a GameAction>,
{
    let mut team_a = 0;
    let mut team_b = 0;
    for action in actions {
        if action.team_id == team_a_id {
            team_a += 1;
        } else if action.team_id == team_b_id {
            team_b += 1;
        }
    }
    (team_a, team_b)
}
