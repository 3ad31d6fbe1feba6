//! Derived statistics: the heat-map grid, intensity banding, and the
//! per-cell detail join consumed by rendering.

pub mod detail;
pub mod heatmap;
pub mod intensity;

pub use detail::{zone_action_details, ZoneActionDetail};
pub use heatmap::{aggregate, team_action_counts, HeatGrid, ZoneStats};
pub use intensity::HeatBand;
