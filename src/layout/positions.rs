//! Level-to-coordinate assignment.

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::LayoutConfig;
use crate::graph::{LevelMap, LocalId, MetadataMap};

/// Canvas position of a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Positions keyed by local id, grouped by ascending level.
pub type PositionMap = IndexMap<LocalId, Position>;

/// Place every node in its level's column, vertically centered on `start_y`.
///
/// Within a level nodes keep the order of `metadata`. `y` is rounded to the
/// nearest integer, halves rounding up. Ids present in only one of the two
/// maps are not placed.
pub fn assign_positions(levels: &LevelMap, metadata: &MetadataMap, config: &LayoutConfig) -> PositionMap {
    let ordered: LevelMap = metadata
        .keys()
        .filter_map(|id| levels.get(id).map(|&level| (id.clone(), level)))
        .collect();

    let mut positions = PositionMap::with_capacity(ordered.len());
    for (level, ids) in crate::graph::group_by_level(&ordered) {
        let x = config.start_x + level as f64 * config.x_spacing;
        let band = (ids.len() - 1) as f64 * config.y_spacing;
        let top = config.start_y - band / 2.0;

        for (index, id) in ids.into_iter().enumerate() {
            let y = round_half_up(top + index as f64 * config.y_spacing);
            positions.insert(id.to_string(), Position { x, y });
        }
    }
    positions
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
