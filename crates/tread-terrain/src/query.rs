//! Query surface for gameplay code.

use crate::Terrain;

/// World-space terrain lookup.
///
/// Movement modifiers, obstacle placement and spawn checks go through this
/// trait only; they never see solver state.
pub trait TerrainQuery {
    /// Terrain under the world point `(world_x, world_y)`, or [`Terrain::Out`]
    /// when the point is off the map.
    fn terrain_at(&self, world_x: f64, world_y: f64) -> Terrain;

    /// Whether the point lies on the map.
    fn contains(&self, world_x: f64, world_y: f64) -> bool {
        self.terrain_at(world_x, world_y) != Terrain::Out
    }
}
