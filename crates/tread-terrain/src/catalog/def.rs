//! Tile definition: one placeable tile type with its edge sockets.

use serde::{Deserialize, Serialize};

use crate::Direction;

/// Opaque edge code. Two edges fit together iff their sockets are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocketId(pub u32);

/// Full descriptor for a tile type.
#[derive(Clone, Debug, PartialEq)]
pub struct TileDef {
    /// Sprite name, also used for terrain classification (e.g. "tileSand_roadEast").
    pub name: String,
    /// Edge sockets in N, E, S, W order.
    pub sockets: [SocketId; 4],
    /// Relative spawn weight. Must be finite and positive.
    pub weight: f64,
}

impl TileDef {
    /// Creates a definition from raw socket codes.
    pub fn new(name: impl Into<String>, sockets: [u32; 4], weight: f64) -> Self {
        Self {
            name: name.into(),
            sockets: sockets.map(SocketId),
            weight,
        }
    }

    /// Socket on the given edge.
    #[inline]
    pub fn socket(&self, dir: Direction) -> SocketId {
        self.sockets[dir.index()]
    }

    /// Whether `other` may sit directly next to `self` in direction `dir`.
    #[inline]
    pub fn fits(&self, dir: Direction, other: &TileDef) -> bool {
        self.socket(dir) == other.socket(dir.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_compares_facing_edges() {
        let road_ns = TileDef::new("road_ns", [2, 0, 2, 0], 1.0);
        let road_ew = TileDef::new("road_ew", [0, 2, 0, 2], 1.0);

        assert!(road_ns.fits(Direction::North, &road_ns));
        assert!(!road_ns.fits(Direction::East, &road_ew));
        assert!(!road_ew.fits(Direction::North, &road_ns));
        assert!(road_ew.fits(Direction::East, &road_ew));
    }

    #[test]
    fn test_fits_is_symmetric() {
        let a = TileDef::new("a", [1, 2, 3, 4], 1.0);
        let b = TileDef::new("b", [3, 4, 1, 2], 1.0);
        for dir in Direction::ALL {
            assert_eq!(
                a.fits(dir, &b),
                b.fits(dir.opposite(), &a),
                "adjacency must be symmetric along {dir:?}"
            );
        }
    }
}
