//! Tile catalog: validated, ordered tile definitions with O(1) lookup by [`TileId`].

use hashbrown::HashMap;
use thiserror::Error;

use super::{SocketId, TileDef};
use crate::Direction;

/// Index of a tile in its catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u16);

impl TileId {
    /// Position of the tile in the catalog's definition list.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error reading a manifest file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// RON deserialization error.
    #[error("ron parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    /// The catalog has no tiles.
    #[error("catalog contains no tiles")]
    Empty,

    /// More tiles than a [`TileId`] can address.
    #[error("catalog has {0} tiles, more than a tile id can address")]
    TooManyTiles(usize),

    /// Two tiles share a name.
    #[error("duplicate tile name: {0}")]
    DuplicateName(String),

    /// A weight that is zero, negative, or not finite. Such a tile could never be drawn.
    #[error("tile {name} has invalid weight {weight}")]
    InvalidWeight {
        /// Offending tile.
        name: String,
        /// Offending weight.
        weight: f64,
    },

    /// The designated default tile is not in the catalog.
    #[error("default tile {0} is not in the catalog")]
    UnknownDefault(String),
}

// ---------------------------------------------------------------------------
// TileCatalog
// ---------------------------------------------------------------------------

/// Immutable set of tile types available to the solver.
#[derive(Clone, Debug)]
pub struct TileCatalog {
    tiles: Vec<TileDef>,
    name_to_id: HashMap<String, TileId>,
    default_tile: TileId,
}

impl TileCatalog {
    /// Validates `tiles` and builds a catalog.
    ///
    /// `default_tile` names the tile used for the fallback map; when `None`
    /// the first tile is the default.
    ///
    /// # Errors
    ///
    /// Fails on an empty list, a duplicate name, a weight that is not a
    /// positive finite number, or an unknown default.
    pub fn new(tiles: Vec<TileDef>, default_tile: Option<&str>) -> Result<Self, CatalogError> {
        if tiles.is_empty() {
            return Err(CatalogError::Empty);
        }
        if tiles.len() > u16::MAX as usize + 1 {
            return Err(CatalogError::TooManyTiles(tiles.len()));
        }

        let mut name_to_id = HashMap::with_capacity(tiles.len());
        for (i, def) in tiles.iter().enumerate() {
            if !(def.weight.is_finite() && def.weight > 0.0) {
                return Err(CatalogError::InvalidWeight {
                    name: def.name.clone(),
                    weight: def.weight,
                });
            }
            if name_to_id.insert(def.name.clone(), TileId(i as u16)).is_some() {
                return Err(CatalogError::DuplicateName(def.name.clone()));
            }
        }

        let default_tile = match default_tile {
            Some(name) => *name_to_id
                .get(name)
                .ok_or_else(|| CatalogError::UnknownDefault(name.to_string()))?,
            None => TileId(0),
        };

        Ok(Self {
            tiles,
            name_to_id,
            default_tile,
        })
    }

    /// Number of tile types.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false` for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns the definition for the given tile.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn get(&self, id: TileId) -> &TileDef {
        &self.tiles[id.index()]
    }

    /// Socket of tile `id` on edge `dir`.
    #[inline]
    pub fn socket(&self, id: TileId, dir: Direction) -> SocketId {
        self.tiles[id.index()].socket(dir)
    }

    /// Spawn weight of tile `id`.
    #[inline]
    pub fn weight(&self, id: TileId) -> f64 {
        self.tiles[id.index()].weight
    }

    /// Looks up a tile by name.
    pub fn lookup_by_name(&self, name: &str) -> Option<TileId> {
        self.name_to_id.get(name).copied()
    }

    /// The tile used to fill the fallback map.
    pub fn default_tile(&self) -> TileId {
        self.default_tile
    }

    /// All tile ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        (0..self.tiles.len()).map(|i| TileId(i as u16))
    }

    /// All definitions in catalog order.
    pub fn tiles(&self) -> &[TileDef] {
        &self.tiles
    }

    /// Edges whose socket no tile in the catalog can face.
    ///
    /// A tile with a dangling edge can only be placed with that edge on the
    /// map border. Not an error, but usually a typo in the manifest.
    pub fn dangling_sockets(&self) -> Vec<(TileId, Direction)> {
        let mut dangling = Vec::new();
        for id in self.ids() {
            for dir in Direction::ALL {
                let socket = self.socket(id, dir);
                let matched = self
                    .ids()
                    .any(|other| self.socket(other, dir.opposite()) == socket);
                if !matched {
                    dangling.push((id, dir));
                }
            }
        }
        dangling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grass_and_sand() -> Vec<TileDef> {
        vec![
            TileDef::new("grass", [0, 0, 0, 0], 10.0),
            TileDef::new("sand", [1, 1, 1, 1], 5.0),
        ]
    }

    #[test]
    fn test_new_assigns_sequential_ids() {
        let catalog = TileCatalog::new(grass_and_sand(), None).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup_by_name("grass"), Some(TileId(0)));
        assert_eq!(catalog.lookup_by_name("sand"), Some(TileId(1)));
        assert_eq!(catalog.lookup_by_name("water"), None);
        assert_eq!(catalog.get(TileId(1)).name, "sand");
    }

    #[test]
    fn test_socket_and_weight_lookup() {
        let catalog = TileCatalog::new(grass_and_sand(), None).unwrap();
        assert_eq!(catalog.socket(TileId(1), Direction::West), SocketId(1));
        assert_eq!(catalog.weight(TileId(0)), 10.0);
    }

    #[test]
    fn test_default_tile_is_first_unless_named() {
        let first = TileCatalog::new(grass_and_sand(), None).unwrap();
        assert_eq!(first.default_tile(), TileId(0));

        let named = TileCatalog::new(grass_and_sand(), Some("sand")).unwrap();
        assert_eq!(named.default_tile(), TileId(1));
    }

    #[test]
    fn test_unknown_default_rejected() {
        let result = TileCatalog::new(grass_and_sand(), Some("lava"));
        assert!(matches!(result, Err(CatalogError::UnknownDefault(name)) if name == "lava"));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            TileCatalog::new(Vec::new(), None),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut tiles = grass_and_sand();
        tiles.push(TileDef::new("grass", [2, 2, 2, 2], 1.0));
        let result = TileCatalog::new(tiles, None);
        assert!(matches!(result, Err(CatalogError::DuplicateName(name)) if name == "grass"));
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        for weight in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let mut tiles = grass_and_sand();
            tiles.push(TileDef::new("bad", [0, 0, 0, 0], weight));
            let result = TileCatalog::new(tiles, None);
            assert!(
                matches!(result, Err(CatalogError::InvalidWeight { ref name, .. }) if name == "bad"),
                "weight {weight} should be rejected"
            );
        }
    }

    #[test]
    fn test_dangling_sockets_reported() {
        let tiles = vec![
            TileDef::new("grass", [0, 0, 0, 0], 1.0),
            // East edge 9 has no matching west edge anywhere.
            TileDef::new("odd", [0, 9, 0, 0], 1.0),
        ];
        let catalog = TileCatalog::new(tiles, None).unwrap();
        assert_eq!(
            catalog.dangling_sockets(),
            vec![(TileId(1), Direction::East)]
        );
    }

    #[test]
    fn test_closed_catalog_has_no_dangling_sockets() {
        let catalog = TileCatalog::new(grass_and_sand(), None).unwrap();
        assert!(catalog.dangling_sockets().is_empty());
    }
}
