//! Built-in grass/sand/road catalog used when no manifest is configured.
//!
//! Socket codes:
//!
//! | code | edge |
//! |------|------|
//! | 0 | grass |
//! | 1 | sand |
//! | 2 | road through grass |
//! | 3 | horizontal shore, sand north / grass south |
//! | 4 | horizontal shore, grass north / sand south |
//! | 5 | vertical shore, sand east / grass west |
//! | 6 | vertical shore, grass east / sand west |
//! | 7 | road through sand |

use super::{CatalogError, TileCatalog, TileDef};

const TILES: &[(&str, [u32; 4], f64)] = &[
    ("tileGrass1", [0, 0, 0, 0], 200.0),
    ("tileGrass2", [0, 0, 0, 0], 20.0),
    ("tileSand1", [1, 1, 1, 1], 150.0),
    ("tileSand2", [1, 1, 1, 1], 20.0),
    // Grass roads. Straights favoured, crossings rare.
    ("tileGrass_roadNorth", [2, 0, 2, 0], 5.0),
    ("tileGrass_roadEast", [0, 2, 0, 2], 5.0),
    ("tileGrass_roadCornerLR", [0, 2, 2, 0], 2.0),
    ("tileGrass_roadCornerLL", [0, 0, 2, 2], 2.0),
    ("tileGrass_roadCornerUR", [2, 2, 0, 0], 2.0),
    ("tileGrass_roadCornerUL", [2, 0, 0, 2], 2.0),
    ("tileGrass_roadCrossing", [2, 2, 2, 2], 0.5),
    ("tileGrass_roadCrossingRound", [2, 2, 2, 2], 0.5),
    ("tileGrass_roadSplitN", [2, 2, 0, 2], 1.0),
    ("tileGrass_roadSplitS", [0, 2, 2, 2], 1.0),
    ("tileGrass_roadSplitE", [2, 2, 2, 0], 1.0),
    ("tileGrass_roadSplitW", [2, 0, 2, 2], 1.0),
    // Sand roads.
    ("tileSand_roadNorth", [7, 1, 7, 1], 5.0),
    ("tileSand_roadEast", [1, 7, 1, 7], 5.0),
    ("tileSand_roadCornerLR", [1, 7, 7, 1], 2.0),
    ("tileSand_roadCornerLL", [1, 1, 7, 7], 2.0),
    ("tileSand_roadCornerUR", [7, 7, 1, 1], 2.0),
    ("tileSand_roadCornerUL", [7, 1, 1, 7], 2.0),
    ("tileSand_roadCrossing", [7, 7, 7, 7], 0.5),
    ("tileSand_roadCrossingRound", [7, 7, 7, 7], 0.5),
    ("tileSand_roadSplitN", [7, 7, 1, 7], 1.0),
    ("tileSand_roadSplitS", [1, 7, 7, 7], 1.0),
    ("tileSand_roadSplitE", [7, 7, 7, 1], 1.0),
    ("tileSand_roadSplitW", [7, 1, 7, 7], 1.0),
    // Grass/sand shorelines.
    ("tileGrass_transitionN", [1, 3, 0, 3], 20.0),
    ("tileGrass_transitionS", [0, 4, 1, 4], 20.0),
    ("tileGrass_transitionE", [5, 1, 5, 0], 20.0),
    ("tileGrass_transitionW", [6, 0, 6, 1], 20.0),
    // Roads crossing a shoreline.
    ("tileGrass_roadTransitionN", [7, 3, 2, 3], 3.0),
    ("tileGrass_roadTransitionS", [2, 4, 7, 4], 3.0),
    ("tileGrass_roadTransitionE", [5, 7, 5, 2], 3.0),
    ("tileGrass_roadTransitionW", [6, 2, 6, 7], 3.0),
];

/// Name of the built-in fallback tile.
pub const BUILTIN_DEFAULT_TILE: &str = "tileGrass1";

/// Returns the built-in terrain catalog.
pub fn builtin_catalog() -> Result<TileCatalog, CatalogError> {
    let tiles = TILES
        .iter()
        .map(|&(name, sockets, weight)| TileDef::new(name, sockets, weight))
        .collect();
    TileCatalog::new(tiles, Some(BUILTIN_DEFAULT_TILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.len(), 36);
        assert_eq!(
            catalog.get(catalog.default_tile()).name,
            BUILTIN_DEFAULT_TILE
        );
    }

    #[test]
    fn test_builtin_has_no_dangling_sockets() {
        let catalog = builtin_catalog().unwrap();
        assert!(
            catalog.dangling_sockets().is_empty(),
            "every built-in edge should have a partner"
        );
    }

    #[test]
    fn test_builtin_road_connectivity() {
        let catalog = builtin_catalog().unwrap();
        let north = catalog.get(catalog.lookup_by_name("tileGrass_roadNorth").unwrap());
        let east = catalog.get(catalog.lookup_by_name("tileGrass_roadEast").unwrap());
        assert!(north.fits(Direction::North, north), "straight road continues");
        assert!(!north.fits(Direction::North, east), "road must not dead-end into grass");
        assert!(east.fits(Direction::East, east));
    }
}
