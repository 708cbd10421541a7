//! Coarse terrain categories for gameplay queries.

use std::fmt;

/// Terrain category of a map position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Terrain {
    /// Grass, including grass-side shorelines.
    Grass,
    /// Open sand.
    Sand,
    /// Water.
    Water,
    /// Any road tile, on grass or sand.
    Road,
    /// Outside the map.
    Out,
}

impl Terrain {
    /// Lowercase name, as used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Terrain::Grass => "grass",
            Terrain::Sand => "sand",
            Terrain::Water => "water",
            Terrain::Road => "road",
            Terrain::Out => "out",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a tile name to its terrain category.
///
/// Matching is case-insensitive on name fragments: anything mentioning a road
/// is [`Terrain::Road`], then water, then sand. Everything else is grass.
/// Never returns [`Terrain::Out`]; that is reserved for coordinates.
pub fn classify(tile_name: &str) -> Terrain {
    let name = tile_name.to_ascii_lowercase();
    if name.contains("road") {
        Terrain::Road
    } else if name.contains("water") {
        Terrain::Water
    } else if name.contains("sand") {
        Terrain::Sand
    } else {
        Terrain::Grass
    }
}
