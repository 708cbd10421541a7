//! RON manifest format for tile catalogs.
//!
//! ```ron
//! (
//!     default_tile: Some("tileGrass1"),
//!     tiles: [
//!         (name: "tileGrass1", sockets: (0, 0, 0, 0), weight: 200.0),
//!         (name: "tileSand1", sockets: (1, 1, 1, 1), weight: 150.0),
//!     ],
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CatalogError, TileCatalog, TileDef};

/// Top-level RON manifest for a tile catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Name of the tile used for the fallback map. First tile when absent.
    #[serde(default)]
    pub default_tile: Option<String>,
    /// Tile entries in catalog order.
    pub tiles: Vec<TileEntry>,
}

/// A single tile entry in the RON manifest.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TileEntry {
    /// Sprite name.
    pub name: String,
    /// Edge sockets in N, E, S, W order.
    pub sockets: [u32; 4],
    /// Relative spawn weight.
    pub weight: f64,
}

impl CatalogManifest {
    /// Validates the manifest and builds the catalog.
    pub fn into_catalog(self) -> Result<TileCatalog, CatalogError> {
        let tiles = self
            .tiles
            .into_iter()
            .map(|entry| TileDef::new(entry.name, entry.sockets, entry.weight))
            .collect();
        TileCatalog::new(tiles, self.default_tile.as_deref())
    }
}

impl TileCatalog {
    /// Parses and validates a catalog from RON text.
    pub fn from_ron_str(contents: &str) -> Result<Self, CatalogError> {
        let manifest: CatalogManifest = ron::from_str(contents)?;
        manifest.into_catalog()
    }

    /// Loads and validates a catalog manifest from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_ron_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            tiles = catalog.len(),
            "loaded tile catalog"
        );
        Ok(catalog)
    }
}
