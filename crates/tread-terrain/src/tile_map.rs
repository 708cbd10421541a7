//! Finalized, immutable terrain map handed to the renderer and gameplay code.

use std::sync::Arc;

use hashbrown::HashMap;

use crate::catalog::{TileCatalog, TileDef, TileId};
use crate::grid::{Grid, GridError};
use crate::{Terrain, TerrainQuery, classify};

/// One sprite to draw: tile name and the world-space centre of its cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileSprite<'a> {
    /// Sprite name.
    pub name: &'a str,
    /// Horizontal centre in world units.
    pub center_x: f64,
    /// Vertical centre in world units.
    pub center_y: f64,
}

/// A fully collapsed `rows × cols` map of tiles.
#[derive(Clone, Debug)]
pub struct TileMap {
    catalog: Arc<TileCatalog>,
    rows: usize,
    cols: usize,
    tile_size: f64,
    tiles: Vec<TileId>,
}

impl TileMap {
    /// Freezes a solved grid. Returns `None` if any cell is not a singleton.
    pub(crate) fn from_grid(grid: &Grid, catalog: Arc<TileCatalog>, tile_size: f64) -> Option<Self> {
        let tiles = grid
            .cells()
            .iter()
            .map(|cell| cell.tile())
            .collect::<Option<Vec<_>>>()?;
        Some(Self {
            catalog,
            rows: grid.rows(),
            cols: grid.cols(),
            tile_size,
            tiles,
        })
    }

    /// A map with every cell set to `tile`.
    pub fn uniform(
        catalog: Arc<TileCatalog>,
        rows: usize,
        cols: usize,
        tile_size: f64,
        tile: TileId,
    ) -> Self {
        Self {
            catalog,
            rows,
            cols,
            tile_size,
            tiles: vec![tile; rows * cols],
        }
    }

    /// Map height in cells.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Map width in cells.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Edge length of one cell in world units.
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Catalog the tile ids refer to.
    pub fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// Tile ids in row-major order.
    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    /// Tile id at `(row, col)`.
    pub fn tile_at(&self, row: usize, col: usize) -> Result<TileId, GridError> {
        if row < self.rows && col < self.cols {
            Ok(self.tiles[row * self.cols + col])
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Tile definition at `(row, col)`.
    pub fn def_at(&self, row: usize, col: usize) -> Result<&TileDef, GridError> {
        Ok(self.catalog.get(self.tile_at(row, col)?))
    }

    /// Tile name at `(row, col)`.
    pub fn name_at(&self, row: usize, col: usize) -> Result<&str, GridError> {
        Ok(self.def_at(row, col)?.name.as_str())
    }

    /// Terrain of a cell, [`Terrain::Out`] outside the map.
    pub fn terrain_at_cell(&self, row: usize, col: usize) -> Terrain {
        match self.name_at(row, col) {
            Ok(name) => classify(name),
            Err(_) => Terrain::Out,
        }
    }

    /// Cell containing a world point, if it is on the map.
    pub fn cell_at_world(&self, world_x: f64, world_y: f64) -> Option<(usize, usize)> {
        let col = (world_x / self.tile_size).floor();
        let row = (world_y / self.tile_size).floor();
        if !(col.is_finite() && row.is_finite()) || col < 0.0 || row < 0.0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Sprites in row-major order, positioned at cell centres.
    pub fn sprites(&self) -> impl Iterator<Item = TileSprite<'_>> {
        let half = self.tile_size / 2.0;
        self.tiles.iter().enumerate().map(move |(i, &id)| {
            let (row, col) = (i / self.cols, i % self.cols);
            TileSprite {
                name: &self.catalog.get(id).name,
                center_x: col as f64 * self.tile_size + half,
                center_y: row as f64 * self.tile_size + half,
            }
        })
    }

    /// Number of cells per terrain category.
    pub fn terrain_histogram(&self) -> HashMap<Terrain, usize> {
        let mut histogram = HashMap::new();
        for &id in &self.tiles {
            *histogram.entry(classify(&self.catalog.get(id).name)).or_insert(0) += 1;
        }
        histogram
    }
}

impl TerrainQuery for TileMap {
    fn terrain_at(&self, world_x: f64, world_y: f64) -> Terrain {
        match self.cell_at_world(world_x, world_y) {
            Some((row, col)) => self.terrain_at_cell(row, col),
            None => Terrain::Out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TileDef;

    fn catalog() -> Arc<TileCatalog> {
        Arc::new(
            TileCatalog::new(
                vec![
                    TileDef::new("tileGrass1", [0, 0, 0, 0], 1.0),
                    TileDef::new("tileSand1", [1, 1, 1, 1], 1.0),
                    TileDef::new("tileGrass_roadNorth", [2, 0, 2, 0], 1.0),
                ],
                None,
            )
            .unwrap(),
        )
    }

    fn striped_map() -> TileMap {
        // Row 0 grass, row 1 sand, row 2 road.
        let catalog = catalog();
        let mut map = TileMap::uniform(catalog, 3, 4, 64.0, TileId(0));
        for col in 0..4 {
            map.tiles[4 + col] = TileId(1);
            map.tiles[8 + col] = TileId(2);
        }
        map
    }

    #[test]
    fn test_uniform_map() {
        let map = TileMap::uniform(catalog(), 5, 5, 32.0, TileId(1));
        assert_eq!(map.tiles().len(), 25);
        assert!(map.tiles().iter().all(|&t| t == TileId(1)));
        assert_eq!(map.name_at(4, 4).unwrap(), "tileSand1");
    }

    #[test]
    fn test_lookup_out_of_bounds() {
        let map = striped_map();
        assert!(matches!(
            map.tile_at(3, 0),
            Err(GridError::OutOfBounds { row: 3, .. })
        ));
        assert!(map.name_at(0, 4).is_err());
        assert_eq!(map.terrain_at_cell(0, 4), Terrain::Out);
    }

    #[test]
    fn test_terrain_at_world_coordinates() {
        let map = striped_map();
        assert_eq!(map.terrain_at(10.0, 10.0), Terrain::Grass);
        assert_eq!(map.terrain_at(255.9, 64.0), Terrain::Sand);
        assert_eq!(map.terrain_at(100.0, 191.0), Terrain::Road);
    }

    #[test]
    fn test_terrain_beyond_extents_is_out() {
        let map = striped_map();
        // cols * tile_size = 256, rows * tile_size = 192.
        assert_eq!(map.terrain_at(256.0, 10.0), Terrain::Out);
        assert_eq!(map.terrain_at(10.0, 192.0), Terrain::Out);
        assert_eq!(map.terrain_at(1.0e9, 1.0e9), Terrain::Out);
        assert_eq!(map.terrain_at(-0.5, 10.0), Terrain::Out);
        assert_eq!(map.terrain_at(10.0, -64.0), Terrain::Out);
        assert_eq!(map.terrain_at(f64::NAN, 10.0), Terrain::Out);
        assert!(!map.contains(300.0, 0.0));
        assert!(map.contains(0.0, 0.0));
    }

    #[test]
    fn test_sprites_centered_on_cells() {
        let map = striped_map();
        let sprites: Vec<TileSprite<'_>> = map.sprites().collect();
        assert_eq!(sprites.len(), 12);
        assert_eq!(sprites[0].center_x, 32.0);
        assert_eq!(sprites[0].center_y, 32.0);
        let last = sprites[11];
        assert_eq!((last.center_x, last.center_y), (224.0, 160.0));
        assert_eq!(last.name, "tileGrass_roadNorth");
    }

    #[test]
    fn test_terrain_histogram() {
        let histogram = striped_map().terrain_histogram();
        assert_eq!(histogram.get(&Terrain::Grass), Some(&4));
        assert_eq!(histogram.get(&Terrain::Sand), Some(&4));
        assert_eq!(histogram.get(&Terrain::Road), Some(&4));
        assert_eq!(histogram.get(&Terrain::Water), None);
    }
}
