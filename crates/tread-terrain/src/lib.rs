//! Procedural tile terrain: a Wave Function Collapse solver over a socket
//! catalog, bounded retries with a guaranteed fallback map, and the terrain
//! query surface used by gameplay code.

mod ascii;
mod classify;
mod direction;
mod generator;
mod grid;
mod query;
mod seed;
mod solver;
mod tile_map;

pub mod catalog;

pub use ascii::{glyph, render_ascii};
pub use catalog::{
    BUILTIN_DEFAULT_TILE, CatalogError, CatalogManifest, SocketId, TileCatalog, TileDef, TileEntry,
    TileId, builtin_catalog,
};
pub use classify::{Terrain, classify};
pub use direction::Direction;
pub use generator::{
    GenerationFailure, GenerationReport, GeneratorError, MapGenerator, MapSettings,
};
pub use grid::{Cell, Grid, GridError};
pub use query::TerrainQuery;
pub use seed::{hash_tile_map, map_rng, resolve_seed};
pub use solver::{Contradiction, SolveStats, Solver, Step};
pub use tile_map::{TileMap, TileSprite};
