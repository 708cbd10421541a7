//! Tile catalog: tile definitions, validation, RON manifests, and the built-in set.
//!
//! The catalog is read-only configuration. It answers socket and weight
//! lookups for the solver and holds no generation state.

mod builtin;
mod def;
mod manifest;
mod registry;

pub use builtin::{BUILTIN_DEFAULT_TILE, builtin_catalog};
pub use def::{SocketId, TileDef};
pub use manifest::{CatalogManifest, TileEntry};
pub use registry::{CatalogError, TileCatalog, TileId};
