//! Seeded random sources and map digests for reproducible generation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::TileMap;

/// Returns `seed` if set, otherwise a fresh seed from the thread RNG.
///
/// Log the result: it is all that is needed to replay the same map.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}

/// Deterministic random source for map generation.
pub fn map_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Digest of a map's dimensions and tile ids, for determinism checks.
pub fn hash_tile_map(map: &TileMap) -> u64 {
    let mut hasher = DefaultHasher::new();
    map.rows().hash(&mut hasher);
    map.cols().hash(&mut hasher);
    for tile in map.tiles() {
        tile.0.hash(&mut hasher);
    }
    hasher.finish()
}
