//! Map generation with bounded retries and a guaranteed fallback.
//!
//! [`MapGenerator::generate`] never fails: it runs up to `max_attempts`
//! solver attempts and, if all of them contradict, returns a map filled with
//! the catalog's default tile.

use std::sync::Arc;

use rand::Rng;
use thiserror::Error;

use crate::catalog::TileCatalog;
use crate::grid::{Grid, GridError};
use crate::solver::Solver;
use crate::TileMap;

/// Every attempt ended in a contradiction. Reported, never returned as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("map generation failed after {attempts} attempts")]
pub struct GenerationFailure {
    /// Attempts made before giving up.
    pub attempts: u32,
}

/// Invalid generator settings.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeneratorError {
    /// Zero rows or columns.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Tile size that is not a positive finite number.
    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(f64),
}

/// Map dimensions and retry budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSettings {
    /// Map height in cells.
    pub rows: usize,
    /// Map width in cells.
    pub cols: usize,
    /// Cell edge length in world units.
    pub tile_size: f64,
    /// Solver attempts before falling back.
    pub max_attempts: u32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            rows: 40,
            cols: 20,
            tile_size: 64.0,
            max_attempts: 10,
        }
    }
}

/// What happened during one [`MapGenerator::generate_with_report`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Attempts started, including the successful one.
    pub attempts: u32,
    /// Attempts that ended in a contradiction.
    pub contradictions: u32,
    /// Weighted collapses in the successful attempt.
    pub collapses: usize,
    /// Set when the fallback map was returned.
    pub fallback: Option<GenerationFailure>,
}

/// Runs the solver against fresh grids until one completes.
pub struct MapGenerator {
    catalog: Arc<TileCatalog>,
    settings: MapSettings,
}

impl MapGenerator {
    /// Validates `settings` against `catalog`.
    ///
    /// Dangling catalog sockets are logged here, once, rather than on every attempt.
    pub fn new(catalog: Arc<TileCatalog>, settings: MapSettings) -> Result<Self, GeneratorError> {
        if settings.rows == 0 || settings.cols == 0 {
            return Err(GridError::EmptyDimensions {
                rows: settings.rows,
                cols: settings.cols,
            }
            .into());
        }
        if !(settings.tile_size.is_finite() && settings.tile_size > 0.0) {
            return Err(GeneratorError::InvalidTileSize(settings.tile_size));
        }

        for (id, dir) in catalog.dangling_sockets() {
            tracing::warn!(
                tile = %catalog.get(id).name,
                edge = ?dir,
                "tile edge has no matching socket in the catalog"
            );
        }

        Ok(Self { catalog, settings })
    }

    /// Catalog used for generation.
    pub fn catalog(&self) -> &Arc<TileCatalog> {
        &self.catalog
    }

    /// Active settings.
    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }

    /// Generates a map. Always returns a fully assigned map.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> TileMap {
        self.generate_with_report(rng).0
    }

    /// Generates a map and reports attempts, contradictions, and fallback use.
    ///
    /// The random source carries on across attempts so a seeded run retries
    /// with fresh draws while staying reproducible.
    pub fn generate_with_report<R: Rng + ?Sized>(&self, rng: &mut R) -> (TileMap, GenerationReport) {
        let MapSettings {
            rows,
            cols,
            tile_size,
            max_attempts,
        } = self.settings;
        let mut report = GenerationReport::default();
        let solver = Solver::new(&self.catalog);

        match Grid::new(rows, cols, &self.catalog) {
            Ok(mut grid) => {
                for attempt in 1..=max_attempts {
                    if attempt > 1 {
                        grid.reset(&self.catalog);
                    }
                    report.attempts = attempt;
                    tracing::debug!(attempt, rows, cols, "starting generation attempt");

                    match solver.run(&mut grid, rng) {
                        Ok(stats) => {
                            if let Some(map) =
                                TileMap::from_grid(&grid, Arc::clone(&self.catalog), tile_size)
                            {
                                report.collapses = stats.collapses;
                                tracing::info!(
                                    attempt,
                                    collapses = stats.collapses,
                                    narrowed = stats.narrowed,
                                    "map generation successful"
                                );
                                return (map, report);
                            }
                            report.contradictions += 1;
                            tracing::warn!(attempt, "solver finished with open cells, retrying");
                        }
                        Err(contradiction) => {
                            report.contradictions += 1;
                            tracing::warn!(
                                attempt,
                                row = contradiction.row,
                                col = contradiction.col,
                                "map generation failed, retrying"
                            );
                        }
                    }
                }
            }
            Err(e) => tracing::error!(error = %e, "cannot build generation grid"),
        }

        let failure = GenerationFailure {
            attempts: report.attempts,
        };
        let default_tile = self.catalog.default_tile();
        tracing::error!(
            error = %failure,
            fallback = %self.catalog.get(default_tile).name,
            "filling map with the default tile"
        );
        report.fallback = Some(failure);
        let map = TileMap::uniform(
            Arc::clone(&self.catalog),
            rows,
            cols,
            tile_size,
            default_tile,
        );
        (map, report)
    }
}
