//! Generates a terrain map and reports on it.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p tread-demo` for the default 40x20 map.
//! Run with `cargo run -p tread-demo -- --rows 10 --cols 10 --seed 42` to replay a map.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn};
use tread_config::{CliArgs, Config, default_config_dir};
use tread_terrain::{
    MapGenerator, MapSettings, Terrain, TerrainQuery, TileCatalog, TileMap, builtin_catalog,
    hash_tile_map, map_rng, render_ascii, resolve_seed,
};

/// Loads the configured catalog, falling back to the built-in one.
fn load_catalog(config: &Config) -> Option<TileCatalog> {
    if let Some(path) = &config.map.catalog {
        match TileCatalog::load(path) {
            Ok(catalog) => return Some(catalog),
            Err(e) => warn!(
                path = %path.display(),
                error = %e,
                "failed to load tile catalog, using built-in catalog"
            ),
        }
    }
    match builtin_catalog() {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            error!(error = %e, "built-in tile catalog is invalid");
            None
        }
    }
}

/// Logs terrain at a few points gameplay code typically asks about.
fn probe_terrain(map: &TileMap) {
    let width = map.cols() as f64 * map.tile_size();
    let height = map.rows() as f64 * map.tile_size();
    let probes = [
        ("player spawn", width / 2.0, height - 100.0),
        ("top left", 0.0, 0.0),
        ("map centre", width / 2.0, height / 2.0),
        ("past right edge", width + 1.0, height / 2.0),
        ("past bottom edge", width / 2.0, height),
    ];
    for (label, x, y) in probes {
        info!(probe = label, x, y, terrain = %map.terrain_at(x, y), "terrain probe");
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir: Option<PathBuf> = args.config.clone().or_else(default_config_dir);

    let mut config = match &config_dir {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}, using defaults");
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.as_ref().map(|dir| dir.join("logs"));
    tread_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    if let Err(e) = config.map.validate() {
        warn!(error = %e, "invalid map settings, using defaults");
        config.map = tread_config::MapConfig {
            seed: config.map.seed,
            catalog: config.map.catalog.take(),
            ..Default::default()
        };
    }

    let Some(catalog) = load_catalog(&config) else {
        return ExitCode::FAILURE;
    };

    let settings = MapSettings {
        rows: config.map.rows,
        cols: config.map.cols,
        tile_size: config.map.tile_size,
        max_attempts: config.map.max_attempts,
    };
    let generator = match MapGenerator::new(Arc::new(catalog), settings) {
        Ok(generator) => generator,
        Err(e) => {
            error!(error = %e, "cannot create map generator");
            return ExitCode::FAILURE;
        }
    };

    let seed = resolve_seed(config.map.seed);
    info!(
        seed,
        rows = settings.rows,
        cols = settings.cols,
        tiles = generator.catalog().len(),
        "generating map"
    );

    let (map, report) = generator.generate_with_report(&mut map_rng(seed));
    info!(
        attempts = report.attempts,
        contradictions = report.contradictions,
        collapses = report.collapses,
        fallback = report.fallback.is_some(),
        digest = %format!("{:016x}", hash_tile_map(&map)),
        "map ready"
    );

    let histogram = map.terrain_histogram();
    for terrain in [Terrain::Grass, Terrain::Sand, Terrain::Water, Terrain::Road] {
        let count = histogram.get(&terrain).copied().unwrap_or(0);
        info!(%terrain, count, "terrain coverage");
    }

    probe_terrain(&map);

    if config.debug.print_map {
        info!("Map layout:\n{}", render_ascii(&map));
    }

    ExitCode::SUCCESS
}
