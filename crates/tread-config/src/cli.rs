//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Tread command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "tread", about = "Procedural tile terrain generator")]
pub struct CliArgs {
    /// Map height in tiles.
    #[arg(long)]
    pub rows: Option<usize>,

    /// Map width in tiles.
    #[arg(long)]
    pub cols: Option<usize>,

    /// Tile edge length in world units.
    #[arg(long)]
    pub tile_size: Option<f64>,

    /// Solver attempts before the fallback map is used.
    #[arg(long)]
    pub attempts: Option<u32>,

    /// Seed for a reproducible map.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a RON tile catalog manifest.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log an ASCII dump of the map.
    #[arg(long)]
    pub print_map: Option<bool>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(rows) = args.rows {
            self.map.rows = rows;
        }
        if let Some(cols) = args.cols {
            self.map.cols = cols;
        }
        if let Some(size) = args.tile_size {
            self.map.tile_size = size;
        }
        if let Some(attempts) = args.attempts {
            self.map.max_attempts = attempts;
        }
        if let Some(seed) = args.seed {
            self.map.seed = Some(seed);
        }
        if let Some(ref path) = args.catalog {
            self.map.catalog = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(print) = args.print_map {
            self.debug.print_map = print;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            rows: Some(12),
            seed: Some(5),
            catalog: Some(PathBuf::from("desert.ron")),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.map.rows, 12);
        assert_eq!(config.map.seed, Some(5));
        assert_eq!(config.map.catalog, Some(PathBuf::from("desert.ron")));
        // Non-overridden fields retain defaults
        assert_eq!(config.map.cols, 20);
        assert_eq!(config.map.max_attempts, 10);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from([
            "tread",
            "--rows",
            "6",
            "--tile-size",
            "32",
            "--print-map",
            "false",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.rows, Some(6));
        assert_eq!(args.tile_size, Some(32.0));
        assert_eq!(args.print_map, Some(false));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.seed, None);
    }
}
