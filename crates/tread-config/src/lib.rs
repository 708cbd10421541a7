//! Configuration for Tread map generation.
//!
//! Settings persist to disk as RON and can be overridden from the command
//! line via clap. Missing fields fall back to defaults and unknown fields are
//! ignored, so old and new config files both load.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, MapConfig, default_config_dir};
pub use error::ConfigError;
