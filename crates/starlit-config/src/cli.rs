//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{Config, StarfieldConfig};

/// Named starfield configurations seen across versions of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// 1000 stars, 0.01 degrees per frame.
    Classic,
    /// 2000 stars, 0.02 degrees per frame.
    Dense,
}

/// Starlit command-line arguments.
///
/// CLI values override settings loaded from `config.ron`. A preset is applied
/// first, so `--preset dense --count 500` yields 500 stars at the dense step.
#[derive(Parser, Debug)]
#[command(name = "starlit", about = "Procedural rotating starfield")]
pub struct CliArgs {
    /// Start from a named preset instead of the configured count and step.
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Number of stars.
    #[arg(long)]
    pub count: Option<u32>,

    /// Angle increment per frame, in degrees.
    #[arg(long)]
    pub step: Option<f64>,

    /// Seed for a reproducible layout.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Print every frame transform as a JSON line on stdout.
    #[arg(long)]
    pub json: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(preset) = args.preset {
            let base = StarfieldConfig::preset(preset);
            self.starfield.count = base.count;
            self.starfield.step = base.step;
        }
        if let Some(count) = args.count {
            self.starfield.count = count;
        }
        if let Some(step) = args.step {
            self.starfield.step = step;
        }
        if let Some(seed) = args.seed {
            self.starfield.seed = Some(seed);
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
