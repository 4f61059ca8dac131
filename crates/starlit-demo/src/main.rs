//! Headless frame loop driving a Starlit starfield.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p starlit-demo -- --preset dense --seed 7 --frames 120`.
//! Add `--json` to stream every frame transform to stdout as JSON lines.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glam::DVec3;
use serde::Serialize;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use starlit_config::{CONFIG_FILE_NAME, CliArgs, Config, StarfieldConfig};
use starlit_space::{FrameTransform, Starfield, StarfieldError};
use tracing::{error, info, warn};

/// Frames between progress log lines.
const REPORT_INTERVAL: u64 = 60;

/// One JSON line of `--json` output.
#[derive(Debug, Serialize)]
struct FrameRecord {
    frame: u64,
    theta: f64,
    #[serde(flatten)]
    transform: FrameTransform,
}

/// What a run of the frame loop observed.
#[derive(Debug, Default, PartialEq)]
struct RunSummary {
    frames: u64,
    final_theta: f64,
    min_scale: f64,
    mirrored_frames: u64,
    /// Distance of the farthest star from the group origin on the last frame.
    final_radius: f64,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let config_path = config_dir.join(CONFIG_FILE_NAME);
    let existed = config_path.exists();

    let (mut config, load_error) = match Config::load_or_create(&config_dir) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    starlit_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    // Loading ran before the subscriber existed.
    match load_error {
        Some(e) => warn!(
            "Failed to load config from {}: {e}, using defaults",
            config_path.display()
        ),
        None if existed => info!("Loaded config from {}", config_path.display()),
        None => info!("Created default config at {}", config_path.display()),
    }

    let mut starfield = match build_starfield(&config.starfield) {
        Ok(starfield) => starfield,
        Err(e) => {
            error!("Cannot build starfield: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        stars = starfield.points().len(),
        step = starfield.step(),
        seed = ?config.starfield.seed,
        "Starfield ready"
    );

    let stdout = io::stdout();
    let mut sink = args.json.then(|| stdout.lock());
    let result = run_frames(
        &mut starfield,
        args.frames,
        sink.as_mut().map(|s| s as &mut dyn Write),
    );

    match result {
        Ok(summary) => {
            info!(
                frames = summary.frames,
                theta = summary.final_theta,
                min_scale = summary.min_scale,
                mirrored_frames = summary.mirrored_frames,
                radius = summary.final_radius,
                "Run finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to write frame output: {e}");
            ExitCode::FAILURE
        }
    }
}

fn default_config_dir() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("starlit"),
        None => {
            eprintln!("No platform config directory, using ./starlit");
            PathBuf::from("starlit")
        }
    }
}

/// Build a starfield from loaded settings, seeding the layout when a seed is configured.
fn build_starfield(config: &StarfieldConfig) -> Result<Starfield, StarfieldError> {
    config
        .validate()
        .map_err(|e| StarfieldError::InvalidArgument(e.to_string()))?;

    let starfield = match config.seed {
        Some(seed) => Starfield::with_rng(
            config.count,
            config.step,
            config.extent,
            &mut ChaCha8Rng::seed_from_u64(seed),
        )?,
        None => Starfield::with_rng(config.count, config.step, config.extent, &mut rand::rng())?,
    };
    Ok(starfield.with_origin(DVec3::from_array(config.origin)))
}

/// Advance `starfield` once per frame, optionally writing each frame as a JSON line.
fn run_frames(
    starfield: &mut Starfield,
    frames: u64,
    mut sink: Option<&mut dyn Write>,
) -> io::Result<RunSummary> {
    let mut summary = RunSummary {
        min_scale: 1.0,
        final_theta: starfield.theta(),
        ..RunSummary::default()
    };
    let mut last = None;

    for frame in 1..=frames {
        let transform = starfield.advance();
        let scale = transform.scale.x;

        summary.min_scale = summary.min_scale.min(scale);
        if scale < 0.0 {
            summary.mirrored_frames += 1;
        }

        if let Some(out) = sink.as_deref_mut() {
            let record = FrameRecord {
                frame,
                theta: starfield.theta(),
                transform,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }

        if frame % REPORT_INTERVAL == 0 {
            tracing::debug!(
                frame,
                theta = starfield.theta(),
                rotation = transform.rotation.x,
                scale,
                "Frame"
            );
        }
        last = Some(transform);
    }

    summary.frames = frames;
    summary.final_theta = starfield.theta();
    if let Some(transform) = last {
        let origin = starfield.origin();
        summary.final_radius = starfield
            .world_positions(&transform)
            .map(|p: DVec3| p.distance(origin))
            .fold(0.0, f64::max);
    }
    Ok(summary)
}
