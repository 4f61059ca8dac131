//! Configuration for the Starlit starfield.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and deserialize forward/backward compatibly.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, PresetArg};
pub use config::{CONFIG_FILE_NAME, Config, DebugConfig, StarfieldConfig};
pub use error::ConfigError;
