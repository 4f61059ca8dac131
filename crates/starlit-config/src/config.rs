//! Configuration structs with defaults taken from the original scene and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::PresetArg;
use crate::error::ConfigError;

/// File name used inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Starfield generation and motion.
    pub starfield: StarfieldConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Starfield generation and motion settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Number of stars generated once per starfield.
    pub count: u32,
    /// Angle increment in degrees applied every frame.
    pub step: f64,
    /// Seed for reproducible layouts. `None` draws a fresh layout each run.
    pub seed: Option<u64>,
    /// Half-width of the cube stars are scattered in.
    pub extent: f64,
    /// Position of the star group in world space.
    pub origin: [f64; 3],
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Write a JSON log file next to the config in debug builds.
    pub log_to_file: bool,
}

impl StarfieldConfig {
    /// 1000 stars turning by 0.01 degrees per frame.
    pub fn classic() -> Self {
        Self {
            count: 1000,
            step: 0.01,
            ..Self::base()
        }
    }

    /// 2000 stars turning by 0.02 degrees per frame.
    pub fn dense() -> Self {
        Self {
            count: 2000,
            step: 0.02,
            ..Self::base()
        }
    }

    /// Settings for a named preset. Seed, extent and origin keep their defaults.
    pub fn preset(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Classic => Self::classic(),
            PresetArg::Dense => Self::dense(),
        }
    }

    fn base() -> Self {
        Self {
            count: 0,
            step: 0.0,
            seed: None,
            extent: 400.0,
            origin: [0.0; 3],
        }
    }

    /// Reject values the generator or the frame loop cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "starfield.count",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !self.step.is_finite() || self.step < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "starfield.step",
                reason: format!("must be finite and non-negative, got {}", self.step),
            });
        }
        if !self.extent.is_finite() || self.extent <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "starfield.extent",
                reason: format!("must be finite and positive, got {}", self.extent),
            });
        }
        if self.origin.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::InvalidValue {
                field: "starfield.origin",
                reason: format!("must be finite, got {:?}", self.origin),
            });
        }
        Ok(())
    }
}

// --- Default implementations ---

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: true,
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE_NAME), serialized)
            .map_err(ConfigError::WriteError)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
