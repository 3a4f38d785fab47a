//! Runtime model configuration loaded from `assets/impact.toml`.
//!
//! [`ImpactConfig`] mirrors the tunable constants in [`crate::constants`].
//! [`load_impact_config`] reads a TOML file and overwrites the defaults with
//! any values present in it.  Missing keys fall back to the compile-time
//! defaults, so a minimal TOML can override just the constants you care about.
//!
//! ## Tuning workflow
//!
//! 1. Edit `assets/impact.toml`.
//! 2. Re-run the estimator; no recompilation required.
//! 3. Run `cargo test` to see which reference scenarios the new values move.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `ImpactConfig::default()`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::*;
use crate::error::{validate_non_negative, validate_positive, ImpactError, Result};

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "assets/impact.toml";

/// Runtime-tunable severity curve and presentation timing.
///
/// All fields default to the corresponding compile-time constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactConfig {
    // ── Severity Curve ───────────────────────────────────────────────────────
    pub size_divisor: f64,
    pub speed_divisor: f64,
    pub population_scale: f64,
    pub infrastructure_scale: f64,
    pub shockwave_scale: f64,
    pub fireball_scale: f64,
    pub tsunami_scale: f64,

    // ── Progressive Reveal ───────────────────────────────────────────────────
    pub reveal_duration_ms: u64,
    pub reveal_steps: u32,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            // Severity Curve
            size_divisor: SIZE_DIVISOR,
            speed_divisor: SPEED_DIVISOR,
            population_scale: POPULATION_SCALE,
            infrastructure_scale: INFRASTRUCTURE_SCALE,
            shockwave_scale: SHOCKWAVE_SCALE,
            fireball_scale: FIREBALL_SCALE,
            tsunami_scale: TSUNAMI_SCALE,
            // Progressive Reveal
            reveal_duration_ms: REVEAL_DURATION_MS,
            reveal_steps: REVEAL_STEPS,
        }
    }
}

impl ImpactConfig {
    /// Decodes a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Rejects values that would make the severity curve meaningless.
    pub fn validate(&self) -> Result<()> {
        validate_positive("size_divisor", self.size_divisor)?;
        validate_positive("speed_divisor", self.speed_divisor)?;
        validate_non_negative("population_scale", self.population_scale)?;
        validate_non_negative("infrastructure_scale", self.infrastructure_scale)?;
        validate_non_negative("shockwave_scale", self.shockwave_scale)?;
        validate_non_negative("fireball_scale", self.fireball_scale)?;
        validate_non_negative("tsunami_scale", self.tsunami_scale)?;
        if self.reveal_steps == 0 {
            return Err(ImpactError::InvalidParameter {
                name: "reveal_steps",
                value: 0.0,
                valid_range: "[1, ∞)".to_string(),
            });
        }
        Ok(())
    }
}

/// Strict loader: any read, parse or validation failure is returned.
pub fn read_impact_config(path: impl AsRef<Path>) -> Result<ImpactConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ImpactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = ImpactConfig::from_toml_str(&contents).map_err(|err| ImpactError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Lenient loader used at startup.
///
/// Missing keys retain their compiled defaults.  Parse or validation errors
/// are logged but do not abort; defaults are used instead.  A missing file is
/// not an error.
pub fn load_impact_config(path: impl AsRef<Path>) -> ImpactConfig {
    let path = path.as_ref();
    match read_impact_config(path) {
        Ok(config) => {
            info!("Loaded impact config from {}", path.display());
            config
        }
        Err(ImpactError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            info!("No {} found; using compiled defaults", path.display());
            ImpactConfig::default()
        }
        Err(err) => {
            warn!("{err}; using defaults");
            ImpactConfig::default()
        }
    }
}
