//! Impact calculation engine.
//!
//! Every consequence metric is a fixed linear scaling of a single
//! dimensionless `base_damage` scalar:
//!
//! ```text
//! base_damage = (size / 100) × (speed / 100) × sin(angle°)
//! ```
//!
//! The sine term makes grazing hits (0°) harmless and direct hits (90°)
//! maximal.  All integer metrics are floored, never rounded.  The impact
//! probability is a uniform draw from an injected [`ProbabilitySource`] and
//! does not depend on the other inputs.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ImpactConfig;
use crate::constants::PROBABILITY_MAX;
use crate::error::{ImpactError, Result};
use crate::params::SimulationParameters;

/// Consequence metrics of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub population_affected: u64,
    /// Currency units.
    pub infrastructure_damage: u64,
    /// km
    pub shockwave_radius: u32,
    /// km
    pub fireball_radius: u32,
    /// km; zero unless the target is an ocean.
    pub tsunami_radius: u32,
    /// Percent in `[0, 100)`.
    pub probability: f64,
}

// ── Probability sources ───────────────────────────────────────────────────────

/// Supplies the impact probability for each run.
pub trait ProbabilitySource {
    /// Returns a percentage in `[0, 100)`.
    fn draw_percent(&mut self) -> f64;
}

/// Uniform draw from any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomProbability<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomProbability<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomProbability<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible stream; identical seeds draw identical probabilities.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ProbabilitySource for RandomProbability<R> {
    fn draw_percent(&mut self) -> f64 {
        self.rng.gen_range(0.0..PROBABILITY_MAX)
    }
}

/// Always returns the same probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedProbability(f64);

impl FixedProbability {
    pub fn new(percent: f64) -> Result<Self> {
        if percent.is_finite() && (0.0..PROBABILITY_MAX).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(ImpactError::InvalidParameter {
                name: "probability",
                value: percent,
                valid_range: format!("[0, {PROBABILITY_MAX})"),
            })
        }
    }
}

impl ProbabilitySource for FixedProbability {
    fn draw_percent(&mut self) -> f64 {
        self.0
    }
}

// ── Calculator ────────────────────────────────────────────────────────────────

/// Dimensionless severity scalar, the sole driver of every derived metric.
///
/// With the default config this lies in `[0, 1]` over the accepted domain.
pub fn base_damage(params: &SimulationParameters, config: &ImpactConfig) -> f64 {
    let size_multiplier = params.asteroid_size / config.size_divisor;
    let speed_multiplier = params.speed / config.speed_divisor;
    // (angle × π) / 180 rather than `to_radians()` keeps the rounding of the
    // reference outputs.
    let angle_multiplier = ((params.angle * PI) / 180.0).sin();
    size_multiplier * speed_multiplier * angle_multiplier
}

/// Floors a non-negative scaled value.  `as` saturates and maps NaN to 0.
#[inline]
fn floor_u64(value: f64) -> u64 {
    value.floor() as u64
}

#[inline]
fn floor_u32(value: f64) -> u32 {
    value.floor() as u32
}

/// Deterministic part of [`ImpactCalculator::compute`]: scales an already
/// computed `damage` into every metric except the probability, which is taken
/// as given.
pub fn scale_metrics(
    params: &SimulationParameters,
    config: &ImpactConfig,
    damage: f64,
    probability: f64,
) -> ImpactResult {
    let tsunami_radius = if params.location.is_ocean() {
        floor_u32(damage * config.tsunami_scale)
    } else {
        0
    };

    ImpactResult {
        population_affected: floor_u64(damage * config.population_scale),
        infrastructure_damage: floor_u64(damage * config.infrastructure_scale),
        shockwave_radius: floor_u32(damage * config.shockwave_scale),
        fireball_radius: floor_u32(damage * config.fireball_scale),
        tsunami_radius,
        probability,
    }
}

/// Turns [`SimulationParameters`] into an [`ImpactResult`].
///
/// Holds no state between runs apart from its probability source.
#[derive(Debug, Clone)]
pub struct ImpactCalculator<P: ProbabilitySource = RandomProbability> {
    config: ImpactConfig,
    probability: P,
}

impl ImpactCalculator<RandomProbability> {
    /// Default curve with an entropy-seeded probability draw.
    pub fn from_entropy() -> Self {
        Self::new(ImpactConfig::default(), RandomProbability::from_entropy())
    }
}

impl<P: ProbabilitySource> ImpactCalculator<P> {
    pub fn new(config: ImpactConfig, probability: P) -> Self {
        Self {
            config,
            probability,
        }
    }

    #[inline]
    pub fn config(&self) -> &ImpactConfig {
        &self.config
    }

    /// Runs the model.  Total over validated parameters; never panics.
    pub fn compute(&mut self, params: &SimulationParameters) -> ImpactResult {
        let damage = base_damage(params, &self.config);
        let probability = self.probability.draw_percent();
        debug!(
            size = params.asteroid_size,
            speed = params.speed,
            angle = params.angle,
            location = %params.location.name,
            base_damage = damage,
            "computed impact"
        );
        scale_metrics(params, &self.config, damage, probability)
    }
}
