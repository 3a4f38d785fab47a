//! Centralised model constants.
//!
//! Every scaling factor, divisor and input domain bound lives here so the
//! illustrative severity curve can be found and reasoned about in one place.
//! These are the **authoritative defaults**: [`crate::config::ImpactConfig`]
//! mirrors the tunable subset and falls back to these values.
//!
//! ## Tuning guidance
//!
//! The defaults reproduce the reference outputs exactly (see the scenario
//! tests in `tests/impact_tests.rs`).  Changing any scale factor changes every
//! result that depends on it, so override through `assets/impact.toml`
//! rather than editing this file when experimenting.

// ── Input Domains ─────────────────────────────────────────────────────────────

/// Smallest accepted asteroid diameter (m).
pub const ASTEROID_SIZE_MIN: f64 = 10.0;

/// Largest accepted asteroid diameter (m).
pub const ASTEROID_SIZE_MAX: f64 = 200.0;

/// Slider granularity for asteroid diameter (m).  Informational; values
/// between steps are still accepted.
pub const ASTEROID_SIZE_STEP: f64 = 5.0;

/// Smallest accepted entry speed (km/s).
pub const SPEED_MIN: f64 = 5.0;

/// Largest accepted entry speed (km/s).
pub const SPEED_MAX: f64 = 50.0;

/// Slider granularity for entry speed (km/s).
pub const SPEED_STEP: f64 = 1.0;

/// Impact angle bounds (degrees). 0° is grazing, 90° is a direct hit.
pub const ANGLE_MIN: f64 = 0.0;
pub const ANGLE_MAX: f64 = 90.0;

/// Slider granularity for impact angle (degrees).
pub const ANGLE_STEP: f64 = 5.0;

/// Latitude and longitude bounds (degrees).
pub const LATITUDE_LIMIT: f64 = 90.0;
pub const LONGITUDE_LIMIT: f64 = 180.0;

// ── Default Scenario ──────────────────────────────────────────────────────────

/// Asteroid diameter used when no scenario overrides it (m).
pub const DEFAULT_ASTEROID_SIZE: f64 = 50.0;

/// Entry speed used when no scenario overrides it (km/s).
pub const DEFAULT_SPEED: f64 = 20.0;

/// Impact angle used when no scenario overrides it (degrees).
pub const DEFAULT_ANGLE: f64 = 45.0;

// ── Severity Curve ────────────────────────────────────────────────────────────

/// Divisor turning diameter into the dimensionless size multiplier.
///
/// `size_multiplier = asteroid_size / SIZE_DIVISOR`.  At the default of 100.0
/// a 100 m body contributes a factor of exactly 1.
pub const SIZE_DIVISOR: f64 = 100.0;

/// Divisor turning entry speed into the dimensionless speed multiplier.
///
/// `speed_multiplier = speed / SPEED_DIVISOR`.  The accepted speed domain tops
/// out at 50 km/s, so the multiplier never exceeds 0.5 with the default.
pub const SPEED_DIVISOR: f64 = 100.0;

/// People affected per unit of base damage.
///
/// A 100 m body at 50 km/s hitting head-on (base damage 0.5) affects 5 M.
pub const POPULATION_SCALE: f64 = 10_000_000.0;

/// Infrastructure damage (currency units) per unit of base damage.
pub const INFRASTRUCTURE_SCALE: f64 = 500_000_000_000.0;

/// Shockwave radius (km) per unit of base damage.
pub const SHOCKWAVE_SCALE: f64 = 500.0;

/// Fireball radius (km) per unit of base damage.
pub const FIREBALL_SCALE: f64 = 200.0;

/// Tsunami radius (km) per unit of base damage.  Only applied when the target
/// name contains [`OCEAN_MARKER`].
pub const TSUNAMI_SCALE: f64 = 1000.0;

/// Substring of a location name that marks it as an ocean target.
/// Matching is case-sensitive.
pub const OCEAN_MARKER: &str = "Ocean";

/// Upper (exclusive) bound of the impact probability draw, in percent.
pub const PROBABILITY_MAX: f64 = 100.0;

// ── Strategy Normalisation ────────────────────────────────────────────────────

/// Lives saved that map to a full radar effectiveness score of 100.
pub const RADAR_LIVES_REFERENCE: f64 = 10_000_000.0;

/// Time (months) that maps to a radar speed score of 0.
pub const RADAR_TIME_REFERENCE: f64 = 24.0;

/// Cost that maps to a radar cost-efficiency score of 0.
pub const RADAR_COST_REFERENCE: f64 = 100_000_000_000.0;

/// Number of catalogue entries (from the front) projected onto the radar.
/// The trailing "Do Nothing" baseline is excluded.
pub const RADAR_STRATEGY_COUNT: usize = 3;

/// Chart unit divisors: lives are charted in millions, cost in billions.
pub const CHART_LIVES_UNIT: f64 = 1_000_000.0;
pub const CHART_COST_UNIT: f64 = 1_000_000_000.0;

/// Success probability above which a strategy is rated high.
pub const SUCCESS_TIER_HIGH: u32 = 70;

/// Success probability above which a strategy is rated medium.
pub const SUCCESS_TIER_MEDIUM: u32 = 40;

// ── Progressive Reveal ────────────────────────────────────────────────────────

/// Total duration of the result count-up animation (ms).
pub const REVEAL_DURATION_MS: u64 = 2000;

/// Number of discrete frames in the count-up animation.
pub const REVEAL_STEPS: u32 = 60;

