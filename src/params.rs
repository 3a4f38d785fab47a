//! Simulation inputs and their boundary validation.
//!
//! [`SimulationParameters`] can only be built through [`SimulationParameters::new`]
//! (or deserialised and then [`validate`](SimulationParameters::validate)d), so
//! the calculator never sees out-of-domain values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{validate_range, ImpactError, Result};
use crate::location::Location;

/// Mitigation strategy selector.
///
/// Informational for the calculator; it keys into the
/// [`StrategyCatalog`](crate::catalog::StrategyCatalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyId {
    #[default]
    Deflect,
    Nuclear,
    Evacuation,
    Nothing,
}

impl StrategyId {
    /// All identifiers in catalogue order.
    pub const ALL: [StrategyId; 4] = [
        StrategyId::Deflect,
        StrategyId::Nuclear,
        StrategyId::Evacuation,
        StrategyId::Nothing,
    ];

    /// Selector value used by scenario files and the CLI.
    #[inline]
    pub fn value(self) -> &'static str {
        match self {
            StrategyId::Deflect => "deflect",
            StrategyId::Nuclear => "nuclear",
            StrategyId::Evacuation => "evacuation",
            StrategyId::Nothing => "nothing",
        }
    }

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            StrategyId::Deflect => "Deflect Orbit",
            StrategyId::Nuclear => "Nuclear Detonation",
            StrategyId::Evacuation => "Mass Evacuation",
            StrategyId::Nothing => "Do Nothing",
        }
    }

    /// One-line summary shown next to the selector.
    #[inline]
    pub fn summary(self) -> &'static str {
        match self {
            StrategyId::Deflect => "Change asteroid trajectory",
            StrategyId::Nuclear => "Destroy or fragment asteroid",
            StrategyId::Evacuation => "Relocate affected populations",
            StrategyId::Nothing => "Baseline scenario",
        }
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for StrategyId {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self> {
        StrategyId::ALL
            .into_iter()
            .find(|id| id.value() == s)
            .ok_or_else(|| ImpactError::UnknownStrategy(s.to_string()))
    }
}

/// Accepted range and slider granularity of one numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterDomain {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: &'static str,
}

impl ParameterDomain {
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && (self.min..=self.max).contains(&value)
    }

    pub fn validate(&self, value: f64) -> Result<()> {
        validate_range(self.name, value, self.min, self.max)
    }
}

pub const ASTEROID_SIZE_DOMAIN: ParameterDomain = ParameterDomain {
    name: "asteroid_size",
    min: ASTEROID_SIZE_MIN,
    max: ASTEROID_SIZE_MAX,
    step: ASTEROID_SIZE_STEP,
    unit: "m",
};

pub const SPEED_DOMAIN: ParameterDomain = ParameterDomain {
    name: "speed",
    min: SPEED_MIN,
    max: SPEED_MAX,
    step: SPEED_STEP,
    unit: "km/s",
};

pub const ANGLE_DOMAIN: ParameterDomain = ParameterDomain {
    name: "angle",
    min: ANGLE_MIN,
    max: ANGLE_MAX,
    step: ANGLE_STEP,
    unit: "°",
};

/// User-chosen inputs for one impact run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Diameter (m).
    pub asteroid_size: f64,
    /// Entry speed (km/s).
    pub speed: f64,
    /// Impact angle (degrees), 0 = grazing, 90 = direct.
    pub angle: f64,
    pub location: Location,
    pub strategy: StrategyId,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            asteroid_size: DEFAULT_ASTEROID_SIZE,
            speed: DEFAULT_SPEED,
            angle: DEFAULT_ANGLE,
            location: Location::default(),
            strategy: StrategyId::default(),
        }
    }
}

impl SimulationParameters {
    /// Builds validated parameters; any out-of-domain field is rejected with
    /// [`ImpactError::InvalidParameter`].
    pub fn new(
        asteroid_size: f64,
        speed: f64,
        angle: f64,
        location: Location,
        strategy: StrategyId,
    ) -> Result<Self> {
        let params = Self {
            asteroid_size,
            speed,
            angle,
            location,
            strategy,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        ASTEROID_SIZE_DOMAIN.validate(self.asteroid_size)?;
        SPEED_DOMAIN.validate(self.speed)?;
        ANGLE_DOMAIN.validate(self.angle)?;
        self.location.validate()
    }

    /// Returns a copy with a different target, re-validated.
    pub fn with_location(&self, location: Location) -> Result<Self> {
        Self::new(
            self.asteroid_size,
            self.speed,
            self.angle,
            location,
            self.strategy,
        )
    }
}
