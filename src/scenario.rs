//! Scenario files: one impact run described in TOML.
//!
//! Every key is optional and falls back to [`SimulationParameters::default`]:
//!
//! ```toml
//! asteroid_size = 120   # m
//! speed = 35            # km/s
//! angle = 60            # degrees
//! strategy = "nuclear"
//!
//! [location]
//! name = "Pacific Ocean"  # predefined target; coordinates are looked up
//! ```
//!
//! A `[location]` with `lat`/`lng` but no `name` is named by
//! [`region_name`](crate::location::region_name); giving all three uses them
//! verbatim.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{ImpactError, Result};
use crate::location::Location;
use crate::params::{SimulationParameters, StrategyId};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationSpec {
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl LocationSpec {
    fn resolve(self) -> Result<Location> {
        match (self.name, self.lat, self.lng) {
            (Some(name), Some(lat), Some(lng)) => Location::new(name, lat, lng),
            (Some(name), None, None) => Location::predefined(&name),
            (None, Some(lat), Some(lng)) => Location::from_coordinates(lat, lng),
            (None, None, None) => Ok(Location::default()),
            (_, lat, _) => Err(ImpactError::IncompleteCoordinates {
                missing: if lat.is_none() { "lat" } else { "lng" },
            }),
        }
    }
}

/// Raw scenario as written on disk.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub asteroid_size: Option<f64>,
    pub speed: Option<f64>,
    pub angle: Option<f64>,
    pub strategy: Option<StrategyId>,
    pub location: Option<LocationSpec>,
}

impl Scenario {
    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Fills gaps from the defaults and validates the result.
    pub fn into_parameters(self) -> Result<SimulationParameters> {
        let defaults = SimulationParameters::default();
        SimulationParameters::new(
            self.asteroid_size.unwrap_or(defaults.asteroid_size),
            self.speed.unwrap_or(defaults.speed),
            self.angle.unwrap_or(defaults.angle),
            self.location.unwrap_or_default().resolve()?,
            self.strategy.unwrap_or(defaults.strategy),
        )
    }
}

/// Reads, decodes and validates a scenario file.
pub fn load_scenario(path: impl AsRef<Path>) -> Result<SimulationParameters> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ImpactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario = Scenario::from_toml_str(&contents).map_err(|err| ImpactError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let params = scenario.into_parameters()?;
    info!(
        "Loaded scenario {}: {} m at {} km/s, {}° over {}",
        path.display(),
        params.asteroid_size,
        params.speed,
        params.angle,
        params.location.name
    );
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Result<SimulationParameters> {
        Scenario::from_toml_str(src)
            .expect("scenario TOML should decode")
            .into_parameters()
    }

    #[test]
    fn empty_scenario_is_default_run() {
        assert_eq!(parse("").unwrap(), SimulationParameters::default());
    }

    #[test]
    fn predefined_location_by_name() {
        let params = parse(
            "asteroid_size = 100\nspeed = 50\nangle = 90\nstrategy = \"nothing\"\n\
             [location]\nname = \"Pacific Ocean\"\n",
        )
        .unwrap();
        assert_eq!(params.asteroid_size, 100.0);
        assert_eq!(params.strategy, StrategyId::Nothing);
        assert_eq!(params.location.lng, -150.0);
        assert!(params.location.is_ocean());
    }

    #[test]
    fn coordinates_only_are_named_by_region() {
        let params = parse("[location]\nlat = -35.0\nlng = 140.0\n").unwrap();
        assert_eq!(params.location.name, "Australia");
    }

    #[test]
    fn explicit_location_is_used_verbatim() {
        let params = parse("[location]\nname = \"Home\"\nlat = 1.5\nlng = 2.5\n").unwrap();
        assert_eq!(params.location.name, "Home");
        assert_eq!(params.location.lat, 1.5);
    }

    #[test]
    fn unknown_location_name_is_rejected() {
        assert!(matches!(
            parse("[location]\nname = \"Atlantis\"\n"),
            Err(ImpactError::UnknownLocation(_))
        ));
    }

    #[test]
    fn half_specified_coordinates_are_rejected() {
        assert!(matches!(
            parse("[location]\nlat = 10.0\n"),
            Err(ImpactError::IncompleteCoordinates { missing: "lng" })
        ));
    }

    #[test]
    fn out_of_domain_values_are_rejected() {
        assert!(parse("speed = 80\n").is_err());
    }

    #[test]
    fn unknown_keys_and_strategies_fail_to_decode() {
        assert!(Scenario::from_toml_str("mass = 3\n").is_err());
        assert!(Scenario::from_toml_str("strategy = \"pray\"\n").is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_scenario("no/such/scenario.toml"),
            Err(ImpactError::Io { .. })
        ));
    }
}
