//! Asteroid impact estimator library
//!
//! An illustrative, deterministic model that turns user-chosen impact
//! parameters into consequence metrics, alongside a fixed catalogue of
//! mitigation strategies with chart- and radar-ready comparison views.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod impact;
pub mod location;
pub mod params;
pub mod report;
pub mod reveal;
pub mod scenario;

pub use catalog::{Strategy, StrategyCatalog};
pub use error::ImpactError;
pub use impact::{ImpactCalculator, ImpactResult};
pub use location::Location;
pub use params::{SimulationParameters, StrategyId};
