//! Mitigation strategy catalogue and its comparison projections.
//!
//! The catalogue is an immutable static table.  [`StrategyCatalog::chart_series`]
//! and [`StrategyCatalog::radar_series`] are recomputed on every call and stay
//! index-aligned with [`StrategyCatalog::strategies`].

use serde::Serialize;

use crate::constants::*;
use crate::error::{ImpactError, Result};
use crate::params::StrategyId;

/// Static catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strategy {
    pub id: StrategyId,
    pub name: &'static str,
    pub lives_saved: u64,
    /// Currency units.
    pub cost: u64,
    /// Percent, `0..=100`.
    pub success_probability: u32,
    /// Months.
    pub time_required: u32,
    pub description: &'static str,
}

/// Coarse rating of a strategy's success probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuccessTier {
    High,
    Medium,
    Low,
}

impl Strategy {
    /// Label used on chart axes: the first word of the name.
    pub fn short_label(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }

    pub fn success_tier(&self) -> SuccessTier {
        if self.success_probability > SUCCESS_TIER_HIGH {
            SuccessTier::High
        } else if self.success_probability > SUCCESS_TIER_MEDIUM {
            SuccessTier::Medium
        } else {
            SuccessTier::Low
        }
    }

    /// The no-intervention reference entry.
    #[inline]
    pub fn is_baseline(&self) -> bool {
        self.id == StrategyId::Nothing
    }
}

static STRATEGIES: [Strategy; 4] = [
    Strategy {
        id: StrategyId::Deflect,
        name: "Deflect Orbit",
        lives_saved: 8_500_000,
        cost: 50_000_000_000,
        success_probability: 75,
        time_required: 24,
        description: "Gradually change asteroid trajectory using gravitational tractors or kinetic impactors",
    },
    Strategy {
        id: StrategyId::Nuclear,
        name: "Nuclear Detonation",
        lives_saved: 6_200_000,
        cost: 25_000_000_000,
        success_probability: 60,
        time_required: 6,
        description: "Destroy or fragment asteroid using nuclear explosives",
    },
    Strategy {
        id: StrategyId::Evacuation,
        name: "Mass Evacuation",
        lives_saved: 9_200_000,
        cost: 100_000_000_000,
        success_probability: 95,
        time_required: 12,
        description: "Relocate populations from impact zones to safe areas",
    },
    Strategy {
        id: StrategyId::Nothing,
        name: "Do Nothing",
        lives_saved: 0,
        cost: 0,
        success_probability: 0,
        time_required: 0,
        description: "Baseline scenario with no intervention",
    },
];

/// One bar group of the lives-saved vs. cost chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub lives_saved_millions: f64,
    pub cost_billions: f64,
    pub success_probability: u32,
    pub time_required: u32,
}

/// One polygon of the strategy radar, each axis roughly in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarPoint {
    pub label: &'static str,
    pub effectiveness: f64,
    pub feasibility: f64,
    pub speed: f64,
    pub cost_efficiency: f64,
}

/// Read-only handle to the strategy table.
///
/// Zero-sized; copy it freely into whatever needs the catalogue.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyCatalog;

impl StrategyCatalog {
    /// All four entries in fixed order: Deflect Orbit, Nuclear Detonation,
    /// Mass Evacuation, Do Nothing.
    #[inline]
    pub fn strategies(&self) -> &'static [Strategy] {
        &STRATEGIES
    }

    pub fn get(&self, id: StrategyId) -> &'static Strategy {
        match id {
            StrategyId::Deflect => &STRATEGIES[0],
            StrategyId::Nuclear => &STRATEGIES[1],
            StrategyId::Evacuation => &STRATEGIES[2],
            StrategyId::Nothing => &STRATEGIES[3],
        }
    }

    /// Looks up an entry by its display name, e.g. `"Mass Evacuation"`.
    pub fn find_by_name(&self, name: &str) -> Result<&'static Strategy> {
        STRATEGIES
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ImpactError::UnknownStrategy(name.to_string()))
    }

    pub fn chart_series(&self) -> Vec<ChartPoint> {
        self.strategies()
            .iter()
            .map(|s| ChartPoint {
                label: s.short_label(),
                lives_saved_millions: s.lives_saved as f64 / CHART_LIVES_UNIT,
                cost_billions: s.cost as f64 / CHART_COST_UNIT,
                success_probability: s.success_probability,
                time_required: s.time_required,
            })
            .collect()
    }

    /// Radar projection of the leading entries; the "Do Nothing" baseline is
    /// left out because its all-zero profile flattens the normalised axes.
    pub fn radar_series(&self) -> Vec<RadarPoint> {
        self.strategies()
            .iter()
            .take(RADAR_STRATEGY_COUNT)
            .map(|s| RadarPoint {
                label: s.short_label(),
                effectiveness: (s.lives_saved as f64 / RADAR_LIVES_REFERENCE) * 100.0,
                feasibility: f64::from(s.success_probability),
                speed: 100.0 - (f64::from(s.time_required) / RADAR_TIME_REFERENCE) * 100.0,
                cost_efficiency: 100.0 - (s.cost as f64 / RADAR_COST_REFERENCE) * 100.0,
            })
            .collect()
    }
}
