//! End-to-end checks of the public API against the reference scenarios.
//!
//! Covered scenarios:
//! 1. Head-on 100 m / 50 km/s ocean hit reproduces the reference metrics.
//! 2. Grazing 10 m / 5 km/s land hit zeroes every metric.
//! 3. Scenario files under `assets/scenarios/` load and compute as expected.
//! 4. The strategy catalogue and its projections stay index-aligned.

use std::path::PathBuf;

use asteroid_impact::catalog::StrategyCatalog;
use asteroid_impact::config::{read_impact_config, ImpactConfig};
use asteroid_impact::impact::{FixedProbability, ImpactCalculator, RandomProbability};
use asteroid_impact::location::Location;
use asteroid_impact::params::{SimulationParameters, StrategyId};
use asteroid_impact::reveal::RevealSchedule;
use asteroid_impact::scenario::load_scenario;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn asset(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets").join(path)
}

fn pinned_calculator() -> ImpactCalculator<FixedProbability> {
    ImpactCalculator::new(
        ImpactConfig::default(),
        FixedProbability::new(50.0).expect("in range"),
    )
}

// ── Reference scenarios ───────────────────────────────────────────────────────

#[test]
fn pacific_head_on_matches_reference() {
    let params = SimulationParameters::new(
        100.0,
        50.0,
        90.0,
        Location::predefined("Pacific Ocean").unwrap(),
        StrategyId::Deflect,
    )
    .unwrap();

    let result = pinned_calculator().compute(&params);
    assert_eq!(result.population_affected, 5_000_000);
    assert_eq!(result.infrastructure_damage, 250_000_000_000);
    assert_eq!(result.shockwave_radius, 250);
    assert_eq!(result.fireball_radius, 100);
    assert_eq!(result.tsunami_radius, 500);
    assert_eq!(result.probability, 50.0);
}

#[test]
fn new_york_grazing_is_harmless() {
    let params = SimulationParameters::new(10.0, 5.0, 0.0, Location::default(), StrategyId::Nothing)
        .unwrap();
    let result = pinned_calculator().compute(&params);
    assert_eq!(result.population_affected, 0);
    assert_eq!(result.infrastructure_damage, 0);
    assert_eq!(result.shockwave_radius, 0);
    assert_eq!(result.fireball_radius, 0);
    assert_eq!(result.tsunami_radius, 0);
}

#[test]
fn strategy_choice_does_not_change_metrics() {
    let mut calc = pinned_calculator();
    let base = SimulationParameters::default();
    let reference = calc.compute(&base);
    for id in StrategyId::ALL {
        let params = SimulationParameters {
            strategy: id,
            ..base.clone()
        };
        assert_eq!(calc.compute(&params), reference);
    }
}

#[test]
fn same_seed_same_probability() {
    let params = SimulationParameters::default();
    let mut a = ImpactCalculator::new(ImpactConfig::default(), RandomProbability::seeded(99));
    let mut b = ImpactCalculator::new(ImpactConfig::default(), RandomProbability::seeded(99));
    assert_eq!(a.compute(&params), b.compute(&params));
}

// ── Asset files ───────────────────────────────────────────────────────────────

#[test]
fn shipped_config_equals_defaults() {
    let config = read_impact_config(asset("impact.toml")).expect("shipped config must load");
    assert_eq!(config, ImpactConfig::default());
}

#[test]
fn pacific_scenario_file_computes_reference() {
    let params = load_scenario(asset("scenarios/pacific_direct.toml")).expect("scenario loads");
    let result = pinned_calculator().compute(&params);
    assert_eq!(result.tsunami_radius, 500);
    assert_eq!(result.population_affected, 5_000_000);
}

#[test]
fn grazing_scenario_file_is_all_zero() {
    let params = load_scenario(asset("scenarios/new_york_grazing.toml")).expect("scenario loads");
    assert_eq!(params.strategy, StrategyId::Nothing);
    let result = pinned_calculator().compute(&params);
    assert_eq!(result.shockwave_radius, 0);
    assert_eq!(result.tsunami_radius, 0);
}

#[test]
fn globe_pick_scenario_lands_in_indian_ocean() {
    let params = load_scenario(asset("scenarios/globe_pick.toml")).expect("scenario loads");
    assert_eq!(params.location.name, "Indian Ocean");
    let result = pinned_calculator().compute(&params);
    assert!(result.tsunami_radius > 0);
}

// ── Strategy catalogue ────────────────────────────────────────────────────────

#[test]
fn projections_stay_aligned_with_catalogue() {
    let catalog = StrategyCatalog;
    let strategies = catalog.strategies();
    let chart = catalog.chart_series();
    let radar = catalog.radar_series();

    assert_eq!(strategies.len(), 4);
    assert_eq!(chart.len(), strategies.len());
    assert_eq!(radar.len(), 3);

    for (point, strategy) in chart.iter().zip(strategies) {
        let first = strategy.name.split_whitespace().next().unwrap();
        assert_eq!(point.label, first);
        assert_eq!(point.success_probability, strategy.success_probability);
        assert_eq!(point.time_required, strategy.time_required);
    }
    for (point, strategy) in radar.iter().zip(strategies) {
        assert_eq!(point.label, strategy.short_label());
        assert_eq!(point.feasibility, f64::from(strategy.success_probability));
    }
}

#[test]
fn projections_are_stable_across_calls() {
    let catalog = StrategyCatalog;
    assert_eq!(catalog.chart_series(), catalog.chart_series());
    assert_eq!(catalog.radar_series(), catalog.radar_series());
}

// ── Reveal ────────────────────────────────────────────────────────────────────

#[test]
fn reveal_lands_on_computed_result() {
    let params = load_scenario(asset("scenarios/pacific_direct.toml")).unwrap();
    let result = pinned_calculator().compute(&params);
    let schedule = RevealSchedule::default();

    let first = schedule.frame(&result, 1);
    assert!(first.population_affected < result.population_affected);

    let last = schedule.frame(&result, schedule.steps);
    assert_eq!(last.population_affected, result.population_affected);
    assert_eq!(last.fireball_radius, result.fireball_radius);
    assert_eq!(last.probability, result.probability);
}

#[test]
fn reveal_ends_on_unrounded_probability() {
    let mut calc = ImpactCalculator::new(
        ImpactConfig::default(),
        FixedProbability::new(42.123456).expect("in range"),
    );
    let result = calc.compute(&SimulationParameters::default());
    let last = RevealSchedule::default()
        .frames(&result)
        .last()
        .expect("non-empty schedule");
    assert_eq!(last.probability, 42.123456);
    assert_eq!(last.population_affected, result.population_affected);
}
