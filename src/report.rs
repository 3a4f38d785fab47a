//! Human-readable rendering of results for the command-line front end.

use serde::Serialize;

use crate::catalog::{ChartPoint, RadarPoint, StrategyCatalog};
use crate::impact::ImpactResult;
use crate::params::SimulationParameters;

/// Abbreviates a count: `1.2B`, `3.4M`, `5.6K`, or the plain number.
pub fn format_count(value: u64) -> String {
    let v = value as f64;
    if v >= 1e9 {
        format!("{:.1}B", v / 1e9)
    } else if v >= 1e6 {
        format!("{:.1}M", v / 1e6)
    } else if v >= 1e3 {
        format!("{:.1}K", v / 1e3)
    } else {
        group_thousands(value)
    }
}

/// Abbreviates a currency amount: `$1.2T`, `$3.4B`, `$5.6M`, or `$12,345`.
pub fn format_currency(value: u64) -> String {
    let v = value as f64;
    if v >= 1e12 {
        format!("${:.1}T", v / 1e12)
    } else if v >= 1e9 {
        format!("${:.1}B", v / 1e9)
    } else if v >= 1e6 {
        format!("${:.1}M", v / 1e6)
    } else {
        format!("${}", group_thousands(value))
    }
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn format_radius(km: u32) -> String {
    format!("{km} km")
}

/// One labelled line of the results panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub title: &'static str,
    pub value: String,
}

/// Everything the front end prints for one run.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactReport {
    pub parameters: SimulationParameters,
    pub result: ImpactResult,
    pub lines: Vec<ReportLine>,
}

impl ImpactReport {
    pub fn new(parameters: SimulationParameters, result: ImpactResult) -> Self {
        let tsunami = if result.tsunami_radius > 0 {
            format_radius(result.tsunami_radius)
        } else {
            "N/A".to_string()
        };
        let lines = vec![
            ReportLine {
                title: "Population Affected",
                value: format_count(result.population_affected),
            },
            ReportLine {
                title: "Infrastructure Damage",
                value: format_currency(result.infrastructure_damage),
            },
            ReportLine {
                title: "Shockwave Radius",
                value: format_radius(result.shockwave_radius),
            },
            ReportLine {
                title: "Fireball Radius",
                value: format_radius(result.fireball_radius),
            },
            ReportLine {
                title: "Tsunami Radius",
                value: tsunami,
            },
            ReportLine {
                title: "Impact Probability",
                value: format!("{:.1}%", result.probability),
            },
        ];
        Self {
            parameters,
            result,
            lines,
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Strategy comparison bundle: chart and radar series side by side.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub chart: Vec<ChartPoint>,
    pub radar: Vec<RadarPoint>,
}

impl ComparisonReport {
    pub fn new(catalog: &StrategyCatalog) -> Self {
        Self {
            chart: catalog.chart_series(),
            radar: catalog.radar_series(),
        }
    }

    /// Plain-text table of the catalogue for terminals.
    pub fn render_table(catalog: &StrategyCatalog) -> String {
        let mut out = format!(
            "{:<20} {:>12} {:>10} {:>8} {:>8}\n",
            "Strategy", "Lives Saved", "Cost", "Success", "Time"
        );
        for s in catalog.strategies() {
            let lives = if s.lives_saved > 0 {
                format!("{}M", s.lives_saved as f64 / 1e6)
            } else {
                "None".to_string()
            };
            let cost = if s.cost > 0 {
                format!("${}B", s.cost as f64 / 1e9)
            } else {
                "Free".to_string()
            };
            let time = if s.time_required > 0 {
                format!("{}mo", s.time_required)
            } else {
                "N/A".to_string()
            };
            out.push_str(&format!(
                "{:<20} {:>12} {:>10} {:>7}% {:>8}\n",
                s.name, lives, cost, s.success_probability, time
            ));
        }
        out
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
