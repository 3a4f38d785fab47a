use std::env;
use std::error::Error;

use asteroid_impact::catalog::StrategyCatalog;
use asteroid_impact::config::{self, DEFAULT_CONFIG_PATH};
use asteroid_impact::impact::{ImpactCalculator, RandomProbability};
use asteroid_impact::params::{
    ParameterDomain, SimulationParameters, ANGLE_DOMAIN, ASTEROID_SIZE_DOMAIN, SPEED_DOMAIN,
};
use asteroid_impact::report::{ComparisonReport, ImpactReport};
use asteroid_impact::reveal::RevealSchedule;
use asteroid_impact::scenario;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: asteroid_impact [SCENARIO.toml] [--toml] [--compare] [--reveal]";

#[derive(Debug, Default)]
struct CliArgs {
    scenario: Option<String>,
    toml: bool,
    compare: bool,
    reveal: bool,
}

impl CliArgs {
    /// Frames are printed only in the text report.
    fn reveal_ignored(&self) -> bool {
        self.toml && self.reveal
    }
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Option<CliArgs>, String> {
    let mut args = CliArgs::default();
    for arg in raw {
        match arg.as_str() {
            "--toml" => args.toml = true,
            "--compare" => args.compare = true,
            "--reveal" => args.reveal = true,
            "-h" | "--help" => return Ok(None),
            flag if flag.starts_with('-') => return Err(format!("unknown flag {flag}")),
            path if args.scenario.is_none() => args.scenario = Some(path.to_string()),
            extra => return Err(format!("unexpected argument {extra}")),
        }
    }
    Ok(Some(args))
}

fn print_help() {
    println!("{USAGE}");
    println!();
    println!("scenario keys:");
    for domain in [ASTEROID_SIZE_DOMAIN, SPEED_DOMAIN, ANGLE_DOMAIN] {
        println!("  {}", describe_domain(&domain));
    }
}

fn describe_domain(domain: &ParameterDomain) -> String {
    format!(
        "{:<14} {}..={} {} (step {})",
        domain.name, domain.min, domain.max, domain.unit, domain.step
    )
}

fn probability_source() -> RandomProbability {
    // IMPACT_SEED pins the probability draw for reproducible runs.
    match env::var("IMPACT_SEED").ok().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => {
            info!("Using seeded probability stream ({seed})");
            RandomProbability::seeded(seed)
        }
        Some(Err(err)) => {
            warn!("Ignoring IMPACT_SEED: {err}");
            RandomProbability::from_entropy()
        }
        None => RandomProbability::from_entropy(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print_help();
            return Ok(());
        }
        Err(msg) => {
            eprintln!("{msg}\n{USAGE}");
            std::process::exit(2);
        }
    };

    let config_path = env::var("IMPACT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let impact_config = config::load_impact_config(&config_path);

    let params = match &args.scenario {
        Some(path) => scenario::load_scenario(path)?,
        None => {
            info!("No scenario given; using the default run");
            SimulationParameters::default()
        }
    };

    let mut calculator = ImpactCalculator::new(impact_config, probability_source());
    let schedule = RevealSchedule::from(calculator.config());
    let result = calculator.compute(&params);
    let report = ImpactReport::new(params, result);
    let catalog = StrategyCatalog;

    if args.reveal_ignored() {
        warn!("--reveal has no TOML form; ignoring it");
    }
    if args.toml {
        print!("{}", report.to_toml()?);
        if args.compare {
            print!("{}", ComparisonReport::new(&catalog).to_toml()?);
        }
        return Ok(());
    }

    if args.reveal {
        // Frame values only; pacing is left to whatever consumes the output.
        for (step, frame) in schedule.frames(&result).enumerate() {
            println!(
                "frame {:>2} (+{} ms): population {} shockwave {} km probability {:.2}%",
                step + 1,
                schedule.step_interval_ms() * (step as u64 + 1),
                frame.population_affected,
                frame.shockwave_radius,
                frame.probability
            );
        }
    }

    let p = &report.parameters;
    println!(
        "IMPACT ANALYSIS: {} m at {} km/s, {}° over {} ({}, {}) [{}: {}]",
        p.asteroid_size,
        p.speed,
        p.angle,
        p.location.name,
        p.location.lat,
        p.location.lng,
        p.strategy.label(),
        p.strategy.summary()
    );
    for line in &report.lines {
        println!("  {:<22} {}", line.title, line.value);
    }

    if args.compare {
        println!();
        print!("{}", ComparisonReport::render_table(&catalog));
    }

    Ok(())
}
