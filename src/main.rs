use std::io::{self, Write};
use std::str::FromStr;
use std::time::Instant;

use clap::Parser;
use env_logger::{fmt::Formatter, Builder, Target};
use log::{info, warn, Level, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tsp_anneal::anneal::{AnnealConfig, AnnealRunner, LogObserver};
use tsp_anneal::instances::cities_for_count;
use tsp_anneal::render::write_matlab_script;
use tsp_anneal::{Error, Result};

/// Multi-start annealing search for a short closed tour.
///
/// Numeric arguments are read from their longest parseable prefix, so `12x`
/// reads as 12. Arguments with no numeric prefix fall back to their defaults.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of cities; 7 or fewer uses the demo set, more than 60 is capped.
    cities: Option<String>,

    /// Number of independent starts (N).
    starts: Option<String>,

    /// Cooling constant (C).
    cooling: Option<String>,

    /// Consecutive rejections before a start stops (M).
    stagnation: Option<String>,

    /// Seed for city generation; the search seed is derived from it.
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads; defaults to one per core.
    #[arg(long)]
    threads: Option<usize>,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Parses the longest prefix of `raw` (after leading whitespace) that is a
/// valid `T`.
fn parse_prefix<T: FromStr>(raw: &str) -> Option<(T, usize)> {
    let text = raw.trim_start();
    (1..=text.len())
        .rev()
        .filter(|&end| text.is_char_boundary(end))
        .find_map(|end| text[..end].parse().ok().map(|value| (value, end)))
        .map(|(value, end)| (value, end + raw.len() - text.len()))
}

fn parse_or<T: FromStr>(name: &str, value: Option<&str>, default: T) -> T {
    let Some(raw) = value else {
        return default;
    };
    match parse_prefix(raw) {
        Some((value, end)) => {
            if !raw[end..].trim().is_empty() {
                warn!("ignoring trailing {:?} in {name}={raw:?}", &raw[end..]);
            }
            value
        }
        None => {
            warn!("could not parse {name}={raw:?}, using default");
            default
        }
    }
}

fn init_logger(level: LevelFilter) -> Result<()> {
    Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf: &mut Formatter, record| {
            writeln!(
                buf,
                "{} {} {}",
                buf.timestamp_millis(),
                level_tag(record.level()),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| Error::Logger(e.to_string()))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

fn main() -> Result<()> {
    let now = Instant::now();
    let args = Args::parse();
    init_logger(args.log_level)?;

    let defaults = AnnealConfig::default();
    let count = parse_or("cities", args.cities.as_deref(), 0i64);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };
    let cities = cities_for_count(usize::try_from(count).unwrap_or(0), &mut rng);

    let config = AnnealConfig {
        starts: parse_or("starts", args.starts.as_deref(), defaults.starts),
        cooling: parse_or("cooling", args.cooling.as_deref(), defaults.cooling),
        stagnation_limit: parse_or(
            "stagnation",
            args.stagnation.as_deref(),
            defaults.stagnation_limit,
        ),
        seed: Some(rng.random()),
        threads: args.threads,
    };

    info!(
        "cities={} starts={} cooling={} stagnation={}",
        cities.len(),
        config.starts,
        config.cooling,
        config.stagnation_limit
    );

    let result = AnnealRunner::run_with_observer(&cities, &config, &LogObserver)?;

    info!(
        "best distance {:.4} {} time={:.2}s",
        result.best_distance(),
        result.best,
        now.elapsed().as_secs_f32()
    );
    info!("matlab script to view solution follows on stdout");

    write_matlab_script(io::stdout().lock(), &cities, &result.best)
}
