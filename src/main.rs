//! Robots rule guard CLI
//!
//! Loads a robots configuration and answers a single query against it.

use clap::{Parser, Subcommand, ValueEnum};
use robots_guard::{Guard, load_config};
use std::time::{Duration, Instant};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Robots rule guard - check crawler access against robots rules
#[derive(Parser, Debug)]
#[command(name = "robots-guard")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (TOML, or JSON by extension)
    #[arg(short, long, env = "ROBOTS_GUARD_CONFIG")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "ROBOTS_GUARD_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Log output format
    #[arg(long, env = "ROBOTS_GUARD_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable output
    Pretty,
    /// JSON structured output
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether an agent may fetch a path
    Allowed { agent: String, path: String },

    /// Check whether an agent may index a path
    Indexable { agent: String, path: String },

    /// Check whether an agent is blocked from the whole site
    DisallowAll { agent: String },

    /// Time guard construction and a batch of queries
    Bench {
        /// Number of times to repeat the query batch
        #[arg(short, long, default_value_t = 1)]
        iterations: u32,
    },
}

const BENCH_QUERIES: &[(&str, &str)] = &[
    ("googlebot", "/foo/bar"),
    ("googlebot", "/bar/baz"),
    ("*", "/foo/quux"),
    ("*", "/quux/baz"),
];

fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match args.log_format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn measure<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    println!("[{label}] Duration: {elapsed:?}");
    (result, elapsed)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let config = load_config(&args.config)
        .inspect_err(|e| error!(error = %e, "Failed to load configuration"))?;

    match args.command {
        Command::Allowed { agent, path } => {
            let guard = Guard::new(&config)?;
            println!("{}", guard.is_allowed(&agent, &path));
        }
        Command::Indexable { agent, path } => {
            let guard = Guard::new(&config)?;
            println!("{}", guard.is_indexable(&agent, &path));
        }
        Command::DisallowAll { agent } => {
            let guard = Guard::new(&config)?;
            println!("{}", guard.is_disallow_all(&agent));
        }
        Command::Bench { iterations } => {
            let (guard, _) = measure("create guard", || Guard::new(&config));
            let guard = guard?;
            info!(rule_groups = guard.groups().len(), "Guard ready");

            measure("use guard", || {
                for _ in 0..iterations {
                    for (agent, path) in BENCH_QUERIES {
                        std::hint::black_box(guard.is_allowed(agent, path));
                    }
                }
            });
        }
    }

    Ok(())
}
