//! mux-bench command-line runner.
//!
//! Times every router adapter against the synthetic route tables without
//! Criterion's statistics, printing one Go-style line per case:
//!
//! ```text
//! BenchmarkAxumNestedSimple              1000000        412.3 ns/op
//! BenchmarkAxumNestedRoute15             1000000        498.0 ns/op
//! ```
//!
//! Use `cargo bench` for statistically sound numbers; this runner is for
//! quick comparisons and for checking that every route answers.

use std::path::PathBuf;

use clap::Parser;

use mux_bench::config::validation::validate_config;
use mux_bench::config::{load_config, BenchConfig, ConfigError};
use mux_bench::harness::ResponseCheck;
use mux_bench::observability::init_logging;
use mux_bench::suite::Suite;

#[derive(Parser)]
#[command(name = "mux-bench")]
#[command(about = "HTTP router dispatch benchmarks", long_about = None)]
struct Cli {
    /// Run only cases whose name contains this pattern
    #[arg(default_value = "")]
    filter: String,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dispatches per case
    #[arg(short = 'n', long)]
    iterations: Option<u64>,

    /// Require every response to be 200 "hello"
    #[arg(long)]
    check: bool,

    /// List matching case names and exit
    #[arg(long)]
    list: bool,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => BenchConfig::default(),
    };
    if let Some(iterations) = cli.iterations {
        config.suite.iterations = iterations;
    }
    if cli.check {
        config.suite.check_responses = true;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.observability)?;

    tracing::info!(
        namespaces = ?config.fixture.namespaces,
        scales = ?config.suite.scales,
        iterations = config.suite.iterations,
        check_responses = config.suite.check_responses,
        "Configuration loaded"
    );

    let suite = Suite::from_config(&config)?;
    let cases: Vec<_> = suite.filter(&cli.filter).collect();
    if cases.is_empty() {
        tracing::warn!(filter = %cli.filter, "No benchmark matches filter");
        return Ok(());
    }

    if cli.list {
        for case in cases {
            println!("Benchmark{}", case.name());
        }
        return Ok(());
    }

    let check = if config.suite.check_responses {
        ResponseCheck::hello()
    } else {
        ResponseCheck::Disabled
    };

    let mut reports = Vec::with_capacity(cases.len());
    for case in cases {
        let mut prepared = case.prepare()?;
        let report = prepared.run(config.suite.iterations, check.clone())?;
        if !cli.json {
            println!("{}", report);
        }
        reports.push(report);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    tracing::info!(cases = reports.len(), "Benchmarks complete");
    Ok(())
}
