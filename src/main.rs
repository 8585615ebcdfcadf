//! Coupon Harvester - Main Entry Point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coupon_harvester::config::Config;
use coupon_harvester::{fixtures, pipeline, shares};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Read;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// Coupon Harvester CLI
#[derive(Parser)]
#[command(name = "coupon-harvester")]
#[command(version, about = "Greedy budget allocation across bond lots")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Select lots from a market record and print the report
    Select {
        /// Path to the market record (stdin when omitted)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Generate random market fixtures as JSON
    Generate {
        /// Number of cases to generate
        #[arg(short, long, default_value = "100")]
        cases: usize,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// RNG seed for reproducible fixtures
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Express share values as fractions of their total
    Shares {
        /// Declared number of shares, checked against the list length
        #[arg(short, long)]
        count: Option<i64>,

        /// Share values
        values: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging()?;

    let config = Config::load()?;
    config.validate()?;

    match cli.command {
        Some(Commands::Generate {
            cases,
            output,
            seed,
        }) => run_generate(cases, output.as_deref(), seed),
        Some(Commands::Shares { count, values }) => run_shares(count, &values),
        Some(Commands::Select { input }) => run_select(input.as_deref(), &config),
        None => run_select(None, &config),
    }
}

/// Read a market record, run the selection, print the report.
fn run_select(input: Option<&str>, config: &Config) -> Result<()> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read market record: {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read market record from stdin")?;
            buf
        }
    };

    let report = pipeline::run(&text, &config.pricing)?;
    print!("{report}");
    Ok(())
}

/// Emit random market fixtures as JSON.
fn run_generate(cases: usize, output: Option<&str>, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generated = fixtures::generate_cases(cases, &mut rng);
    let json = serde_json::to_string_pretty(&generated)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write fixtures: {path}"))?;
            info!(cases, path, "fixtures written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Run the percentage-distribution utility.
fn run_shares(count: Option<i64>, values: &[String]) -> Result<()> {
    let fractions = shares::parse_fractions(values)?;
    let list = (!values.is_empty()).then_some(fractions.as_slice());

    shares::validate(count, list)?;

    for line in shares::distribute(&fractions) {
        println!("{line}");
    }
    Ok(())
}

/// Initialize logging with file output.
fn init_logging() -> Result<()> {
    use tracing_subscriber::fmt::writer::MakeWriterExt;

    std::fs::create_dir_all("logs")?;

    let file_appender = tracing_appender::rolling::hourly("logs", "coupon-harvester.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    // Leak the guard to keep it alive for the program duration
    Box::leak(Box::new(_guard));

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("coupon_harvester=debug".parse()?)
                .add_directive(Level::INFO.into()),
        )
        .with_writer(std::io::stderr.and(file_writer))
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .init();

    Ok(())
}
