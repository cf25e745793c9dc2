// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `roommates` - find a stable roommates matching by exhaustive search.
//!
//! Reads a problem from a file (or stdin), searches, and prints room assignments:
//!
//! ```text
//! $ echo "4  1 2 3  0 2 3  0 1 3  0 1 2" | roommates
//! Stable Matching:
//! Room 1: Person 0 and Person 1
//! Room 2: Person 2 and Person 3
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` or `-v`.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use roommates_search::input::{read_problem, InputFormat};
use roommates_search::{SearchReport, Solver, SolverConfig, StabilityRule};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Problem file; reads stdin when omitted or `-`
    path: Option<PathBuf>,

    /// Input encoding
    #[arg(long, value_enum, default_value_t = InputFormat::Tokens)]
    format: InputFormat,

    /// Stability rule applied to each complete candidate
    #[arg(long, value_enum, default_value_t = StabilityRule::RoomLocal)]
    rule: StabilityRule,

    /// Count every accepted arrangement instead of stopping at the first
    #[arg(long)]
    count: bool,

    /// Print search counters after the result
    #[arg(long)]
    stats: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logger(verbose: u8) {
    let default_level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(std::io::IsTerminal::is_terminal(&io::stderr()))
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn print_stats(report: &SearchReport) {
    for (counter, value) in report.statistics.iter() {
        println!("{counter}: {value}");
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logger(args.verbose);

    let problem = match &args.path {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            read_problem(BufReader::new(file), args.format)
                .with_context(|| format!("cannot read problem from {}", path.display()))?
        }
        _ => read_problem(io::stdin().lock(), args.format).context("cannot read problem from stdin")?,
    };

    let solver = Solver::new(SolverConfig { rule: args.rule });

    if args.count {
        let report = solver.count_stable(&problem);
        println!("Stable arrangements: {}", report.stable_candidates());
        if args.stats {
            print_stats(&report);
        }
        return Ok(());
    }

    let report = solver.find_stable_matching(&problem);
    match &report.matching {
        Some(_) if problem.participant_count() == 1 => println!("Stable Matching"),
        Some(matching) => {
            println!("Stable Matching:");
            for room in matching.rooms() {
                println!("{room}");
            }
        }
        None => println!("No stable matching found."),
    }
    if args.stats {
        print_stats(&report);
    }

    Ok(())
}
