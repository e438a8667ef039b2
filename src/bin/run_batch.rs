//! Evaluate a JSON file of calculation requests in parallel
//!
//! Usage: run_batch <requests.json> [outcomes.json]
//!
//! The input is an array of tagged requests (see `fincalc template <instrument>`).
//! Outcomes are written in input order, to the given path or to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use fincalc::{Assumptions, ScenarioRunner};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "run_batch", about = "Evaluate a batch of calculation requests")]
struct Args {
    /// JSON array of requests
    input: PathBuf,

    /// Output path; stdout when omitted
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let requests = ScenarioRunner::load_requests(&args.input)
        .with_context(|| format!("loading requests from {}", args.input.display()))?;
    log::info!("loaded {} requests in {:?}", requests.len(), start.elapsed());

    let runner = ScenarioRunner::with_assumptions(Assumptions::from_env());
    let outcomes = runner.run_outcomes(&requests);
    let rejected = outcomes.iter().filter(|o| !o.is_ok()).count();

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            ScenarioRunner::write_outcomes(&outcomes, file)?;
            eprintln!(
                "{} requests, {} rejected, written to {} in {:?}",
                outcomes.len(),
                rejected,
                path.display(),
                start.elapsed()
            );
        }
        None => ScenarioRunner::write_outcomes(&outcomes, io::stdout().lock())?,
    }

    Ok(())
}
