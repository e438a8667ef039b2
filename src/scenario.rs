//! Scenario runner for batches of calculation requests
//!
//! Holds one set of assumptions and evaluates many independent requests in
//! parallel. Output order always matches input order.

use crate::assumptions::Assumptions;
use crate::calculator::{evaluate, CalculationOutcome, CalculationRequest, CalculationResult};
use crate::error::{CalcError, ValidationErrors};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

/// Batch evaluator
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let requests = ScenarioRunner::load_requests("requests.json")?;
/// let outcomes = runner.run_outcomes(&requests);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Runner with default assumptions
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::default(),
        }
    }

    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn run(&self, request: &CalculationRequest) -> Result<CalculationResult, ValidationErrors> {
        evaluate(request, &self.assumptions)
    }

    /// Evaluate every request in parallel
    pub fn run_batch(&self, requests: &[CalculationRequest]) -> Vec<Result<CalculationResult, ValidationErrors>> {
        let start = Instant::now();
        let results: Vec<_> = requests.par_iter().map(|r| self.run(r)).collect();

        let rejected = results.iter().filter(|r| r.is_err()).count();
        if rejected > 0 {
            log::warn!("{} of {} requests rejected by validation", rejected, requests.len());
        }
        log::info!("evaluated {} requests in {:?}", requests.len(), start.elapsed());

        results
    }

    /// Same as [`run_batch`](Self::run_batch), in serializable form
    pub fn run_outcomes(&self, requests: &[CalculationRequest]) -> Vec<CalculationOutcome> {
        self.run_batch(requests)
            .into_iter()
            .map(CalculationOutcome::from)
            .collect()
    }

    /// Read a JSON array of requests
    pub fn read_requests<R: Read>(reader: R) -> Result<Vec<CalculationRequest>, CalcError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a JSON array of requests from a file
    pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<CalculationRequest>, CalcError> {
        let file = File::open(path)?;
        Self::read_requests(BufReader::new(file))
    }

    /// Write outcomes as a pretty-printed JSON array
    pub fn write_outcomes<W: Write>(outcomes: &[CalculationOutcome], writer: W) -> Result<(), CalcError> {
        let mut writer = BufWriter::new(writer);
        serde_json::to_writer_pretty(&mut writer, outcomes)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
