//! Batch evaluation of loan scenarios loaded from CSV
//!
//! Scenario file columns: `id,principal,annual_rate_percent,months`

use std::io;
use std::path::Path;

use csv::{Reader, Writer};
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::emi::{LoanSummary, LoanTerms};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to read scenarios: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One row of a scenario file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanScenario {
    pub id: String,
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub months: i64,
}

impl LoanScenario {
    pub fn terms(&self) -> LoanTerms {
        LoanTerms::new(self.principal, self.annual_rate_percent, self.months)
    }
}

/// Scenario with its computed summary, flattened for CSV output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub id: String,
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub months: i64,
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

impl ScenarioResult {
    fn new(scenario: &LoanScenario, summary: LoanSummary) -> Self {
        Self {
            id: scenario.id.clone(),
            principal: scenario.principal,
            annual_rate_percent: scenario.annual_rate_percent,
            months: scenario.months,
            emi: summary.emi,
            total_payment: summary.total_payment,
            total_interest: summary.total_interest,
        }
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<LoanScenario>, BatchError> {
    let reader = Reader::from_path(path)?;
    read_scenarios(reader)
}

/// Load scenarios from any CSV source (stdin, in-memory buffers)
pub fn read_scenarios<R: io::Read>(mut reader: Reader<R>) -> Result<Vec<LoanScenario>, BatchError> {
    let mut scenarios = Vec::new();
    for result in reader.deserialize() {
        let scenario: LoanScenario = result?;
        scenarios.push(scenario);
    }
    Ok(scenarios)
}

/// Evaluate every scenario in parallel; output order matches input order
pub fn evaluate_scenarios(scenarios: &[LoanScenario]) -> Vec<ScenarioResult> {
    let results: Vec<ScenarioResult> = scenarios
        .par_iter()
        .map(|scenario| ScenarioResult::new(scenario, scenario.terms().summary()))
        .collect();

    info!("evaluated {} loan scenarios", results.len());
    results
}

/// Write results as CSV to any sink
pub fn write_results<W: io::Write>(sink: W, results: &[ScenarioResult]) -> Result<(), BatchError> {
    let mut writer = Writer::from_writer(sink);
    for row in results {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "id,principal,annual_rate_percent,months\n\
home,100000,10,12\n\
car,12000,0,12\n\
empty,0,9,24\n";

    #[test]
    fn test_read_and_evaluate_preserves_order() {
        let scenarios = read_scenarios(Reader::from_reader(SAMPLE.as_bytes())).unwrap();
        assert_eq!(scenarios.len(), 3);

        let results = evaluate_scenarios(&scenarios);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["home", "car", "empty"]);

        assert_eq!(results[0].emi, 8791.59);
        assert_eq!(results[1].emi, 1000.0);
        assert_eq!(results[2].emi, 0.0);
    }

    #[test]
    fn test_load_from_file_and_write() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let scenarios = load_scenarios(file.path()).unwrap();
        let results = evaluate_scenarios(&scenarios);

        let mut out = Vec::new();
        write_results(&mut out, &results).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,principal,annual_rate_percent,months,emi,total_payment,total_interest")
        );
        assert!(lines.next().unwrap().starts_with("home,100000.0,10.0,12,8791.59"));
    }

    #[test]
    fn test_bad_row_is_an_error() {
        let bad = "id,principal,annual_rate_percent,months\nx,abc,10,12\n";
        let result = read_scenarios(Reader::from_reader(bad.as_bytes()));
        assert!(matches!(result, Err(BatchError::Csv(_))));
    }
}
