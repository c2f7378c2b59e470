//! Algorithms harness
//!
//! Loads arrays of integers from text files, runs a selectable search or sort
//! algorithm over each array, and reports pass/fail status and timing per test
//! and for the whole suite.

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod config;

// Algorithm library
pub mod search;
pub mod sort;
pub mod algorithm;

// Harness
pub mod input;
pub mod runner;
pub mod harness;
pub mod report;
pub mod generate;

// Re-export commonly used types
pub use algorithm::{Algorithm, AlgorithmKind};
pub use config::{HarnessConfig, HarnessConfigBuilder};
pub use error::{HarnessError, HarnessResult};
pub use harness::TestHarness;
pub use input::{WorkItem, WorkSlot};
pub use runner::{AlgorithmRunner, TestOutcome, TestRunner};

use input::LoadOptions;
use std::path::Path;

/// Process exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const ACCESS_FAILURE: i32 = 2;

/// Load the configured input file and run one suite per selected algorithm,
/// returning the rendered report of each suite in order.
pub fn run(config: &HarnessConfig) -> HarnessResult<Vec<String>> {
    config.validate()?;
    let path = config
        .input_file
        .as_deref()
        .ok_or_else(|| HarnessError::invalid_arguments("no input file given"))?;

    let options = LoadOptions {
        blank_lines: config.blank_lines,
        parse_policy: config.parse_policy,
    };
    let slots = input::load_work_items(Path::new(path), options)?;
    run_slots(config, slots)
}

/// Run every selected algorithm over already loaded work slots
pub fn run_slots(config: &HarnessConfig, slots: Vec<WorkSlot>) -> HarnessResult<Vec<String>> {
    config.validate()?;
    let mut algorithms = config.algorithms.iter().copied();
    let Some(first) = algorithms.next() else {
        return Ok(Vec::new());
    };

    let mut harness = TestHarness::from_slots(slots, AlgorithmRunner::new(first, config.target)?);
    let mut reports = Vec::with_capacity(config.algorithms.len());

    harness.run_suite()?;
    reports.push(report::render(&harness, config.time_unit));

    for algorithm in algorithms {
        harness.set_runner(AlgorithmRunner::new(algorithm, config.target)?);
        harness.run_suite()?;
        reports.push(report::render(&harness, config.time_unit));
    }

    Ok(reports)
}
