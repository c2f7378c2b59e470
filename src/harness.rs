//! Test harness that runs one algorithm over every loaded work item

use crate::error::HarnessResult;
use crate::input::{WorkItem, WorkSlot};
use crate::runner::{TestOutcome, TestRunner};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Runs a [`TestRunner`] over a list of work items and keeps per-test
/// results and timings, index-aligned with the work list.
pub struct TestHarness<R: TestRunner> {
    work_list: Vec<WorkSlot>,
    runner: R,
    results: Vec<TestOutcome>,
    suite_start: Option<Instant>,
    suite_end: Option<Instant>,
    test_start_times: Vec<Instant>,
    test_end_times: Vec<Instant>,
    test_count: usize,
}

impl<R: TestRunner> TestHarness<R> {
    /// Build a harness over fully parsed work items
    pub fn new(work_items: Vec<WorkItem>, runner: R) -> Self {
        Self::from_slots(work_items.into_iter().map(Some).collect(), runner)
    }

    /// Build a harness over loaded slots; empty slots become failed tests
    pub fn from_slots(work_list: Vec<WorkSlot>, runner: R) -> Self {
        let mut harness = Self {
            work_list,
            runner,
            results: Vec::new(),
            suite_start: None,
            suite_end: None,
            test_start_times: Vec::new(),
            test_end_times: Vec::new(),
            test_count: 0,
        };
        harness.clear_all_history();
        harness
    }

    /// Rebind the runner; history from the previous runner is discarded
    pub fn set_runner(&mut self, runner: R) {
        self.runner = runner;
        self.clear_all_history();
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn work_items(&self) -> &[WorkSlot] {
        &self.work_list
    }

    /// Run the bound algorithm over every work item in order.
    ///
    /// Previous results and timings are replaced. If a test fails with an
    /// error the error is returned and the history recorded so far is kept.
    pub fn run_suite(&mut self) -> HarnessResult<()> {
        self.clear_all_history();
        info!(
            algorithm = self.runner.name(),
            tests = self.work_list.len(),
            "running suite"
        );

        self.suite_start = Some(Instant::now());
        for (index, slot) in self.work_list.iter().enumerate() {
            let start = Instant::now();
            let outcome = self.runner.run_test(slot.as_deref());
            let end = Instant::now();

            let outcome = outcome?;
            debug!(test = index + 1, pass = outcome.is_pass(), "test finished");
            self.results.push(outcome);
            self.test_start_times.push(start);
            self.test_end_times.push(end);
            self.test_count += 1;
        }
        self.suite_end = Some(Instant::now());

        info!(
            algorithm = self.runner.name(),
            passed = self.pass_count(),
            failed = self.fail_count(),
            elapsed_us = self.suite_elapsed().as_micros() as u64,
            "suite finished"
        );
        Ok(())
    }

    /// Forget every timestamp; results and counts are untouched
    pub fn clear_time_history(&mut self) {
        self.suite_start = None;
        self.suite_end = None;
        self.test_start_times.clear();
        self.test_end_times.clear();
    }

    /// Reset counts, timings and results
    pub fn clear_all_history(&mut self) {
        self.test_count = 0;
        self.clear_time_history();
        self.results.clear();
    }

    pub fn results(&self) -> &[TestOutcome] {
        &self.results
    }

    /// Elapsed time of the last suite, zero when none is recorded
    pub fn suite_elapsed(&self) -> Duration {
        match (self.suite_start, self.suite_end) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    /// Per-test elapsed times, index-aligned with the results
    pub fn test_elapsed_times(&self) -> Vec<Duration> {
        self.test_start_times
            .iter()
            .zip(&self.test_end_times)
            .map(|(start, end)| end.saturating_duration_since(*start))
            .collect()
    }

    pub fn test_count(&self) -> usize {
        self.test_count
    }

    /// Number of results that are not a "no result" outcome
    pub fn pass_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_pass()).count()
    }

    pub fn fail_count(&self) -> usize {
        self.test_count - self.pass_count()
    }
}
