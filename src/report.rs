//! Human-readable rendering of harness state

use crate::config::TimeUnit;
use crate::harness::TestHarness;
use crate::runner::TestRunner;
use itertools::Itertools;
use std::fmt;
use std::time::Duration;

/// Render a harness as text: a header naming the algorithm (and target for
/// searches), one line per test, then a totals line.
pub fn render<R: TestRunner>(harness: &TestHarness<R>, unit: TimeUnit) -> String {
    let mut lines = Vec::with_capacity(harness.test_count() + 3);

    lines.push(format!("Algorithm: {}", harness.runner().name()));
    if let Some(target) = harness.runner().target() {
        lines.push(format!("Target value: {target}"));
    }

    let times = harness.test_elapsed_times();
    for (index, (outcome, elapsed)) in harness.results().iter().zip(&times).enumerate() {
        lines.push(format!(
            "Test {}: {} in {} {}",
            index + 1,
            if outcome.is_pass() { "pass" } else { "fail" },
            format_duration(*elapsed, unit),
            unit.suffix()
        ));
    }

    lines.push(format!(
        "Total: {}/{} passed in {} {}",
        harness.pass_count(),
        harness.test_count(),
        format_duration(harness.suite_elapsed(), unit),
        unit.suffix()
    ));

    lines.into_iter().join("\n")
}

/// Duration in the given unit with three decimals
pub fn format_duration(elapsed: Duration, unit: TimeUnit) -> String {
    format!("{:.3}", elapsed.as_secs_f64() * unit.per_second())
}

/// Report view over a harness, rendered in microseconds
pub struct Report<'a, R: TestRunner> {
    harness: &'a TestHarness<R>,
    unit: TimeUnit,
}

impl<'a, R: TestRunner> Report<'a, R> {
    pub fn new(harness: &'a TestHarness<R>) -> Self {
        Self {
            harness,
            unit: TimeUnit::default(),
        }
    }

    pub fn with_unit(mut self, unit: TimeUnit) -> Self {
        self.unit = unit;
        self
    }
}

impl<R: TestRunner> fmt::Display for Report<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.harness, self.unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::error::HarnessResult;
    use crate::runner::AlgorithmRunner;

    #[test]
    fn test_report_layout_for_search() -> HarnessResult<()> {
        let runner = AlgorithmRunner::search(Algorithm::LinearSearch, 4)?;
        let mut harness = TestHarness::new(vec![vec![4, 1], vec![2, 3]], runner);
        harness.run_suite()?;

        let text = render(&harness, TimeUnit::Micros);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Algorithm: linear_search");
        assert_eq!(lines[1], "Target value: 4");
        assert!(lines[2].starts_with("Test 1: pass in "));
        assert!(lines[2].ends_with(" us"));
        assert!(lines[3].starts_with("Test 2: fail in "));
        assert!(lines[4].starts_with("Total: 1/2 passed in "));
        Ok(())
    }

    #[test]
    fn test_report_for_sort_has_no_target() -> HarnessResult<()> {
        let runner = AlgorithmRunner::sort(Algorithm::MergeSort)?;
        let mut harness = TestHarness::new(vec![vec![2, 1]], runner);
        harness.run_suite()?;

        let text = Report::new(&harness).with_unit(TimeUnit::Millis).to_string();
        assert!(!text.contains("Target value"));
        assert!(text.ends_with(" ms"));
        assert!(text.contains("Total: 1/1 passed"));
        Ok(())
    }

    #[test]
    fn test_report_before_any_run() -> HarnessResult<()> {
        let harness = TestHarness::new(vec![vec![1]], AlgorithmRunner::sort(Algorithm::QuickSort)?);
        let text = render(&harness, TimeUnit::Micros);
        assert_eq!(text, "Algorithm: quick_sort\nTotal: 0/0 passed in 0.000 us");
        Ok(())
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(1500), TimeUnit::Micros), "1500.000");
        assert_eq!(format_duration(Duration::from_micros(1500), TimeUnit::Millis), "1.500");
    }
}
