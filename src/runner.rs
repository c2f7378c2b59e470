//! The runnable-test abstraction a harness is parameterized over

use crate::algorithm::{Algorithm, AlgorithmFn};
use crate::error::{HarnessError, HarnessResult};
use std::fmt;

/// Legacy marker printed for tests that produced no result
pub const SENTINEL: i64 = -1;

/// Outcome of running one algorithm over one work item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    /// Search hit at this index
    Found(usize),
    /// Sorted copy of the input
    Sorted(Vec<i64>),
    /// Search target absent
    NotFound,
    /// No usable work item was supplied
    InvalidInput,
}

impl TestOutcome {
    /// Both "no result" cases count as failures, whatever their cause
    pub fn is_pass(&self) -> bool {
        !matches!(self, TestOutcome::NotFound | TestOutcome::InvalidInput)
    }

    pub fn sorted(&self) -> Option<&[i64]> {
        match self {
            TestOutcome::Sorted(values) => Some(values),
            _ => None,
        }
    }
}

impl From<Option<usize>> for TestOutcome {
    fn from(found: Option<usize>) -> Self {
        found.map_or(TestOutcome::NotFound, TestOutcome::Found)
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestOutcome::Found(index) => write!(f, "{index}"),
            TestOutcome::Sorted(values) => write!(f, "{values:?}"),
            TestOutcome::NotFound | TestOutcome::InvalidInput => write!(f, "{SENTINEL}"),
        }
    }
}

/// Something a harness can run once per work item.
///
/// Implementors must override [`TestRunner::run_test`]; the provided body
/// fails with [`HarnessError::UnimplementedAlgorithm`] so a runner without an
/// implementation can never be mistaken for one that found nothing.
pub trait TestRunner {
    fn name(&self) -> &str;

    /// Search target, if this runner searches
    fn target(&self) -> Option<i64> {
        None
    }

    fn run_test(&self, _item: Option<&[i64]>) -> HarnessResult<TestOutcome> {
        Err(HarnessError::unimplemented_algorithm(self.name()))
    }
}

impl<R: TestRunner + ?Sized> TestRunner for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn target(&self) -> Option<i64> {
        (**self).target()
    }

    fn run_test(&self, item: Option<&[i64]>) -> HarnessResult<TestOutcome> {
        (**self).run_test(item)
    }
}

/// Runner bound to one catalog algorithm (and a target for searches)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmRunner {
    algorithm: Algorithm,
    target: Option<i64>,
}

impl AlgorithmRunner {
    /// Bind a sort algorithm, or a search algorithm with its target
    pub fn new(algorithm: Algorithm, target: Option<i64>) -> HarnessResult<Self> {
        if algorithm.is_search() && target.is_none() {
            return Err(HarnessError::missing_target(algorithm.name()));
        }
        let target = if algorithm.is_search() { target } else { None };
        Ok(Self { algorithm, target })
    }

    pub fn search(algorithm: Algorithm, target: i64) -> HarnessResult<Self> {
        Self::new(algorithm, Some(target))
    }

    pub fn sort(algorithm: Algorithm) -> HarnessResult<Self> {
        Self::new(algorithm, None)
    }
}

impl TestRunner for AlgorithmRunner {
    fn name(&self) -> &str {
        self.algorithm.name()
    }

    fn target(&self) -> Option<i64> {
        self.target
    }

    fn run_test(&self, item: Option<&[i64]>) -> HarnessResult<TestOutcome> {
        let Some(values) = item else {
            return Ok(TestOutcome::InvalidInput);
        };

        match (self.algorithm.function(), self.target) {
            (AlgorithmFn::Search(search), Some(target)) => Ok(search(values, target).into()),
            (AlgorithmFn::Search(_), None) => Err(HarnessError::missing_target(self.name())),
            (AlgorithmFn::Sort(sort), _) => Ok(TestOutcome::Sorted(sort(values))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Placeholder;

    impl TestRunner for Placeholder {
        fn name(&self) -> &str {
            "heap_sort"
        }
    }

    #[test]
    fn test_placeholder_fails_loudly() {
        let err = Placeholder.run_test(Some(&[1, 2][..])).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::UnimplementedAlgorithm { ref name } if name == "heap_sort"
        ));
    }

    #[test]
    fn test_missing_item_is_invalid_input() {
        let runner = AlgorithmRunner::sort(Algorithm::BubbleSort).unwrap();
        assert_eq!(runner.run_test(None).unwrap(), TestOutcome::InvalidInput);
        assert!(!TestOutcome::InvalidInput.is_pass());
    }

    #[test]
    fn test_search_requires_target() {
        assert!(matches!(
            AlgorithmRunner::new(Algorithm::LinearSearch, None),
            Err(HarnessError::MissingTarget { .. })
        ));
        let sort = AlgorithmRunner::new(Algorithm::MergeSort, Some(3)).unwrap();
        assert_eq!(sort.target(), None);
    }

    #[test]
    fn test_search_outcomes() {
        let runner = AlgorithmRunner::search(Algorithm::LinearSearch, 4).unwrap();
        assert_eq!(runner.run_test(Some(&[4, 1, 4, 2][..])).unwrap(), TestOutcome::Found(0));
        assert_eq!(runner.run_test(Some(&[1, 2][..])).unwrap(), TestOutcome::NotFound);
        assert_eq!(runner.run_test(Some(&[][..])).unwrap(), TestOutcome::NotFound);
    }

    #[test]
    fn test_sort_outcome() {
        let runner = AlgorithmRunner::sort(Algorithm::QuickSort).unwrap();
        let outcome = runner.run_test(Some(&[3, 1, 2][..])).unwrap();
        assert_eq!(outcome.sorted(), Some(&[1, 2, 3][..]));
        assert!(outcome.is_pass());
    }

    #[test]
    fn test_outcome_display_uses_sentinel() {
        assert_eq!(TestOutcome::NotFound.to_string(), "-1");
        assert_eq!(TestOutcome::InvalidInput.to_string(), "-1");
        assert_eq!(TestOutcome::Found(2).to_string(), "2");
        assert_eq!(TestOutcome::Sorted(vec![1, 2]).to_string(), "[1, 2]");
    }
}
