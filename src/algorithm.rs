//! Catalog of the algorithms a harness can be bound to

use crate::error::HarnessError;
use crate::search;
use crate::sort;
use std::fmt;
use std::str::FromStr;

/// Signature shared by every search function
pub type SearchFn = fn(&[i64], i64) -> Option<usize>;

/// Signature shared by every sort function
pub type SortFn = fn(&[i64]) -> Vec<i64>;

/// A callable algorithm, split by the shape of its result
#[derive(Clone, Copy)]
pub enum AlgorithmFn {
    Search(SearchFn),
    Sort(SortFn),
}

/// Whether an algorithm locates a target or orders the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Search,
    Sort,
}

/// Every algorithm the library implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    LinearSearch,
    BinarySearch,
    BubbleSort,
    SinkingSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
}

impl Algorithm {
    /// All algorithms, searches first
    pub const ALL: [Algorithm; 8] = [
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
        Algorithm::BubbleSort,
        Algorithm::SinkingSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "linear_search",
            Algorithm::BinarySearch => "binary_search",
            Algorithm::BubbleSort => "bubble_sort",
            Algorithm::SinkingSort => "sinking_sort",
            Algorithm::SelectionSort => "selection_sort",
            Algorithm::InsertionSort => "insertion_sort",
            Algorithm::MergeSort => "merge_sort",
            Algorithm::QuickSort => "quick_sort",
        }
    }

    pub fn kind(self) -> AlgorithmKind {
        match self {
            Algorithm::LinearSearch | Algorithm::BinarySearch => AlgorithmKind::Search,
            _ => AlgorithmKind::Sort,
        }
    }

    pub fn is_search(self) -> bool {
        self.kind() == AlgorithmKind::Search
    }

    /// Resolve to the library function implementing this algorithm
    pub fn function(self) -> AlgorithmFn {
        match self {
            Algorithm::LinearSearch => AlgorithmFn::Search(search::linear_search),
            Algorithm::BinarySearch => AlgorithmFn::Search(search::binary_search),
            Algorithm::BubbleSort => AlgorithmFn::Sort(sort::bubble_sort),
            Algorithm::SinkingSort => AlgorithmFn::Sort(sort::sinking_sort),
            Algorithm::SelectionSort => AlgorithmFn::Sort(sort::selection_sort),
            Algorithm::InsertionSort => AlgorithmFn::Sort(sort::insertion_sort),
            Algorithm::MergeSort => AlgorithmFn::Sort(sort::merge_sort),
            Algorithm::QuickSort => AlgorithmFn::Sort(sort::quick_sort),
        }
    }
}

impl FromStr for Algorithm {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "linear_search" | "linear" => Ok(Algorithm::LinearSearch),
            "binary_search" | "binary" => Ok(Algorithm::BinarySearch),
            "bubble_sort" | "bubble" => Ok(Algorithm::BubbleSort),
            "sinking_sort" | "sinking" => Ok(Algorithm::SinkingSort),
            "selection_sort" | "selection" => Ok(Algorithm::SelectionSort),
            "insertion_sort" | "insertion" => Ok(Algorithm::InsertionSort),
            "merge_sort" | "merge" => Ok(Algorithm::MergeSort),
            "quick_sort" | "quicksort" | "quick" => Ok(Algorithm::QuickSort),
            _ => Err(HarnessError::unknown_algorithm(s)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("Quick-Sort".parse::<Algorithm>().unwrap(), Algorithm::QuickSort);
        assert_eq!("binary".parse::<Algorithm>().unwrap(), Algorithm::BinarySearch);
        assert!(matches!(
            "bogo_sort".parse::<Algorithm>(),
            Err(HarnessError::UnknownAlgorithm { .. })
        ));
    }

    #[test]
    fn test_kind_matches_function_shape() {
        for algorithm in Algorithm::ALL {
            let shape_is_search = matches!(algorithm.function(), AlgorithmFn::Search(_));
            assert_eq!(algorithm.is_search(), shape_is_search, "{algorithm}");
        }
    }
}
