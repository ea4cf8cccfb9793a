//! Comparison-counting sorting algorithms and the registry that looks them up by name.
//!
//! Every sort call builds its own [`Comparisons`] counter and returns it, so a
//! count can never pick up work done by another call.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::{BenchError, Result};

mod binary_insertion;
mod insertion;
mod shell;

pub use binary_insertion::{binary_insertion_sort, BinaryInsertionSort};
pub use insertion::{insertion_sort, InsertionSort};
pub use shell::{shell_sort, ShellSort};

/// Number of element-to-key ordering tests performed by one sort call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Comparisons(u64);

impl Comparisons {
    pub fn count(&self) -> u64 {
        self.0
    }

    /// Counted `a > b`.
    pub fn greater<T: Ord>(&mut self, a: &T, b: &T) -> bool {
        self.0 += 1;
        a > b
    }

    /// Counted `a <= b`.
    pub fn less_eq<T: Ord>(&mut self, a: &T, b: &T) -> bool {
        self.0 += 1;
        a <= b
    }
}

impl fmt::Display for Comparisons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sorting algorithm that reports how many comparisons it made.
///
/// Implementations sort `data` ascending in place and must return a fresh
/// count for every call.
pub trait Sorter {
    fn name(&self) -> &str;

    fn sort(&self, data: &mut [i64]) -> Comparisons;
}

/// The built-in algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    InsertionSort,
    ShellSort,
    BinaryInsertionSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::InsertionSort,
        Algorithm::ShellSort,
        Algorithm::BinaryInsertionSort,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertionSort => "insertion_sort",
            Self::ShellSort => "shell_sort",
            Self::BinaryInsertionSort => "binary_insertion_sort",
        }
    }

    pub fn sorter(&self) -> Box<dyn Sorter> {
        match self {
            Self::InsertionSort => Box::new(InsertionSort),
            Self::ShellSort => Box::new(ShellSort),
            Self::BinaryInsertionSort => Box::new(BinaryInsertionSort),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| BenchError::UnknownAlgorithm(s.to_owned()))
    }
}

/// Name-to-sorter lookup table.
pub struct SorterRegistry {
    sorters: Vec<Box<dyn Sorter>>,
}

impl SorterRegistry {
    /// A registry with no sorters.
    pub fn empty() -> Self {
        Self { sorters: vec![] }
    }

    /// Add a sorter. A sorter already registered under the same name is replaced in place.
    pub fn register(&mut self, sorter: Box<dyn Sorter>) {
        if let Some(slot) = self.sorters.iter_mut().find(|s| s.name() == sorter.name()) {
            *slot = sorter;
        } else {
            self.sorters.push(sorter);
        }
    }

    pub fn get(&self, name: &str) -> Result<&dyn Sorter> {
        self.sorters
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.as_ref())
            .ok_or_else(|| BenchError::UnknownAlgorithm(name.to_owned()))
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.sorters.iter().map(|s| s.name()).collect()
    }
}

impl Default for SorterRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for algorithm in Algorithm::ALL {
            registry.register(algorithm.sorter());
        }
        registry
    }
}
