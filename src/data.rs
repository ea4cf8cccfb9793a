use std::{
    fmt,
    str::FromStr,
    sync::{Mutex, PoisonError},
    time::{SystemTime, UNIX_EPOCH},
};

use once_cell::sync::Lazy;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};

/// An owned input sequence. Handed from the generator to the runner to a sorter.
pub type Sequence = Vec<i64>;

/// Number of random index-pair swaps applied to a nearly-sorted sequence.
pub const NEARLY_SORTED_SWAPS: usize = 10;

/// Shape of a generated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Distribution {
    Random,
    Sorted,
    Reverse,
    NearlySorted,
}

impl Distribution {
    pub const ALL: [Distribution; 4] = [
        Distribution::Random,
        Distribution::Sorted,
        Distribution::Reverse,
        Distribution::NearlySorted,
    ];

    /// Label used in the result log.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reverse => "reverse",
            Self::NearlySorted => "nearly_sorted",
        }
    }

    /// Spelling accepted on the command line.
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reverse => "reverse",
            Self::NearlySorted => "nearly-sorted",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Distribution {
    type Err = BenchError;

    /// Accepts both the flag spelling and the log label.
    fn from_str(s: &str) -> Result<Self> {
        Distribution::ALL
            .into_iter()
            .find(|d| d.flag() == s || d.label() == s)
            .ok_or_else(|| BenchError::UnknownDistribution(s.to_owned()))
    }
}

/// Process-wide seed source, seeded from the wall clock once.
static PROCESS_RNG: Lazy<Mutex<SmallRng>> = Lazy::new(|| {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    Mutex::new(SmallRng::seed_from_u64(nanos))
});

fn fresh_seed() -> u64 {
    PROCESS_RNG
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .gen()
}

/// Produces input sequences of a given size and distribution.
///
/// Two generators built with the same seed emit identical sequences for the
/// same sequence of requests. Unseeded generators draw their seed from a
/// process-wide source, so back-to-back generators still differ.
pub struct DataGenerator {
    seed: u64,
    rng: SmallRng,
}

impl DataGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(fresh_seed);
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate(&mut self, size: usize, kind: Distribution) -> Sequence {
        match kind {
            Distribution::Random => {
                let upper = size as i64;
                (0..size).map(|_| self.rng.gen_range(0..upper)).collect()
            }
            Distribution::Sorted => (0..size as i64).collect(),
            Distribution::Reverse => (0..size as i64).rev().collect(),
            Distribution::NearlySorted => {
                let mut data: Sequence = (0..size as i64).collect();
                // Nothing to swap in an empty sequence.
                if size > 0 {
                    for _ in 0..NEARLY_SORTED_SWAPS {
                        let a = self.rng.gen_range(0..size);
                        let b = self.rng.gen_range(0..size);
                        data.swap(a, b);
                    }
                }
                data
            }
        }
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

/// One-shot generation with an optional seed.
pub fn generate(size: usize, kind: Distribution, seed: Option<u64>) -> Sequence {
    DataGenerator::new(seed).generate(size, kind)
}
