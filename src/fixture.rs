//! Large sets of unique random integers, for smoke-testing and benchmarking trees at scale.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{fixture::{self, DataConfig}, OrderedTree};
//!
//! let config = DataConfig {
//!     count: 1_000,
//!     seed: Some(7),
//!     ..DataConfig::default()
//! };
//! let data = fixture::generate(&config).unwrap();
//!
//! let mut tree = OrderedTree::new();
//! for value in &data {
//!     tree.insert(*value);
//! }
//! assert_eq!(tree.in_order().len(), 1_000);
//! ```

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

/// What to generate: `count` distinct integers drawn from `low..=high`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataConfig {
    /// How many distinct values to draw.
    pub count: usize,
    /// Inclusive lower bound.
    pub low: i32,
    /// Inclusive upper bound.
    pub high: i32,
    /// Seed for a reproducible data set. `None` draws from the thread-local generator.
    pub seed: Option<u64>,
}

impl Default for DataConfig {
    /// One million values out of `1..=2_000_000`.
    fn default() -> Self {
        Self {
            count: 1_000_000,
            low: 1,
            high: 2_000_000,
            seed: None,
        }
    }
}

impl DataConfig {
    /// The number of distinct values in `low..=high`.
    pub fn available(&self) -> Result<u64> {
        if self.low > self.high {
            return Err(Error::EmptyRange {
                low: self.low,
                high: self.high,
            });
        }

        Ok((i64::from(self.high) - i64::from(self.low) + 1) as u64)
    }
}

/// Draws the values described by `config` in no particular order.
pub fn generate(config: &DataConfig) -> Result<Vec<i32>> {
    match config.seed {
        Some(seed) => generate_with(&mut StdRng::seed_from_u64(seed), config),
        None => generate_with(&mut rand::thread_rng(), config),
    }
}

/// Draws the values described by `config` from `rng`, ignoring `config.seed`.
pub fn generate_with<R>(rng: &mut R, config: &DataConfig) -> Result<Vec<i32>>
where
    R: Rng + ?Sized,
{
    let available = config.available()?;
    if config.count as u64 > available {
        return Err(Error::RangeTooSmall {
            requested: config.count,
            available,
        });
    }

    // Ranges wider than the address space are only sampled from their start.
    let length = usize::try_from(available).unwrap_or(usize::MAX);
    let low = i64::from(config.low);
    let values: Vec<i32> = index::sample(rng, length, config.count)
        .into_iter()
        .map(|offset| (low + offset as i64) as i32)
        .collect();

    log::debug!(
        "generated {} unique values in {}..={}",
        values.len(),
        config.low,
        config.high
    );
    Ok(values)
}
