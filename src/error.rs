/// Convenient Result type alias for the fallible parts of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while preparing data for a tree. The tree operations themselves never fail:
/// a missing value is reported through their return values instead.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The lower bound of a range is above its upper bound.
    #[error("empty range: {low} is greater than {high}")]
    EmptyRange {
        /// Inclusive lower bound.
        low: i32,
        /// Inclusive upper bound.
        high: i32,
    },

    /// More unique values were requested than the range holds.
    #[error("cannot draw {requested} unique values from a range of {available}")]
    RangeTooSmall {
        /// How many values were asked for.
        requested: usize,
        /// How many distinct values the range holds.
        available: u64,
    },
}
