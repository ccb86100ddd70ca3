//! Error type for pattern construction.

/// Error type for invalid part configurations.
///
/// Every variant is a construction-time invariant violation; once a part
/// has been built, appending it never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatternError {
    /// Repeat built with `max == 0`
    #[error("repeat max must be greater than zero")]
    RepeatMaxZero,

    /// Repeat built with `max < min`
    #[error("repeat max must not be less than min (min {min}, max {max})")]
    RepeatMaxBelowMin {
        /// Configured lower bound
        min: u32,
        /// Configured upper bound
        max: u32,
    },

    /// Potentially built with a negative inclusion chance
    #[error("inclusion chance must not be negative (got {0})")]
    NegativeChance(f64),

    /// Choice part built with nothing to choose from
    #[error("choice alphabet must not be empty")]
    EmptyAlphabet,

    /// Sequence built with `max < start`
    #[error("sequence max must not be less than start (start {start}, max {max})")]
    SequenceMaxBelowStart {
        /// Configured first value
        start: u64,
        /// Configured last value before wrapping
        max: u64,
    },
}
