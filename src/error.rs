use thiserror::Error;

/// Why [`Tree::sum`][crate::Tree::sum] could not produce a total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SumError {
    /// A stored value has no `i64` representation.
    #[error("value at in-order position {index} cannot be converted to i64: {reason}")]
    Conversion {
        /// Position of the offending value in in-order (sorted) order.
        index: usize,
        /// The conversion's own error message.
        reason: String,
    },

    /// Adding the value at `index` overflowed the `i64` accumulator.
    #[error("sum overflowed i64 at in-order position {index}")]
    Overflow {
        /// Position of the value whose addition overflowed, in in-order order.
        index: usize,
    },
}

/// Result alias for fallible tree aggregates.
pub type Result<T, E = SumError> = std::result::Result<T, E>;

/// A traversal order name that isn't one of `pre`, `in`, `post` or `level`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown traversal order `{0}`, expected one of: pre, in, post, level")]
pub struct ParseOrderError(pub(crate) String);
