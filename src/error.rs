//! Errors reported while building or querying a [`DimensionSpace`].
//!
//! All failures are detected eagerly, at the call that received the bad
//! input. Nothing is retried and nothing is partially constructed.
//!
//! [`DimensionSpace`]: super::DimensionSpace

use super::{AxisRef};

/// A malformed argument: a bad extent, range, coordinate or index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("dimension `{name}` has zero extent")]
    ZeroExtent { name: String },

    #[error("range {begin}..{end} is not within {lower}..{upper} of dimension `{name}`")]
    InvalidRange {
        name: String,
        begin: usize,
        end: usize,
        lower: usize,
        upper: usize,
    },

    #[error("coordinate has {actual} components but the space has {expected} dimensions")]
    CoordLength { expected: usize, actual: usize },

    #[error("coordinate {value} out of range for dimension `{name}` of size {size}")]
    CoordOutOfRange {
        name: String,
        value: usize,
        size: usize,
    },

    #[error("index {index} out of range for {total} elements")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("dimensions up to `{name}` have more than usize::MAX elements")]
    TooManyElements { name: String },

    #[error("storage index {index} lies outside the window of dimension `{name}`")]
    IndexOutsideWindow { index: usize, name: String },
}

/// The error type of this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("duplicate dimension name `{name}`")]
    DuplicateName { name: String },

    #[error("dimension {axis} referenced more than once")]
    DuplicateAxis { axis: AxisRef },

    #[error("no storage order given for dimension `{name}`")]
    MissingAxis { name: String },

    #[error("unknown dimension {axis}")]
    UnknownAxis { axis: AxisRef },
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, DimensionError>;
