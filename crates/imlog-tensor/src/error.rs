use thiserror::Error;

use crate::dtype::DType;

/// An error type for tensor operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TensorError {
    /// An element could not be represented in the target type.
    ///
    /// This occurs when narrowing, e.g. a negative or too large value cast to `u16`.
    #[error("Type cast failed: value cannot be represented when casting from {from} to {to}")]
    CastError {
        /// The source element type.
        from: DType,
        /// The requested element type.
        to: DType,
    },

    /// Tensor shape does not match the provided data.
    #[error("Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },

    /// The element count of a shape does not fit in a `usize`.
    #[error("Shape overflow: the element count of shape {shape:?} does not fit in usize")]
    ShapeOverflow {
        /// The offending shape.
        shape: Vec<usize>,
    },

    /// A nested literal has rows of different lengths.
    #[error("Ragged nested sequence: inconsistent lengths along axis {axis}")]
    RaggedNesting {
        /// The first axis along which the lengths disagree.
        axis: usize,
    },
}

impl TensorError {
    /// Creates an InvalidShape error with clear context.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }

    /// Returns a user-friendly suggestion for resolving the error.
    pub fn suggestion(&self) -> &str {
        match self {
            Self::CastError { .. } => {
                "Check that source values are within the valid range for the target type"
            }
            Self::InvalidShape { .. } => {
                "Ensure the product of shape dimensions equals the number of data elements"
            }
            Self::ShapeOverflow { .. } => {
                "Check the shape for corrupted or unreasonably large dimensions"
            }
            Self::RaggedNesting { .. } => {
                "Ensure every row of the nested sequence has the same length"
            }
        }
    }
}
