#![deny(missing_docs)]
//! Image classification and meaning tags for tensors sent to a logging sink.
//!
//! An arbitrary tensor is checked against the rules of one of three image kinds
//! (plain image, depth image, segmentation image). Only the non-trivial dimensions of
//! the shape are counted, so `H x W x 1` and `H x W` are interchangeable. A valid tensor
//! is squeezed and tagged with the meaning the sink needs to interpret its values.

/// Image kinds and the shape rules they apply.
pub mod classify;

/// Error types for the image module.
pub mod error;

/// Semantic meaning tags.
pub mod meaning;

/// Transforms applied before classification.
pub mod prepass;

/// The analyze, classify, squeeze and tag pipeline.
pub mod validate;

pub use crate::classify::{Classification, ColorModel, ImageKind};
pub use crate::error::{ErrorKind, ImageError};
pub use crate::meaning::{MeaningTag, TensorDataMeaning};
pub use crate::validate::{validate, Severity, ValidationOutcome};
