#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `imlog-tensor` provides the array model the image logging layer works on: an owned,
//! row-major tensor whose rank is only known at runtime, together with the pure shape
//! analysis used to decide whether an array can be interpreted as an image.
//!
//! # Architecture
//!
//! - **DynTensor**: owned multi-dimensional array with a runtime shape and a typed buffer
//! - **TensorBuffer**: the element storage, one variant per supported [`DType`]
//! - **ShapeFacts**: the non-trivial (size != 1) dimensions of a shape
//! - **ArrayLike**: either an existing tensor or a nested literal that still needs coercion
//!
//! # Quick Start
//!
//! ```rust
//! use imlog_tensor::{analyze, DynTensor};
//!
//! let tensor = DynTensor::from_shape_vec([4, 4, 1], vec![0u8; 16]).unwrap();
//!
//! let facts = analyze(tensor.shape());
//! assert_eq!(facts.rank, 3);
//! assert_eq!(facts.non_trivial_rank(), 2);
//!
//! let squeezed = tensor.squeeze();
//! assert_eq!(squeezed.shape(), &[4, 4]);
//! ```

/// Array coercion from nested literal values.
pub mod coerce;

/// Element data types and typed storage.
pub mod dtype;

/// Error types for the tensor crate.
pub mod error;

/// Serde support for tensors and nested literals.
#[cfg(feature = "serde")]
pub mod serde;

/// Shape analysis over non-trivial dimensions.
pub mod shape;

/// Removal of singleton axes.
pub mod squeeze;

/// The dynamic-rank tensor implementation.
pub mod tensor;

pub use crate::coerce::{ArrayLike, NestedArray};
pub use crate::dtype::{DType, TensorBuffer, TensorElement};
pub use crate::error::TensorError;
pub use crate::shape::{analyze, ShapeFacts};
pub use crate::squeeze::squeeze;
pub use crate::tensor::{get_strides_from_shape, DynTensor};
