#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use imlog_tensor as tensor;

#[doc(inline)]
pub use imlog_image as image;

/// Validation policy and logger configuration.
pub mod config;

/// Error types for the logging entry points.
pub mod error;

/// The `log_image`, `log_depth_image` and `log_segmentation_image` entry points.
pub mod logger;

/// The tensor sink the logger hands data to.
pub mod sink;

/// The channel soft validation failures are reported on.
pub mod warn;

pub use crate::config::{LoggerConfig, ValidationPolicy};
pub use crate::error::{ConfigError, LogError, SinkError};
pub use crate::logger::ImageLogger;
pub use crate::sink::{LogSink, MemorySink, TensorMsg, TensorSink};
pub use crate::warn::{CollectWarnings, LogWarnings, Warning, WarningChannel};
