use imlog_image::ImageError;
use imlog_tensor::TensorError;

/// An error type for the logging entry points.
#[derive(thiserror::Error, Debug)]
pub enum LogError {
    /// The tensor failed validation under the strict policy.
    #[error("Rejected: {0}")]
    Rejected(#[from] ImageError),

    /// The input could not be turned into a tensor.
    #[error("Invalid input: {0}")]
    Tensor(#[from] TensorError),

    /// The sink refused the tensor.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// An error reported by a [`crate::TensorSink`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Sink error: {0}")]
pub struct SinkError(pub String);

/// An error type for the configuration layer.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The policy name is not recognised.
    #[error("Unknown validation policy '{0}', expected 'strict' or 'lenient'")]
    UnknownPolicy(String),

    /// An environment variable is set but not valid unicode.
    #[error("Environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),

    /// The configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
