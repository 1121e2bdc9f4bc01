use imlog_image::{
    prepass::segmentation_prepass, validate, ImageKind, MeaningTag, Severity, TensorDataMeaning,
    ValidationOutcome,
};
use imlog_tensor::{ArrayLike, DynTensor};

use crate::{
    config::LoggerConfig,
    error::LogError,
    sink::{TensorMsg, TensorSink},
    warn::{LogWarnings, WarningChannel},
};

/// Validates images and hands them to a [`TensorSink`].
///
/// Every call is independent: the logger keeps no state between calls besides its
/// configuration.
///
/// # Examples
///
/// ```
/// use imlog::{ImageLogger, MemorySink};
/// use imlog::image::TensorDataMeaning;
/// use imlog::tensor::{DType, DynTensor};
///
/// let sink = MemorySink::new();
/// let logger = ImageLogger::new(sink.clone());
///
/// let image = DynTensor::zeros([4, 4, 1], DType::U8).unwrap();
/// logger.log_image("camera/gray", image, false).unwrap();
///
/// let logged = sink.take();
/// assert_eq!(logged[0].tensor.shape(), &[4, 4]);
/// assert_eq!(logged[0].meaning, TensorDataMeaning::Unknown);
/// ```
pub struct ImageLogger<S, W = LogWarnings> {
    sink: S,
    warnings: W,
    config: LoggerConfig,
}

impl<S: TensorSink> ImageLogger<S, LogWarnings> {
    /// Create a logger with the default configuration, warning through the `log` facade.
    pub fn new(sink: S) -> Self {
        Self::with_warnings(sink, LogWarnings)
    }
}

impl<S: TensorSink, W: WarningChannel> ImageLogger<S, W> {
    /// Create a logger with the default configuration and a custom warning channel.
    pub fn with_warnings(sink: S, warnings: W) -> Self {
        Self {
            sink,
            warnings,
            config: LoggerConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// The sink tensors are handed to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Log a gray or color image.
    ///
    /// The image should have 1, 3 or 4 channels (gray, RGB or RGBA): its shape must
    /// have 2 or 3 dimensions that are not 1, and with 3 the last one is the channel
    /// count. Size-1 axes are removed before logging.
    ///
    /// Expected value ranges per dtype:
    /// * `uint8`: color in 0-255 sRGB gamma space, alpha in 0-255 linear space.
    /// * `uint16`: color in 0-65535 sRGB gamma space, alpha in 0-65535 linear space.
    /// * `float32`/`float64`: all components in 0-1 linear space.
    ///
    /// # Errors
    ///
    /// Under [`crate::ValidationPolicy::Strict`] an image that does not satisfy these
    /// rules returns [`LogError::Rejected`]. Under the lenient policy a warning is
    /// emitted and the tensor is logged unchanged.
    pub fn log_image(&self, path: &str, image: DynTensor, timeless: bool) -> Result<(), LogError> {
        self.dispatch(ImageKind::Image, path, image, None, timeless)
    }

    /// Log a depth image.
    ///
    /// The image must have exactly 2 dimensions that are not 1. Supported dtypes are
    /// `uint8`, `uint16`, `float32` and `float64`; `float64` is logged as `float32`.
    ///
    /// `meter` is how long a meter is in the stored unit. With `uint16` and
    /// `meter = 1000.0` values are millimeters, with a range of about 65 meters.
    ///
    /// # Errors
    ///
    /// See [`ImageLogger::log_image`].
    pub fn log_depth_image(
        &self,
        path: &str,
        image: DynTensor,
        meter: Option<f32>,
        timeless: bool,
    ) -> Result<(), LogError> {
        self.dispatch(ImageKind::Depth, path, image, meter, timeless)
    }

    /// Log an image made up of integer class ids.
    ///
    /// The image must have a single channel, i.e. be `H x W` or `H x W x 1`. A tensor is
    /// logged with its dtype unchanged, a literal such as `vec![vec![1, 2], vec![3, 4]]`
    /// is converted to `uint16`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Tensor`] if a literal cannot be converted, whatever the
    /// policy. Otherwise see [`ImageLogger::log_image`].
    pub fn log_segmentation_image(
        &self,
        path: &str,
        image: impl Into<ArrayLike>,
        timeless: bool,
    ) -> Result<(), LogError> {
        let tensor = segmentation_prepass(image.into())?;
        self.dispatch(ImageKind::Segmentation, path, tensor, None, timeless)
    }

    /// Log a tensor as is, without any validation.
    pub fn log_tensor(
        &self,
        path: &str,
        tensor: DynTensor,
        meaning: TensorDataMeaning,
        meter: Option<f32>,
        timeless: bool,
    ) -> Result<(), LogError> {
        log::debug!(
            "logging {path}: shape {:?}, dtype {}, meaning {meaning:?}",
            tensor.shape(),
            tensor.dtype(),
        );
        self.sink.log_tensor(TensorMsg {
            path: path.to_string(),
            tensor,
            meaning,
            meter,
            timeless,
        })?;
        Ok(())
    }

    fn dispatch(
        &self,
        kind: ImageKind,
        path: &str,
        tensor: DynTensor,
        meter: Option<f32>,
        timeless: bool,
    ) -> Result<(), LogError> {
        match validate(kind, tensor, meter, self.config.policy.severity()) {
            ValidationOutcome::Valid { tensor, tag, .. } => {
                self.forward(path, tensor, tag, timeless)
            }
            ValidationOutcome::Invalid {
                severity: Severity::Hard,
                reason,
                ..
            } => Err(LogError::Rejected(reason)),
            ValidationOutcome::Invalid {
                severity: Severity::Soft,
                tensor,
                reason,
                tag,
            } => {
                self.warnings
                    .warn(&reason.to_string(), self.config.warn_stack_depth);
                self.forward(path, tensor, tag, timeless)
            }
        }
    }

    fn forward(
        &self,
        path: &str,
        tensor: DynTensor,
        tag: MeaningTag,
        timeless: bool,
    ) -> Result<(), LogError> {
        self.log_tensor(path, tensor, tag.meaning, tag.meter, timeless)
    }
}
