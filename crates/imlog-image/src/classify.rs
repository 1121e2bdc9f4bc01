use imlog_tensor::ShapeFacts;

use crate::error::ImageError;

/// The color model implied by the channel count of a plain image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorModel {
    /// Grayscale, 1 channel.
    L,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl ColorModel {
    /// The color model for a channel count, if supported.
    pub fn from_num_channels(channels: usize) -> Option<Self> {
        match channels {
            1 => Some(Self::L),
            3 => Some(Self::Rgb),
            4 => Some(Self::Rgba),
            _ => None,
        }
    }
}

/// A successful classification of a tensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    /// A gray or color image.
    PlainImage {
        /// The color model derived from the channel count.
        color_model: ColorModel,
    },
    /// A single channel depth map.
    DepthImage,
    /// A single channel map of class ids.
    SegmentationImage,
}

/// The kind of image a logging call expects.
///
/// Each kind has its own shape rule, see [`ImageKind::classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImageKind {
    /// Plain gray, RGB or RGBA image.
    Image,
    /// Depth image.
    Depth,
    /// Segmentation image.
    Segmentation,
}

impl ImageKind {
    /// Classify a tensor shape according to the rules of this kind.
    ///
    /// `shape` is the shape `facts` was computed from; it is only used for error reports.
    ///
    /// | kind           | non-trivial rank | last non-trivial dim |
    /// |----------------|------------------|----------------------|
    /// | `Image`        | 2 or 3           | 1, 3 or 4 if rank 3  |
    /// | `Depth`        | 2                |                      |
    /// | `Segmentation` | 2                |                      |
    pub fn classify(
        &self,
        facts: &ShapeFacts,
        shape: &[usize],
    ) -> Result<Classification, ImageError> {
        match self {
            Self::Image => classify_image(facts, shape),
            Self::Depth => classify_depth(facts, shape),
            Self::Segmentation => classify_segmentation(facts, shape),
        }
    }
}

impl std::fmt::Display for ImageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Self::Image => "image",
            Self::Depth => "depth image",
            Self::Segmentation => "segmentation image",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for ImageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "depth" => Ok(Self::Depth),
            "segmentation" => Ok(Self::Segmentation),
            other => Err(format!(
                "unknown image kind '{other}', expected one of: image, depth, segmentation"
            )),
        }
    }
}

/// Classify a plain gray, RGB or RGBA image.
pub fn classify_image(facts: &ShapeFacts, shape: &[usize]) -> Result<Classification, ImageError> {
    match facts.non_trivial_rank() {
        2 => Ok(Classification::PlainImage {
            color_model: ColorModel::L,
        }),
        3 => {
            // the channel axis is the last non-trivial one
            let depth = facts.last_non_trivial().unwrap_or(1);
            let color_model = ColorModel::from_num_channels(depth).ok_or_else(|| {
                ImageError::UnsupportedChannelDepth {
                    depth,
                    shape: shape.to_vec(),
                }
            })?;
            Ok(Classification::PlainImage { color_model })
        }
        _ => Err(ImageError::NotAnImage {
            shape: shape.to_vec(),
        }),
    }
}

/// Classify a depth image.
pub fn classify_depth(facts: &ShapeFacts, shape: &[usize]) -> Result<Classification, ImageError> {
    match facts.non_trivial_rank() {
        2 => Ok(Classification::DepthImage),
        rank => Err(ImageError::NotDepthImage {
            rank,
            shape: shape.to_vec(),
        }),
    }
}

/// Classify a segmentation image.
pub fn classify_segmentation(
    facts: &ShapeFacts,
    shape: &[usize],
) -> Result<Classification, ImageError> {
    match facts.non_trivial_rank() {
        2 => Ok(Classification::SegmentationImage),
        rank => Err(ImageError::NotSingleChannel {
            rank,
            shape: shape.to_vec(),
        }),
    }
}
