/// The broad category of a validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The number of non-trivial dimensions is outside the accepted range.
    Shape,
    /// The channel axis has a size the image kind does not accept.
    ChannelDepth,
}

/// An error type for the image module.
///
/// Every variant carries the shape of the offending tensor as given by the caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// The tensor has fewer than 2 or more than 3 non-trivial dimensions.
    #[error("Expected image, got array of shape {shape:?}")]
    NotAnImage {
        /// The shape of the tensor.
        shape: Vec<usize>,
    },

    /// The last non-trivial dimension of a 3D image is not 1, 3 or 4.
    #[error(
        "Expected image depth of 1 (gray), 3 (RGB) or 4 (RGBA). Instead got array of shape {shape:?}"
    )]
    UnsupportedChannelDepth {
        /// The offending channel count.
        depth: usize,
        /// The shape of the tensor.
        shape: Vec<usize>,
    },

    /// A depth image must have exactly 2 non-trivial dimensions.
    #[error("Expected 2D depth image, got rank {rank} array of shape {shape:?}")]
    NotDepthImage {
        /// The number of non-trivial dimensions.
        rank: usize,
        /// The shape of the tensor.
        shape: Vec<usize>,
    },

    /// A segmentation image must have exactly 2 non-trivial dimensions.
    #[error("Expected single-channel image for segmentation, got rank {rank} array of shape {shape:?}")]
    NotSingleChannel {
        /// The number of non-trivial dimensions.
        rank: usize,
        /// The shape of the tensor.
        shape: Vec<usize>,
    },
}

impl ImageError {
    /// The category of the failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedChannelDepth { .. } => ErrorKind::ChannelDepth,
            Self::NotAnImage { .. } | Self::NotDepthImage { .. } | Self::NotSingleChannel { .. } => {
                ErrorKind::Shape
            }
        }
    }

    /// The shape of the tensor that failed validation.
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::NotAnImage { shape }
            | Self::UnsupportedChannelDepth { shape, .. }
            | Self::NotDepthImage { shape, .. }
            | Self::NotSingleChannel { shape, .. } => shape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = ImageError::NotAnImage {
            shape: vec![4, 4, 4, 4],
        };
        assert_eq!(err.to_string(), "Expected image, got array of shape [4, 4, 4, 4]");
        assert_eq!(err.kind(), ErrorKind::Shape);

        let err = ImageError::UnsupportedChannelDepth {
            depth: 2,
            shape: vec![4, 4, 2],
        };
        assert!(err.to_string().ends_with("Instead got array of shape [4, 4, 2]"));
        assert_eq!(err.kind(), ErrorKind::ChannelDepth);
        assert_eq!(err.shape(), &[4, 4, 2]);
    }
}
