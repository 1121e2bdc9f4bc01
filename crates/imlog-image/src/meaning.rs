use crate::classify::{Classification, ImageKind};

/// How the element values of a tensor should be interpreted downstream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TensorDataMeaning {
    /// No particular meaning: a gray or color image, or a depth map.
    #[default]
    Unknown,
    /// Every value is a discrete class identifier.
    ClassId,
}

/// The meaning attached to a tensor before it is handed to the sink.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeaningTag {
    /// The meaning of the values.
    pub meaning: TensorDataMeaning,
    /// For depth images: how many units of the stored values make up one meter.
    ///
    /// `None` means the scale is unspecified.
    pub meter: Option<f32>,
}

impl MeaningTag {
    /// Tag for a successfully classified tensor.
    ///
    /// The meter is only kept for depth images and is never derived, just passed through.
    pub fn for_classification(classification: &Classification, meter: Option<f32>) -> Self {
        match classification {
            Classification::PlainImage { .. } => Self::default(),
            Classification::DepthImage => Self {
                meaning: TensorDataMeaning::Unknown,
                meter,
            },
            Classification::SegmentationImage => Self {
                meaning: TensorDataMeaning::ClassId,
                meter: None,
            },
        }
    }

    /// Tag for a tensor that failed classification.
    ///
    /// The meaning is always [`TensorDataMeaning::Unknown`]; a depth call still forwards
    /// its meter.
    pub fn for_invalid(kind: ImageKind, meter: Option<f32>) -> Self {
        Self {
            meaning: TensorDataMeaning::Unknown,
            meter: match kind {
                ImageKind::Depth => meter,
                ImageKind::Image | ImageKind::Segmentation => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ColorModel;

    #[test]
    fn tag_valid() {
        let rgb = Classification::PlainImage {
            color_model: ColorModel::Rgb,
        };
        assert_eq!(MeaningTag::for_classification(&rgb, Some(2.0)), MeaningTag::default());

        let depth = MeaningTag::for_classification(&Classification::DepthImage, Some(1000.0));
        assert_eq!(depth.meaning, TensorDataMeaning::Unknown);
        assert_eq!(depth.meter, Some(1000.0));

        let seg = MeaningTag::for_classification(&Classification::SegmentationImage, None);
        assert_eq!(seg.meaning, TensorDataMeaning::ClassId);
    }

    #[test]
    fn tag_invalid_is_unknown() {
        for kind in [ImageKind::Image, ImageKind::Depth, ImageKind::Segmentation] {
            assert_eq!(
                MeaningTag::for_invalid(kind, None).meaning,
                TensorDataMeaning::Unknown
            );
        }
        assert_eq!(MeaningTag::for_invalid(ImageKind::Depth, Some(5.0)).meter, Some(5.0));
        assert_eq!(MeaningTag::for_invalid(ImageKind::Image, Some(5.0)).meter, None);
    }
}
