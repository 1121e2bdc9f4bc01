use imlog_tensor::{ArrayLike, DType, DynTensor, TensorError};

use crate::classify::ImageKind;

/// The element type literal (non-tensor) segmentation input is coerced to.
pub const SEGMENTATION_LITERAL_DTYPE: DType = DType::U16;

/// Narrow a `float64` depth image to `float32`.
///
/// Applied to every depth image before classification, valid or not, since `float64`
/// depth is not displayed correctly downstream. Other element types pass unchanged.
pub fn depth_prepass(tensor: DynTensor) -> DynTensor {
    if tensor.dtype() == DType::F64 {
        log::trace!("downcasting float64 depth image of shape {:?}", tensor.shape());
    }
    tensor.downcast_f64()
}

/// Turn segmentation input into a tensor.
///
/// A tensor is used as is, dtype included. A literal is coerced to `uint16`.
pub fn segmentation_prepass(image: ArrayLike) -> Result<DynTensor, TensorError> {
    image.into_tensor(SEGMENTATION_LITERAL_DTYPE)
}

/// Apply the transform of `kind` to a tensor, if it has one.
pub fn apply(kind: ImageKind, tensor: DynTensor) -> DynTensor {
    match kind {
        ImageKind::Depth => depth_prepass(tensor),
        ImageKind::Image | ImageKind::Segmentation => tensor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imlog_tensor::NestedArray;

    #[test]
    fn depth_f64_to_f32() -> Result<(), TensorError> {
        let tensor = DynTensor::from_shape_vec([2, 2], vec![0.25f64, 1.5, 3.0, 1e-3])?;
        let out = depth_prepass(tensor);
        assert_eq!(out.dtype(), DType::F32);
        let values = out.as_slice::<f32>().unwrap_or_default();
        approx::assert_relative_eq!(values[3], 1e-3f32);
        assert_eq!(&values[..3], &[0.25f32, 1.5, 3.0]);
        Ok(())
    }

    #[test]
    fn depth_other_dtypes_untouched() -> Result<(), TensorError> {
        let tensor = DynTensor::from_shape_vec([2], vec![1000u16, 2000])?;
        assert_eq!(apply(ImageKind::Depth, tensor.clone()), tensor);
        Ok(())
    }

    #[test]
    fn image_kinds_without_prepass() -> Result<(), TensorError> {
        let tensor = DynTensor::from_shape_vec([2], vec![0.5f64, 1.0])?;
        assert_eq!(apply(ImageKind::Image, tensor.clone()), tensor);
        assert_eq!(apply(ImageKind::Segmentation, tensor.clone()), tensor);
        Ok(())
    }

    #[test]
    fn segmentation_decision_table() -> Result<(), TensorError> {
        let tensor = DynTensor::from_shape_vec([1, 2], vec![3u8, 4])?;
        assert_eq!(segmentation_prepass(tensor.clone().into())?.dtype(), DType::U8);

        let literal = NestedArray::from(vec![vec![1, 2], vec![3, 4]]);
        let coerced = segmentation_prepass(literal.into())?;
        assert_eq!(coerced.dtype(), DType::U16);
        assert_eq!(coerced.shape(), &[2, 2]);
        Ok(())
    }
}
