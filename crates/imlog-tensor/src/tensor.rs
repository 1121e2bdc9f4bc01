use crate::{
    dtype::{DType, TensorBuffer, TensorElement},
    error::TensorError,
    shape::{analyze, ShapeFacts},
};

/// Computes the strides for a row-major (C-contiguous) tensor layout.
///
/// The rightmost dimension has stride 1, and each dimension's stride is the product
/// of all dimensions to its right.
///
/// # Errors
///
/// Returns [`TensorError::ShapeOverflow`] if the element count of `shape` does not fit
/// in a `usize`.
///
/// # Examples
///
/// ```rust
/// use imlog_tensor::get_strides_from_shape;
///
/// assert_eq!(get_strides_from_shape(&[2, 3]).unwrap(), vec![3, 1]);
/// assert_eq!(get_strides_from_shape(&[2, 3, 4]).unwrap(), vec![12, 4, 1]);
/// assert!(get_strides_from_shape(&[]).unwrap().is_empty());
/// assert!(get_strides_from_shape(&[1 << 33, 1 << 33, 4]).is_err());
/// ```
pub fn get_strides_from_shape(shape: &[usize]) -> Result<Vec<usize>, TensorError> {
    let mut strides = vec![0; shape.len()];
    let mut stride: usize = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        stride = stride
            .checked_mul(shape[i])
            .ok_or_else(|| TensorError::ShapeOverflow {
                shape: shape.to_vec(),
            })?;
    }
    Ok(strides)
}

/// The number of elements of a tensor of the given shape.
fn checked_numel(shape: &[usize]) -> Result<usize, TensorError> {
    shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| TensorError::ShapeOverflow {
            shape: shape.to_vec(),
        })
}

/// A multi-dimensional array with owned data and a rank known only at runtime.
///
/// The data is always stored contiguously in row-major order. A tensor of rank 0 holds
/// exactly one element.
///
/// # Examples
///
/// ```rust
/// use imlog_tensor::{DType, DynTensor};
///
/// let t = DynTensor::from_shape_vec([2, 2], vec![1u16, 2, 3, 4]).unwrap();
/// assert_eq!(t.shape(), &[2, 2]);
/// assert_eq!(t.dtype(), DType::U16);
/// assert_eq!(t.get::<u16>(&[1, 0]), Some(&3));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DynTensor {
    pub(crate) buffer: TensorBuffer,
    pub(crate) shape: Vec<usize>,
    pub(crate) strides: Vec<usize>,
}

impl DynTensor {
    /// Creates a new tensor with the given shape and data.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape, an error is returned.
    pub fn from_shape_vec<T: TensorElement>(
        shape: impl Into<Vec<usize>>,
        data: Vec<T>,
    ) -> Result<Self, TensorError> {
        Self::from_buffer(shape, T::into_buffer(data))
    }

    /// Creates a new tensor with the given shape and typed buffer.
    ///
    /// # Errors
    ///
    /// If the buffer length does not match the shape, an error is returned.
    pub fn from_buffer(
        shape: impl Into<Vec<usize>>,
        buffer: TensorBuffer,
    ) -> Result<Self, TensorError> {
        let shape = shape.into();
        let numel = checked_numel(&shape)?;
        if numel != buffer.len() {
            return Err(TensorError::invalid_shape(numel, buffer.len()));
        }
        let strides = get_strides_from_shape(&shape)?;
        Ok(Self {
            buffer,
            shape,
            strides,
        })
    }

    /// Creates a zero filled tensor of the given shape and element type.
    ///
    /// # Errors
    ///
    /// If the element count of `shape` overflows a `usize`, an error is returned.
    pub fn zeros(shape: impl Into<Vec<usize>>, dtype: DType) -> Result<Self, TensorError> {
        let shape = shape.into();
        let numel = checked_numel(&shape)?;
        Self::from_buffer(shape, TensorBuffer::zeros(dtype, numel))
    }

    /// The size of each axis.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The row-major strides of each axis, in elements.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// The number of axes.
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// The number of elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.buffer.len()
    }

    /// The element type.
    #[inline]
    pub fn dtype(&self) -> DType {
        self.buffer.dtype()
    }

    /// Analyze the shape of this tensor.
    pub fn shape_facts(&self) -> ShapeFacts {
        analyze(&self.shape)
    }

    /// Borrow the data as a slice of `T`, or `None` if the element type differs.
    pub fn as_slice<T: TensorElement>(&self) -> Option<&[T]> {
        T::from_buffer(&self.buffer)
    }

    /// Get the element at the given multi-index.
    ///
    /// Returns `None` if the index has the wrong rank, is out of bounds, or the element
    /// type is not `T`.
    pub fn get<T: TensorElement>(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.rank() {
            return None;
        }
        let mut offset = 0;
        for ((&i, &size), &stride) in index.iter().zip(&self.shape).zip(&self.strides) {
            if i >= size {
                return None;
            }
            offset += i * stride;
        }
        self.as_slice::<T>()?.get(offset)
    }

    /// Cast the elements into a new tensor of type `dtype`.
    ///
    /// # Errors
    ///
    /// If an element cannot be represented in `dtype`, an error is returned.
    pub fn cast(&self, dtype: DType) -> Result<Self, TensorError> {
        Ok(Self {
            buffer: self.buffer.cast(dtype)?,
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        })
    }

    /// Narrow a `float64` tensor to `float32`; any other tensor is returned unchanged.
    ///
    /// Values outside the `f32` range become infinite, all others are rounded to the
    /// nearest representable `f32`.
    pub fn downcast_f64(self) -> Self {
        match self.buffer {
            TensorBuffer::F64(data) => Self {
                buffer: TensorBuffer::F32(data.into_iter().map(|x| x as f32).collect()),
                shape: self.shape,
                strides: self.strides,
            },
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_rank0() -> Result<(), TensorError> {
        let t = DynTensor::from_shape_vec(Vec::<usize>::new(), vec![7u8])?;
        assert_eq!(t.rank(), 0);
        assert_eq!(t.numel(), 1);
        assert_eq!(t.get::<u8>(&[]), Some(&7));
        Ok(())
    }

    #[test]
    fn constructor_mismatch() {
        let res = DynTensor::from_shape_vec([2, 3], vec![0u8; 5]);
        assert_eq!(res, Err(TensorError::invalid_shape(6, 5)));
    }

    #[test]
    fn get_3d() -> Result<(), TensorError> {
        let data: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let t = DynTensor::from_shape_vec([2, 1, 3], data)?;
        assert_eq!(t.strides(), &[3, 3, 1]);
        assert_eq!(t.get::<u8>(&[0, 0, 0]), Some(&1));
        assert_eq!(t.get::<u8>(&[1, 0, 2]), Some(&6));
        assert!(t.get::<u8>(&[2, 0, 0]).is_none());
        assert!(t.get::<u8>(&[0, 1, 0]).is_none());
        assert!(t.get::<u8>(&[0, 0]).is_none());
        assert!(t.get::<f32>(&[0, 0, 0]).is_none());
        Ok(())
    }

    #[test]
    fn zeros() -> Result<(), TensorError> {
        let t = DynTensor::zeros([3, 2], DType::F32)?;
        assert_eq!(t.strides(), &[2, 1]);
        assert_eq!(t.as_slice::<f32>(), Some([0.0f32; 6].as_slice()));
        Ok(())
    }

    #[test]
    fn shape_overflow() {
        let shape = [1usize << 33, 1 << 33, 4];
        let err = TensorError::ShapeOverflow {
            shape: shape.to_vec(),
        };
        assert_eq!(
            DynTensor::from_shape_vec(shape, Vec::<u8>::new()),
            Err(err.clone())
        );
        assert_eq!(DynTensor::zeros(shape, DType::U8), Err(err.clone()));
        assert_eq!(get_strides_from_shape(&shape), Err(err));
    }

    #[test]
    fn zero_sized_axis_never_overflows() -> Result<(), TensorError> {
        let t = DynTensor::from_shape_vec([usize::MAX, 0], Vec::<u8>::new())?;
        assert_eq!(t.numel(), 0);
        assert_eq!(t.strides(), &[0, 1]);
        Ok(())
    }

    #[test]
    fn cast_keeps_shape() -> Result<(), TensorError> {
        let t = DynTensor::from_shape_vec([2, 1], vec![3u8, 4])?;
        let c = t.cast(DType::U16)?;
        assert_eq!(c.shape(), &[2, 1]);
        assert_eq!(c.as_slice::<u16>(), Some([3u16, 4].as_slice()));
        Ok(())
    }

    #[test]
    fn downcast_f64() -> Result<(), TensorError> {
        let t = DynTensor::from_shape_vec([1, 2], vec![0.5f64, 2.25])?;
        let d = t.downcast_f64();
        assert_eq!(d.dtype(), DType::F32);
        assert_eq!(d.as_slice::<f32>(), Some([0.5f32, 2.25].as_slice()));

        let u = DynTensor::from_shape_vec([2], vec![1u8, 2])?;
        assert_eq!(u.clone().downcast_f64(), u);
        Ok(())
    }
}
