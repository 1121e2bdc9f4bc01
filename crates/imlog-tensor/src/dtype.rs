use num_traits::NumCast;

use crate::error::TensorError;

/// The element type of a tensor.
///
/// Images may be stored as unsigned 8/16-bit integers or as 32/64-bit floats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DType {
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit integer.
    U16,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::F32 => "float32",
            Self::F64 => "float64",
        };
        write!(f, "{name}")
    }
}

/// Owned element storage of a tensor, one variant per [`DType`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TensorBuffer {
    /// `u8` elements.
    U8(Vec<u8>),
    /// `u16` elements.
    U16(Vec<u16>),
    /// `f32` elements.
    F32(Vec<f32>),
    /// `f64` elements.
    F64(Vec<f64>),
}

impl TensorBuffer {
    /// Returns a zero filled buffer of the given type and length.
    pub fn zeros(dtype: DType, len: usize) -> Self {
        match dtype {
            DType::U8 => Self::U8(vec![0; len]),
            DType::U16 => Self::U16(vec![0; len]),
            DType::F32 => Self::F32(vec![0.0; len]),
            DType::F64 => Self::F64(vec![0.0; len]),
        }
    }

    /// The element type of the buffer.
    pub fn dtype(&self) -> DType {
        match self {
            Self::U8(_) => DType::U8,
            Self::U16(_) => DType::U16,
            Self::F32(_) => DType::F32,
            Self::F64(_) => DType::F64,
        }
    }

    /// Number of elements in the buffer.
    pub fn len(&self) -> usize {
        match self {
            Self::U8(v) => v.len(),
            Self::U16(v) => v.len(),
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
        }
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cast every element into a new buffer of type `dtype`.
    ///
    /// Widening casts always succeed. Narrowing casts fail with [`TensorError::CastError`]
    /// when an element is out of range for the target type; float to integer casts
    /// truncate the fractional part.
    pub fn cast(&self, dtype: DType) -> Result<TensorBuffer, TensorError> {
        if self.dtype() == dtype {
            return Ok(self.clone());
        }
        match self {
            Self::U8(v) => cast_buffer(v, dtype),
            Self::U16(v) => cast_buffer(v, dtype),
            Self::F32(v) => cast_buffer(v, dtype),
            Self::F64(v) => cast_buffer(v, dtype),
        }
    }
}

fn cast_buffer<T: TensorElement>(src: &[T], to: DType) -> Result<TensorBuffer, TensorError> {
    Ok(match to {
        DType::U8 => TensorBuffer::U8(cast_vec(src, to)?),
        DType::U16 => TensorBuffer::U16(cast_vec(src, to)?),
        DType::F32 => TensorBuffer::F32(cast_vec(src, to)?),
        DType::F64 => TensorBuffer::F64(cast_vec(src, to)?),
    })
}

fn cast_vec<T: TensorElement, U: NumCast>(src: &[T], to: DType) -> Result<Vec<U>, TensorError> {
    src.iter()
        .map(|&x| U::from(x).ok_or(TensorError::CastError { from: T::DTYPE, to }))
        .collect()
}

mod private {
    pub trait Sealed {}
}

/// A scalar type that can be stored in a [`TensorBuffer`].
///
/// This trait is sealed: only `u8`, `u16`, `f32` and `f64` implement it.
pub trait TensorElement:
    Copy + NumCast + PartialEq + std::fmt::Debug + private::Sealed + 'static
{
    /// The runtime dtype of this element type.
    const DTYPE: DType;

    /// Wrap a vector of elements into a buffer.
    fn into_buffer(data: Vec<Self>) -> TensorBuffer;

    /// Borrow the elements of a buffer, if it has this element type.
    fn from_buffer(buffer: &TensorBuffer) -> Option<&[Self]>;
}

macro_rules! impl_tensor_element {
    ($ty:ty, $variant:ident) => {
        impl private::Sealed for $ty {}

        impl TensorElement for $ty {
            const DTYPE: DType = DType::$variant;

            fn into_buffer(data: Vec<Self>) -> TensorBuffer {
                TensorBuffer::$variant(data)
            }

            fn from_buffer(buffer: &TensorBuffer) -> Option<&[Self]> {
                match buffer {
                    TensorBuffer::$variant(v) => Some(v.as_slice()),
                    _ => None,
                }
            }
        }
    };
}

impl_tensor_element!(u8, U8);
impl_tensor_element!(u16, U16);
impl_tensor_element!(f32, F32);
impl_tensor_element!(f64, F64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dtype_names() {
        assert_eq!(DType::U8.to_string(), "uint8");
        assert_eq!(DType::U16.to_string(), "uint16");
        assert_eq!(DType::F32.to_string(), "float32");
        assert_eq!(DType::F64.to_string(), "float64");
    }

    #[test]
    fn cast_widening() -> Result<(), TensorError> {
        let buffer = TensorBuffer::U8(vec![0, 1, 255]);
        let casted = buffer.cast(DType::F32)?;
        assert_eq!(casted, TensorBuffer::F32(vec![0.0, 1.0, 255.0]));
        Ok(())
    }

    #[test]
    fn cast_narrowing_out_of_range() {
        let buffer = TensorBuffer::F64(vec![1.0, -3.0]);
        assert_eq!(
            buffer.cast(DType::U16),
            Err(TensorError::CastError {
                from: DType::F64,
                to: DType::U16
            })
        );
    }

    #[test]
    fn cast_float_to_int_truncates() -> Result<(), TensorError> {
        let buffer = TensorBuffer::F32(vec![1.9, 2.1]);
        assert_eq!(buffer.cast(DType::U8)?, TensorBuffer::U8(vec![1, 2]));
        Ok(())
    }

    #[test]
    fn from_buffer_checks_type() {
        let buffer = u16::into_buffer(vec![1, 2]);
        assert_eq!(buffer.dtype(), DType::U16);
        assert_eq!(u16::from_buffer(&buffer), Some([1u16, 2].as_slice()));
        assert!(u8::from_buffer(&buffer).is_none());
    }
}
