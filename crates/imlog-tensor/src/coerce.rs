use crate::{
    dtype::{DType, TensorBuffer},
    error::TensorError,
    DynTensor,
};

/// A literal, possibly nested, sequence of numbers.
///
/// This is the form callers use when they have no tensor at hand, e.g. `[[1, 2], [3, 4]]`.
/// All rows at the same depth must have the same length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NestedArray {
    /// A single number.
    Scalar(f64),
    /// A sequence of nested values.
    List(Vec<NestedArray>),
}

impl NestedArray {
    /// The shape the literal describes.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::RaggedNesting`] if sibling rows disagree in shape.
    pub fn shape(&self) -> Result<Vec<usize>, TensorError> {
        let mut shape = Vec::new();
        self.collect_shape(0, &mut shape)?;
        Ok(shape)
    }

    fn collect_shape(&self, axis: usize, shape: &mut Vec<usize>) -> Result<(), TensorError> {
        let items = match self {
            Self::Scalar(_) => return Ok(()),
            Self::List(items) => items,
        };
        shape.push(items.len());

        let mut inner: Option<Vec<usize>> = None;
        for item in items {
            let mut item_shape = Vec::new();
            item.collect_shape(axis + 1, &mut item_shape)?;
            match &inner {
                None => inner = Some(item_shape),
                Some(expected) if *expected != item_shape => {
                    return Err(TensorError::RaggedNesting { axis: axis + 1 });
                }
                Some(_) => {}
            }
        }
        shape.extend(inner.unwrap_or_default());
        Ok(())
    }

    fn flatten_into(&self, out: &mut Vec<f64>) {
        match self {
            Self::Scalar(x) => out.push(*x),
            Self::List(items) => items.iter().for_each(|item| item.flatten_into(out)),
        }
    }

    /// Convert the literal into an owned tensor of type `dtype`.
    ///
    /// # Errors
    ///
    /// Fails if the literal is ragged or a value does not fit `dtype`.
    pub fn to_tensor(&self, dtype: DType) -> Result<DynTensor, TensorError> {
        let shape = self.shape()?;
        let mut data = Vec::with_capacity(shape.iter().product());
        self.flatten_into(&mut data);
        let buffer = TensorBuffer::F64(data).cast(dtype)?;
        DynTensor::from_buffer(shape, buffer)
    }
}

macro_rules! impl_nested_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for NestedArray {
                fn from(value: $ty) -> Self {
                    NestedArray::Scalar(value as f64)
                }
            }
        )*
    };
}

impl_nested_scalar!(u8, u16, u32, i32, i64, f32, f64);

impl<T: Into<NestedArray>> From<Vec<T>> for NestedArray {
    fn from(items: Vec<T>) -> Self {
        NestedArray::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<NestedArray>, const N: usize> From<[T; N]> for NestedArray {
    fn from(items: [T; N]) -> Self {
        NestedArray::List(items.into_iter().map(Into::into).collect())
    }
}

/// Anything the logging entry points accept as image data.
///
/// | input               | result of [`ArrayLike::into_tensor`] |
/// |---------------------|--------------------------------------|
/// | `Array(tensor)`     | `tensor`, dtype preserved, no copy   |
/// | `Nested(literal)`   | new tensor of the requested dtype    |
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayLike {
    /// An existing tensor.
    Array(DynTensor),
    /// A literal that still has to be turned into a tensor.
    Nested(NestedArray),
}

impl ArrayLike {
    /// Turn the value into a tensor, coercing literals to `literal_dtype`.
    ///
    /// # Errors
    ///
    /// Only literal coercion can fail, see [`NestedArray::to_tensor`].
    pub fn into_tensor(self, literal_dtype: DType) -> Result<DynTensor, TensorError> {
        match self {
            Self::Array(tensor) => Ok(tensor),
            Self::Nested(nested) => nested.to_tensor(literal_dtype),
        }
    }

    /// Whether the value is already a tensor.
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }
}

impl From<DynTensor> for ArrayLike {
    fn from(tensor: DynTensor) -> Self {
        ArrayLike::Array(tensor)
    }
}

impl From<NestedArray> for ArrayLike {
    fn from(nested: NestedArray) -> Self {
        ArrayLike::Nested(nested)
    }
}

impl<T: Into<NestedArray>> From<Vec<T>> for ArrayLike {
    fn from(items: Vec<T>) -> Self {
        ArrayLike::Nested(items.into())
    }
}
