use crate::{shape::ShapeFacts, DynTensor};

/// Remove every size-1 axis from `tensor`.
///
/// `facts` must have been computed from the shape of `tensor`. The element buffer is
/// moved, never copied, and a tensor without singleton axes is returned as is.
///
/// # Examples
///
/// ```rust
/// use imlog_tensor::{squeeze, DynTensor};
///
/// let t = DynTensor::from_shape_vec([1, 2, 2, 1], vec![1u8, 2, 3, 4]).unwrap();
/// let facts = t.shape_facts();
/// let t = squeeze(t, &facts);
/// assert_eq!(t.shape(), &[2, 2]);
/// ```
pub fn squeeze(mut tensor: DynTensor, facts: &ShapeFacts) -> DynTensor {
    debug_assert_eq!(facts.rank, tensor.rank());
    if !facts.has_singleton_axes() {
        return tensor;
    }
    // row-major strides of the remaining axes do not depend on size-1 axes
    let strides = tensor
        .shape
        .iter()
        .zip(&tensor.strides)
        .filter(|&(&dim, _)| dim != 1)
        .map(|(_, &stride)| stride)
        .collect();
    tensor.shape = facts.non_trivial_dims.clone();
    tensor.strides = strides;
    tensor
}

impl DynTensor {
    /// Remove every size-1 axis.
    pub fn squeeze(self) -> DynTensor {
        let facts = self.shape_facts();
        squeeze(self, &facts)
    }
}
