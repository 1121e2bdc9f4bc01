/// Facts derived from a tensor shape.
///
/// A *non-trivial* dimension is an axis whose size is not 1. Counting only those lets an
/// `H x W x 1` array and an `H x W` array be treated the same.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeFacts {
    /// Total number of axes.
    pub rank: usize,
    /// Sizes of the axes that are not 1, in their original order.
    pub non_trivial_dims: Vec<usize>,
}

impl ShapeFacts {
    /// Number of axes whose size is not 1.
    #[inline]
    pub fn non_trivial_rank(&self) -> usize {
        self.non_trivial_dims.len()
    }

    /// Size of the last non-trivial axis, if any.
    ///
    /// For a 3D image this is the channel count.
    #[inline]
    pub fn last_non_trivial(&self) -> Option<usize> {
        self.non_trivial_dims.last().copied()
    }

    /// Whether the shape contains at least one size-1 axis.
    #[inline]
    pub fn has_singleton_axes(&self) -> bool {
        self.non_trivial_rank() != self.rank
    }
}

/// Analyze a shape.
///
/// Never fails: every shape, including the empty one, can be analyzed.
///
/// # Examples
///
/// ```rust
/// use imlog_tensor::analyze;
///
/// let facts = analyze(&[1, 480, 640, 1]);
/// assert_eq!(facts.rank, 4);
/// assert_eq!(facts.non_trivial_dims, vec![480, 640]);
/// assert_eq!(facts.non_trivial_rank(), 2);
/// ```
pub fn analyze(shape: &[usize]) -> ShapeFacts {
    ShapeFacts {
        rank: shape.len(),
        non_trivial_dims: shape.iter().copied().filter(|&d| d != 1).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_empty() {
        let facts = analyze(&[]);
        assert_eq!(facts.rank, 0);
        assert_eq!(facts.non_trivial_rank(), 0);
        assert_eq!(facts.last_non_trivial(), None);
        assert!(!facts.has_singleton_axes());
    }

    #[test]
    fn analyze_keeps_order() {
        let facts = analyze(&[3, 1, 4, 1]);
        assert_eq!(facts.non_trivial_dims, vec![3, 4]);
        assert_eq!(facts.last_non_trivial(), Some(4));
        assert!(facts.has_singleton_axes());
    }

    #[test]
    fn analyze_zero_sized_axis_is_non_trivial() {
        let facts = analyze(&[0, 5]);
        assert_eq!(facts.non_trivial_rank(), 2);
        assert!(!facts.has_singleton_axes());
    }

    #[test]
    fn analyze_all_singletons() {
        let facts = analyze(&[1, 1, 1]);
        assert_eq!(facts.rank, 3);
        assert_eq!(facts.non_trivial_rank(), 0);
    }
}
