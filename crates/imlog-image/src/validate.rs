use imlog_tensor::{squeeze, DynTensor};

use crate::{
    classify::{Classification, ImageKind},
    error::ImageError,
    meaning::MeaningTag,
    prepass,
};

/// How a failed classification is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// The call is aborted and nothing reaches the sink.
    Hard,
    /// A warning is emitted and the tensor is still forwarded, untagged.
    Soft,
}

/// The result of validating a tensor against an [`ImageKind`].
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationOutcome {
    /// The tensor satisfies the rules of its kind.
    Valid {
        /// The tensor with its size-1 axes removed.
        tensor: DynTensor,
        /// What the tensor was classified as.
        classification: Classification,
        /// The meaning to attach.
        tag: MeaningTag,
    },
    /// The tensor does not satisfy the rules of its kind.
    Invalid {
        /// The tensor in its original shape, after the kind's prepass.
        tensor: DynTensor,
        /// Why classification failed.
        reason: ImageError,
        /// How the failure must be reported.
        severity: Severity,
        /// The default meaning to attach if the tensor is forwarded anyway.
        tag: MeaningTag,
    },
}

impl ValidationOutcome {
    /// Whether classification succeeded.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The tensor to forward, whatever the outcome.
    pub fn tensor(&self) -> &DynTensor {
        match self {
            Self::Valid { tensor, .. } | Self::Invalid { tensor, .. } => tensor,
        }
    }

    /// The meaning to forward, whatever the outcome.
    pub fn tag(&self) -> MeaningTag {
        match self {
            Self::Valid { tag, .. } | Self::Invalid { tag, .. } => *tag,
        }
    }
}

/// Run a tensor through the prepass, analysis, classification, squeeze and tagging
/// steps of `kind`.
///
/// A tensor that fails classification is returned in its original shape, so whatever
/// reports the failure downstream sees what the caller passed in.
///
/// # Examples
///
/// ```rust
/// use imlog_image::{validate, ImageKind, Severity, TensorDataMeaning};
/// use imlog_tensor::DynTensor;
///
/// let tensor = DynTensor::from_shape_vec([4, 4, 1], vec![0u16; 16]).unwrap();
/// let outcome = validate(ImageKind::Segmentation, tensor, None, Severity::Soft);
///
/// assert!(outcome.is_valid());
/// assert_eq!(outcome.tensor().shape(), &[4, 4]);
/// assert_eq!(outcome.tag().meaning, TensorDataMeaning::ClassId);
/// ```
pub fn validate(
    kind: ImageKind,
    tensor: DynTensor,
    meter: Option<f32>,
    severity: Severity,
) -> ValidationOutcome {
    let tensor = prepass::apply(kind, tensor);
    let facts = tensor.shape_facts();

    match kind.classify(&facts, tensor.shape()) {
        Ok(classification) => ValidationOutcome::Valid {
            tensor: squeeze(tensor, &facts),
            tag: MeaningTag::for_classification(&classification, meter),
            classification,
        },
        Err(reason) => {
            log::debug!("{kind} classification failed: {reason}");
            ValidationOutcome::Invalid {
                tensor,
                reason,
                severity,
                tag: MeaningTag::for_invalid(kind, meter),
            }
        }
    }
}
