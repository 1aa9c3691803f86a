use std::error::Error;
use std::fmt;

/// Validation failures raised while building class or sample weights.
///
/// Every variant describes malformed input; nothing here is transient, so
/// callers should fix the inputs rather than retry.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightError {
    /// A class in the universe never occurs in `y` under the "auto" policy.
    UnknownClassInUniverse,
    /// A key of an explicit weight mapping is not part of the class universe.
    UnknownClassInMapping(String),
    /// A policy built from untyped input is not empty, "auto", or a mapping.
    InvalidPolicyType(String),
    /// `y` holds a label that is not in the class universe.
    UnknownSampleClass,
    /// An explicit weight is negative, NaN or infinite.
    InvalidClassWeight { label: String, weight: f64 },
    /// The encoder was asked to transform a label it never saw while fitting.
    UnseenLabel(String),
    /// The encoder was used before `fit`.
    NotFitted,
    /// An encoded index has no label behind it.
    IndexOutOfRange(usize),
}

impl fmt::Display for WeightError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WeightError::UnknownClassInUniverse => {
                write!(f, "classes should have valid labels that are in y")
            }
            WeightError::UnknownClassInMapping(label) => {
                write!(f, "Class label {} not present.", label)
            }
            WeightError::InvalidPolicyType(value) => write!(
                f,
                "class_weight must be dict, 'auto', or None, got: {:?}",
                value
            ),
            WeightError::UnknownSampleClass => write!(f, "'y' has classes not in 'classes'."),
            WeightError::InvalidClassWeight { label, weight } => write!(
                f,
                "Class weight for label {} must be finite and non-negative, got: {}",
                label, weight
            ),
            WeightError::UnseenLabel(label) => write!(f, "y contains previously unseen label: {}", label),
            WeightError::NotFitted => write!(f, "LabelEncoder is not fitted yet"),
            WeightError::IndexOutOfRange(idx) => {
                write!(f, "Encoded index {} does not map to a fitted label", idx)
            }
        }
    }
}

impl Error for WeightError {}
