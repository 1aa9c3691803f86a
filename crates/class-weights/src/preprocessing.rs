//! Label encoding utilities shared by the weighting functions.
//!
//! Provides a `LabelEncoder` that maps arbitrary ordered labels onto
//! contiguous indices `0..n_classes` (following scikit-learn's
//! `LabelEncoder`), the `LabelEncoding` trait so callers can plug in their
//! own encoder, and a couple of small counting helpers.

use log::trace;

use crate::error::WeightError;

/// Capability needed by the weighting functions: learn a label -> index
/// mapping from a label sequence and apply it to other sequences.
pub trait LabelEncoding<L> {
    /// Learn the set of classes present in `y`.
    fn fit(&mut self, y: &[L]);

    /// Fit on `y` and return the encoded indices of `y`.
    fn fit_transform(&mut self, y: &[L]) -> Vec<usize>;

    /// Encode `y` with the fitted mapping. Fails on labels never seen by `fit`.
    fn transform(&self, y: &[L]) -> Result<Vec<usize>, WeightError>;

    /// Fitted classes, position `i` holding the label encoded as `i`.
    fn classes(&self) -> &[L];
}

/// Encode labels with values between `0` and `n_classes - 1`.
///
/// Classes are kept in ascending order, so the encoding of a label is its
/// rank among the distinct labels seen during `fit`.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelEncoder<L> {
    classes: Option<Vec<L>>,
}

impl<L> Default for LabelEncoder<L> {
    fn default() -> Self {
        Self { classes: None }
    }
}

impl<L: Ord + Clone + ToString> LabelEncoder<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fitted(&self) -> bool {
        self.classes.is_some()
    }

    /// Number of fitted classes (zero before `fit`).
    pub fn n_classes(&self) -> usize {
        self.classes.as_ref().map_or(0, Vec::len)
    }

    /// Map encoded indices back to their original labels.
    pub fn inverse_transform(&self, indices: &[usize]) -> Result<Vec<L>, WeightError> {
        let classes = self.classes.as_ref().ok_or(WeightError::NotFitted)?;
        indices
            .iter()
            .map(|&idx| {
                classes
                    .get(idx)
                    .cloned()
                    .ok_or(WeightError::IndexOutOfRange(idx))
            })
            .collect()
    }

    fn rank(classes: &[L], label: &L) -> usize {
        classes.partition_point(|c| c < label)
    }
}

impl<L: Ord + Clone + ToString> LabelEncoding<L> for LabelEncoder<L> {
    fn fit(&mut self, y: &[L]) {
        let classes = unique_labels(y);
        trace!("LabelEncoder fitted {} classes from {} labels", classes.len(), y.len());
        self.classes = Some(classes);
    }

    fn fit_transform(&mut self, y: &[L]) -> Vec<usize> {
        self.fit(y);
        let classes = self.classes();
        y.iter().map(|label| Self::rank(classes, label)).collect()
    }

    fn transform(&self, y: &[L]) -> Result<Vec<usize>, WeightError> {
        let classes = self.classes.as_ref().ok_or(WeightError::NotFitted)?;
        y.iter()
            .map(|label| {
                search_sorted(classes, label)
                    .ok_or_else(|| WeightError::UnseenLabel(label.to_string()))
            })
            .collect()
    }

    fn classes(&self) -> &[L] {
        self.classes.as_deref().unwrap_or(&[])
    }
}

/// Sorted, duplicate-free labels of `y`.
///
/// This is the usual way to build the class universe passed to
/// `compute_class_weight` and `compute_sample_weight`.
pub fn unique_labels<L: Ord + Clone>(y: &[L]) -> Vec<L> {
    let mut labels = y.to_vec();
    labels.sort_unstable();
    labels.dedup();
    labels
}

/// Position of `label` in the ascending slice `classes`, if present.
///
/// Uses the leftmost insertion point (numpy's `searchsorted(side="left")`), so
/// a label past the end or between two classes is reported as absent.
pub fn search_sorted<L: Ord>(classes: &[L], label: &L) -> Option<usize> {
    let idx = classes.partition_point(|c| c < label);
    match classes.get(idx) {
        Some(found) if found == label => Some(idx),
        _ => None,
    }
}

/// Count occurrences of each index in `indices`.
///
/// The result has length `max(minlength, max(indices) + 1)`.
pub fn bincount(indices: &[usize], minlength: usize) -> Vec<usize> {
    let len = indices
        .iter()
        .map(|&i| i + 1)
        .max()
        .unwrap_or(0)
        .max(minlength);
    let mut counts = vec![0usize; len];
    for &i in indices {
        counts[i] += 1;
    }
    counts
}
