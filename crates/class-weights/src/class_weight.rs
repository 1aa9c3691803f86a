//! Class and sample weights for unbalanced datasets, following
//! scikit-learn's `compute_class_weight` / `compute_sample_weight`.
//!
//! See: https://scikit-learn.org/stable/modules/generated/sklearn.utils.class_weight.compute_class_weight.html

use std::collections::BTreeMap;

use log::{debug, trace};
use ndarray::Array1;

use crate::config::ClassWeight;
use crate::error::WeightError;
use crate::preprocessing::{bincount, search_sorted, LabelEncoder, LabelEncoding};

/// Estimate class weights for unbalanced datasets.
///
/// # Arguments
///
/// * `class_weight` - The weighting policy. `Auto` gives each class a weight
///   inversely proportional to its frequency in `y`; `Explicit` maps classes to
///   weights (unlisted classes keep 1.0); `Uniform` gives every class 1.0.
/// * `classes` - The classes occurring in the data, sorted ascending and
///   without duplicates (see [`crate::preprocessing::unique_labels`]).
/// * `y` - Original class label per sample.
///
/// # Returns
///
/// An array of shape (n_classes,) where entry `i` is the weight of `classes[i]`.
///
/// # Errors
///
/// * [`WeightError::UnknownClassInUniverse`] if `Auto` is used and a class never occurs in `y`.
/// * [`WeightError::UnknownClassInMapping`] if an explicit weight names a class not in `classes`.
/// * [`WeightError::InvalidClassWeight`] if an explicit weight is negative or not finite.
///
/// # Examples
///
/// ```rust
/// use class_weights::class_weight::compute_class_weight;
/// use class_weights::config::ClassWeight;
///
/// let weights = compute_class_weight(&ClassWeight::Auto, &[0, 1], &[0, 0, 0, 1]).unwrap();
/// assert!((weights[0] - 0.5).abs() < 1e-12);
/// assert!((weights[1] - 1.5).abs() < 1e-12);
/// ```
pub fn compute_class_weight<L>(
    class_weight: &ClassWeight<L>,
    classes: &[L],
    y: &[L],
) -> Result<Array1<f64>, WeightError>
where
    L: Ord + Clone + ToString,
{
    compute_class_weight_with::<L, LabelEncoder<L>>(class_weight, classes, y)
}

/// Same as [`compute_class_weight`], with the label encoder chosen by the caller.
pub fn compute_class_weight_with<L, E>(
    class_weight: &ClassWeight<L>,
    classes: &[L],
    y: &[L],
) -> Result<Array1<f64>, WeightError>
where
    L: Ord + Clone + ToString,
    E: LabelEncoding<L> + Default,
{
    match class_weight {
        ClassWeight::Uniform => {
            debug!("Uniform class weights for {} classes", classes.len());
            Ok(Array1::ones(classes.len()))
        }
        ClassWeight::Auto => {
            debug!(
                "Inverse-frequency class weights for {} classes from {} samples",
                classes.len(),
                y.len()
            );
            auto_class_weight::<L, E>(classes, y)
        }
        ClassWeight::Explicit(weights) => {
            debug!(
                "Explicit class weights for {} of {} classes",
                weights.len(),
                classes.len()
            );
            explicit_class_weight(weights, classes)
        }
    }
}

fn auto_class_weight<L, E>(classes: &[L], y: &[L]) -> Result<Array1<f64>, WeightError>
where
    L: Ord + Clone + ToString,
    E: LabelEncoding<L> + Default,
{
    let mut le = E::default();
    let y_ind = le.fit_transform(y);
    let class_ind = le
        .transform(classes)
        .map_err(|err| match err {
            WeightError::UnseenLabel(_) => WeightError::UnknownClassInUniverse,
            other => other,
        })?;

    // inversely proportional to the number of samples in the class
    let recip_freq: Array1<f64> = bincount(&y_ind, le.classes().len())
        .into_iter()
        .map(|count| 1.0 / count as f64)
        .collect();
    trace!("Reciprocal class frequencies: {}", recip_freq);

    let mean = match recip_freq.mean() {
        Some(mean) => mean,
        None if classes.is_empty() => return Ok(Array1::zeros(0)),
        None => return Err(WeightError::UnknownClassInUniverse),
    };

    class_ind
        .into_iter()
        .map(|idx| {
            recip_freq
                .get(idx)
                .map(|&r| r / mean)
                .ok_or(WeightError::UnknownClassInUniverse)
        })
        .collect()
}

fn explicit_class_weight<L>(
    weights: &BTreeMap<L, f64>,
    classes: &[L],
) -> Result<Array1<f64>, WeightError>
where
    L: Ord + ToString,
{
    let mut weight = Array1::ones(classes.len());
    for (label, &value) in weights {
        let idx = search_sorted(classes, label)
            .ok_or_else(|| WeightError::UnknownClassInMapping(label.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(WeightError::InvalidClassWeight {
                label: label.to_string(),
                weight: value,
            });
        }
        weight[idx] = value;
    }
    Ok(weight)
}

/// Compute sample weights for unbalanced datasets.
///
/// Each sample receives the weight of its class as computed by
/// [`compute_class_weight`].
///
/// # Arguments
///
/// * `class_weight` - The weighting policy, or `None` for no weighting at all.
/// * `classes` - The classes occurring in the data, sorted ascending.
/// * `y` - Original class label per sample.
///
/// # Returns
///
/// `None` when `class_weight` is `None`, otherwise an array of shape
/// (n_samples,) where entry `i` is the weight of the `i`-th sample.
///
/// # Errors
///
/// Everything [`compute_class_weight`] can return, plus
/// [`WeightError::UnknownSampleClass`] if `y` holds a label missing from `classes`.
pub fn compute_sample_weight<L>(
    class_weight: Option<&ClassWeight<L>>,
    classes: &[L],
    y: &[L],
) -> Result<Option<Array1<f64>>, WeightError>
where
    L: Ord + Clone + ToString,
{
    compute_sample_weight_with::<L, LabelEncoder<L>>(class_weight, classes, y)
}

/// Same as [`compute_sample_weight`], with the label encoder chosen by the caller.
pub fn compute_sample_weight_with<L, E>(
    class_weight: Option<&ClassWeight<L>>,
    classes: &[L],
    y: &[L],
) -> Result<Option<Array1<f64>>, WeightError>
where
    L: Ord + Clone + ToString,
    E: LabelEncoding<L> + Default,
{
    let class_weight = match class_weight {
        Some(class_weight) => class_weight,
        None => return Ok(None),
    };

    let weight = compute_class_weight_with::<L, E>(class_weight, classes, y)?;

    let class_position: BTreeMap<&L, usize> =
        classes.iter().enumerate().map(|(i, c)| (c, i)).collect();

    let mut le = E::default();
    let y_ind = le.fit_transform(y);

    // Check if every y sample belongs to a class in classes
    let mut encoded_weight = Vec::with_capacity(le.classes().len());
    for (class_, label) in le.classes().iter().enumerate() {
        match class_position.get(label) {
            Some(&pos) => {
                trace!("Assigning weight {} to class index {}", weight[pos], class_);
                encoded_weight.push(weight[pos]);
            }
            None => return Err(WeightError::UnknownSampleClass),
        }
    }

    let sample_weight = y_ind
        .into_iter()
        .map(|idx| {
            encoded_weight
                .get(idx)
                .copied()
                .ok_or(WeightError::UnknownSampleClass)
        })
        .collect::<Result<Array1<f64>, _>>()?;

    Ok(Some(sample_weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_weights_start_from_ones() {
        let weights: BTreeMap<i32, f64> = [(2, 4.0)].into_iter().collect();
        let w = explicit_class_weight(&weights, &[1, 2, 3]).unwrap();
        assert_eq!(w.to_vec(), vec![1.0, 4.0, 1.0]);
    }

    #[test]
    fn explicit_weights_with_unsorted_universe_do_not_panic() {
        let weights: BTreeMap<i32, f64> = [(9, 2.0)].into_iter().collect();
        let res = explicit_class_weight(&weights, &[5, 1, 3]);
        assert_eq!(res, Err(WeightError::UnknownClassInMapping("9".to_string())));
    }

    #[test]
    fn explicit_weights_between_classes_are_not_present() {
        let weights: BTreeMap<i32, f64> = [(2, 2.0)].into_iter().collect();
        let res = explicit_class_weight(&weights, &[1, 3]);
        assert_eq!(res, Err(WeightError::UnknownClassInMapping("2".to_string())));
    }

    #[test]
    fn auto_weights_empty_inputs() {
        let w = auto_class_weight::<i32, LabelEncoder<i32>>(&[], &[]).unwrap();
        assert!(w.is_empty());
    }
}
