//! class-weights: class and sample weights for training on imbalanced data.
//!
//! This crate computes one weight per class (`compute_class_weight`) and
//! broadcasts those weights to one weight per sample (`compute_sample_weight`).
//! Weighting policies are uniform, inverse-frequency ("auto") or an explicit
//! label -> weight mapping, and can be read straight from a config file.
//!
//! Labels can be any ordered type; the label -> index mapping is provided by
//! `preprocessing::LabelEncoder` or any other `LabelEncoding` implementation.
pub mod class_weight;
pub mod config;
pub mod error;
pub mod preprocessing;

pub use class_weight::{compute_class_weight, compute_sample_weight};
pub use config::ClassWeight;
pub use error::WeightError;
