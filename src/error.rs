use thiserror::Error;

use crate::atom::Atom;

/// Failures raised while building a dataset, training, or predicting.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BayesError {
    /// A class has fewer than two values for an input, so its sample
    /// standard deviation is undefined.
    #[error("class {class} has fewer than 2 samples for input {attribute}")]
    InsufficientSamples { class: Atom, attribute: usize },

    /// Probability queried on a distribution with no observations.
    #[error("probability is undefined for a distribution with no observations")]
    DivisionUndefined,

    /// A value of the wrong kind reached numeric evaluation.
    #[error("attribute {attribute} expected a number, got {value:?}")]
    TypeMismatch { attribute: usize, value: Atom },

    /// `predict` called before `train`.
    #[error("classifier used before calling `train`")]
    NotTrained,

    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    #[error("dataset contains no examples")]
    EmptyDataset,

    #[error("row {row} has {got} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("target column {target} is out of range for {width} attributes")]
    TargetOutOfRange { target: usize, width: usize },
}

pub type Result<T> = std::result::Result<T, BayesError>;
