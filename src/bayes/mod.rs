//! Naive Bayes classifiers over a [`Dataset`].
//!
//! Both variants score every label `c` as `P(c) * Π P(x_i | c)` and return the
//! label with the highest score. Labels are visited in the order they first
//! appear in the dataset, and the first label reaching the maximum wins a tie.

mod continuous;
mod discrete;

use std::f64::consts::PI;

pub use continuous::ContinuousNaiveBayes;
pub use discrete::DiscreteNaiveBayes;

use crate::{
    atom::Atom,
    dataset::Dataset,
    error::{BayesError, Result},
};

/// Shared lifecycle of the classifiers: constructed untrained, `train` moves
/// them to trained, `predict` only reads.
///
/// Calling `train` on one instance from several threads is not supported;
/// independent instances may be trained concurrently over the same dataset.
pub trait Classifier {
    fn dataset(&self) -> &Dataset;

    fn train(&mut self) -> Result<()>;

    fn is_trained(&self) -> bool;

    /// Unnormalised posterior of every label, in label order.
    fn scores(&self, example: &[Atom]) -> Result<Vec<(Atom, f64)>>;

    fn predict(&self, example: &[Atom]) -> Result<Atom> {
        if !self.is_trained() {
            return Err(BayesError::NotTrained);
        }
        let scores = self.scores(example)?;
        best_label(scores).ok_or(BayesError::EmptyDataset)
    }
}

/// Density at `x` of a normal distribution.
pub fn gaussian(mean: f64, stdev: f64, x: f64) -> f64 {
    1.0 / (stdev * (2.0 * PI).sqrt()) * (-((x - mean) * (x - mean)) / (2.0 * stdev * stdev)).exp()
}

/// Fraction of `examples` whose prediction differs from their target value.
pub fn error_rate<C: Classifier + ?Sized>(classifier: &C, examples: &[Vec<Atom>]) -> Result<f64> {
    if examples.is_empty() {
        return Err(BayesError::EmptyDataset);
    }

    let target = classifier.dataset().target();
    let mut wrong = 0;
    for example in examples {
        let expected = example.get(target).ok_or_else(|| BayesError::ShapeMismatch {
            expected: format!("at least {} values", target + 1),
            got: format!("{} values", example.len()),
        })?;
        if classifier.predict(example)? != *expected {
            wrong += 1;
        }
    }

    Ok(wrong as f64 / examples.len() as f64)
}

// Strict `>` keeps the earliest label among equal scores.
fn best_label(scores: Vec<(Atom, f64)>) -> Option<Atom> {
    let (best, _) = scores.into_iter().fold(
        (None, f64::NEG_INFINITY),
        |(best, best_score), (label, score)| {
            if best.is_none() || score > best_score {
                (Some(label), score)
            } else {
                (best, best_score)
            }
        },
    );

    best
}

fn check_width(dataset: &Dataset, example: &[Atom]) -> Result<()> {
    let required = dataset.inputs().iter().max().map_or(0, |&a| a + 1);
    if example.len() < required {
        return Err(BayesError::ShapeMismatch {
            expected: format!("at least {} values", required),
            got: format!("{} values", example.len()),
        });
    }
    Ok(())
}
