use tracing::debug;

use super::{check_width, gaussian, Classifier};
use crate::{
    atom::Atom,
    dataset::Dataset,
    distribution::EmpiricalDistribution,
    error::{BayesError, Result},
    stats::{ClassStatistics, FeatureSelection},
};

/// Naive Bayes over numeric attributes, each modelled as a per-class normal
/// distribution.
///
/// The label prior is seeded once from the label domain and is not updated by
/// training. An input whose standard deviation is zero for a class is left out
/// of that class's product.
pub struct ContinuousNaiveBayes<'a> {
    dataset: &'a Dataset,
    labels: EmpiricalDistribution<Atom>,
    selection: FeatureSelection,
    stats: Option<ClassStatistics>,
}

impl<'a> ContinuousNaiveBayes<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self::with_selection(dataset, FeatureSelection::default())
    }

    pub fn with_selection(dataset: &'a Dataset, selection: FeatureSelection) -> Self {
        ContinuousNaiveBayes {
            dataset,
            labels: EmpiricalDistribution::from_observations(
                dataset.target_values().iter().cloned(),
            ),
            selection,
            stats: None,
        }
    }

    /// Statistics learned by the last call to `train`.
    pub fn statistics(&self) -> Option<&ClassStatistics> {
        self.stats.as_ref()
    }
}

impl Classifier for ContinuousNaiveBayes<'_> {
    fn dataset(&self) -> &Dataset {
        self.dataset
    }

    fn train(&mut self) -> Result<()> {
        let stats = ClassStatistics::compute_with(self.dataset, self.selection)?;
        debug!(
            dataset = self.dataset.name(),
            examples = self.dataset.len(),
            labels = stats.labels().len(),
            "trained continuous naive bayes"
        );
        self.stats = Some(stats);
        Ok(())
    }

    fn is_trained(&self) -> bool {
        self.stats.is_some()
    }

    fn scores(&self, example: &[Atom]) -> Result<Vec<(Atom, f64)>> {
        let stats = self.stats.as_ref().ok_or(BayesError::NotTrained)?;
        check_width(self.dataset, example)?;

        let mut scores = Vec::with_capacity(stats.labels().len());
        // Score each label as P(c) times the product of the densities:
        for (class, label) in stats.labels().iter().enumerate() {
            let mut probability = self.labels.probability(label)?;

            for (i, &attr) in self.dataset.inputs().iter().enumerate() {
                let stdev = stats.stdev(class, i);
                if stdev == 0.0 {
                    continue;
                }
                let x = example[attr].as_f64().ok_or_else(|| BayesError::TypeMismatch {
                    attribute: attr,
                    value: example[attr].clone(),
                })?;
                probability *= gaussian(stats.mean(class, i), stdev, x);
            }

            scores.push((label.clone(), probability));
        }

        Ok(scores)
    }
}
