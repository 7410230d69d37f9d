use tracing::debug;

use super::{check_width, Classifier};
use crate::{atom::Atom, dataset::Dataset, distribution::EmpiricalDistribution, error::Result};

/// Naive Bayes over categorical attributes.
///
/// Every distribution is seeded with its full value domain before training,
/// so a value from the domain that never occurred with a class still gets a
/// small nonzero probability. A value outside the domain scores zero.
pub struct DiscreteNaiveBayes<'a> {
    dataset: &'a Dataset,
    labels: EmpiricalDistribution<Atom>,
    // attributes[c][i]: P(x_i | c) for label c and input position i.
    attributes: Vec<Vec<EmpiricalDistribution<Atom>>>,
    trained: bool,
}

impl<'a> DiscreteNaiveBayes<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        // Seed the label prior with one count per label:
        let labels =
            EmpiricalDistribution::from_observations(dataset.target_values().iter().cloned());

        // Seed every (label, input) pair with the input's full value domain:
        let attributes: Vec<Vec<_>> = dataset
            .target_values()
            .iter()
            .map(|_| {
                dataset
                    .inputs()
                    .iter()
                    .map(|&attr| {
                        EmpiricalDistribution::from_observations(dataset.values(attr).iter().cloned())
                    })
                    .collect()
            })
            .collect();

        DiscreteNaiveBayes {
            dataset,
            labels,
            attributes,
            trained: false,
        }
    }

    /// P(c) for a label, including its seed count.
    pub fn prior(&self, label: &Atom) -> Result<f64> {
        self.labels.probability(label)
    }

    /// P(value | label) for the input at position `input`, or `None` if the
    /// label is not in the label domain.
    pub fn likelihood(&self, label: &Atom, input: usize, value: &Atom) -> Option<Result<f64>> {
        let class = self.class_index(label)?;
        self.attributes[class].get(input).map(|dist| dist.probability(value))
    }

    fn class_index(&self, label: &Atom) -> Option<usize> {
        self.dataset.target_values().iter().position(|l| l == label)
    }
}

impl Classifier for DiscreteNaiveBayes<'_> {
    fn dataset(&self) -> &Dataset {
        self.dataset
    }

    fn train(&mut self) -> Result<()> {
        let dataset = self.dataset;
        let target = dataset.target();

        // Observe each row's label and its input values under that label:
        for example in dataset.examples() {
            let label = &example[target];
            self.labels.observe(label.clone());

            let Some(class) = self.class_index(label) else {
                continue;
            };
            for (i, &attr) in dataset.inputs().iter().enumerate() {
                self.attributes[class][i].observe(example[attr].clone());
            }
        }

        debug!(
            dataset = dataset.name(),
            examples = dataset.len(),
            labels = self.labels.len(),
            "trained discrete naive bayes"
        );
        self.trained = true;
        Ok(())
    }

    fn is_trained(&self) -> bool {
        self.trained
    }

    fn scores(&self, example: &[Atom]) -> Result<Vec<(Atom, f64)>> {
        check_width(self.dataset, example)?;

        // Score each label as P(c) times the product of P(x_i | c):
        let mut scores = Vec::with_capacity(self.attributes.len());
        for (label, distributions) in self.dataset.target_values().iter().zip(&self.attributes) {
            let mut probability = self.labels.probability(label)?;
            for (dist, &attr) in distributions.iter().zip(self.dataset.inputs()) {
                probability *= dist.probability(&example[attr])?;
            }
            scores.push((label.clone(), probability));
        }

        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BayesError;

    fn weather() -> Dataset {
        let rows = [("sunny", "no"), ("rainy", "yes"), ("sunny", "no"), ("rainy", "yes")];
        Dataset::with_last_target(
            "weather",
            rows.iter().map(|&(w, t)| vec![Atom::from(w), Atom::from(t)]).collect(),
        )
        .unwrap()
    }

    #[test]
    fn seeded_probabilities() {
        let ds = weather();
        let mut nb = DiscreteNaiveBayes::new(&ds);
        nb.train().unwrap();

        // One seed plus two observations out of six.
        assert_eq!(nb.prior(&"no".into()).unwrap(), 0.5);
        assert_eq!(nb.likelihood(&"no".into(), 0, &"sunny".into()).unwrap().unwrap(), 0.75);
        assert_eq!(nb.likelihood(&"yes".into(), 0, &"sunny".into()).unwrap().unwrap(), 0.25);
        assert!(nb.likelihood(&"maybe".into(), 0, &"sunny".into()).is_none());
    }

    #[test]
    fn unseen_pair_is_not_zero() {
        let ds = weather();
        let mut nb = DiscreteNaiveBayes::new(&ds);
        nb.train().unwrap();

        for (_, score) in nb.scores(&[Atom::from("sunny")]).unwrap() {
            assert!(score.is_finite() && score > 0.0);
        }
    }

    #[test]
    fn value_outside_domain_scores_zero() {
        let ds = weather();
        let mut nb = DiscreteNaiveBayes::new(&ds);
        nb.train().unwrap();

        let scores = nb.scores(&[Atom::from("foggy")]).unwrap();
        assert!(scores.iter().all(|(_, s)| *s == 0.0));
        // All tied at zero: first label in the domain.
        assert_eq!(nb.predict(&[Atom::from("foggy")]).unwrap(), Atom::from("no"));
    }

    #[test]
    fn predict_requires_training() {
        let ds = weather();
        let nb = DiscreteNaiveBayes::new(&ds);
        assert_eq!(nb.predict(&[Atom::from("sunny")]), Err(BayesError::NotTrained));
    }

    #[test]
    fn short_example_is_rejected() {
        let ds = weather();
        let mut nb = DiscreteNaiveBayes::new(&ds);
        nb.train().unwrap();
        let empty: Vec<Atom> = Vec::new();
        assert!(matches!(nb.predict(&empty), Err(BayesError::ShapeMismatch { .. })));
    }
}
