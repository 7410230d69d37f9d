//! Per-class mean and sample standard deviation of every input attribute.

use tracing::{debug, warn};

use crate::{
    atom::Atom,
    dataset::Dataset,
    error::{BayesError, Result},
};

/// Which cells of a row count as features when grouping by class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureSelection {
    /// Drop every cell whose value equals any label value, then take the
    /// remaining cells positionally. A numeric feature that happens to equal
    /// a label is dropped too, shifting the following features left.
    #[default]
    LabelValues,
    /// Take exactly the input columns of the dataset.
    InputColumns,
}

/// `mean[c][i]` and `stdev[c][i]` for label `c` (in label order) and input
/// position `i`.
#[derive(Debug, Clone)]
pub struct ClassStatistics {
    labels: Vec<Atom>,
    means: Vec<Vec<f64>>,
    stdevs: Vec<Vec<f64>>,
}

impl ClassStatistics {
    pub fn compute(dataset: &Dataset) -> Result<Self> {
        Self::compute_with(dataset, FeatureSelection::default())
    }

    pub fn compute_with(dataset: &Dataset, selection: FeatureSelection) -> Result<Self> {
        let labels = dataset.target_values();
        let n_inputs = dataset.inputs().len();

        // features[c][i] collects the values at position i for label c.
        let mut features: Vec<Vec<Vec<f64>>> = vec![vec![Vec::new(); n_inputs]; labels.len()];

        for (row, example) in dataset.examples().iter().enumerate() {
            let target = &example[dataset.target()];
            let Some(class) = labels.iter().position(|label| label == target) else {
                continue;
            };

            // Pick out the feature values of this row:
            let selected: Vec<(usize, &Atom)> = match selection {
                FeatureSelection::LabelValues => example
                    .iter()
                    .enumerate()
                    .filter(|(_, value)| {
                        !labels.iter().any(|label| label.same_value(value))
                    })
                    .collect(),
                FeatureSelection::InputColumns => dataset
                    .inputs()
                    .iter()
                    .map(|&a| (a, &example[a]))
                    .collect(),
            };

            if selected.len() < n_inputs {
                warn!(
                    row,
                    kept = selected.len(),
                    expected = n_inputs,
                    "feature values equal to a label were dropped"
                );
            }

            // Sort them by column into the class's buckets:
            for (i, (attribute, value)) in selected.into_iter().take(n_inputs).enumerate() {
                let x = value.as_f64().ok_or_else(|| BayesError::TypeMismatch {
                    attribute,
                    value: value.clone(),
                })?;
                features[class][i].push(x);
            }
        }

        // Now calculate the mean and deviation of every bucket:
        let mut means = Vec::with_capacity(labels.len());
        let mut stdevs = Vec::with_capacity(labels.len());

        for (label, columns) in labels.iter().zip(&features) {
            let mut class_means = Vec::with_capacity(n_inputs);
            let mut class_stdevs = Vec::with_capacity(n_inputs);

            for (i, column) in columns.iter().enumerate() {
                if column.len() < 2 {
                    return Err(BayesError::InsufficientSamples {
                        class: label.clone(),
                        attribute: dataset.inputs()[i],
                    });
                }
                let m = mean(column);
                class_means.push(m);
                class_stdevs.push(sample_stdev(column, m));
            }

            debug!(%label, means = ?class_means, stdevs = ?class_stdevs, "class statistics");
            means.push(class_means);
            stdevs.push(class_stdevs);
        }

        Ok(ClassStatistics {
            labels: labels.to_vec(),
            means,
            stdevs,
        })
    }

    pub fn labels(&self) -> &[Atom] {
        &self.labels
    }

    /// Mean of input position `i` for the label at `class` in label order.
    ///
    /// # Panics
    ///
    /// Panics if `class` or `i` is out of range.
    pub fn mean(&self, class: usize, i: usize) -> f64 {
        self.means[class][i]
    }

    /// Sample standard deviation of input position `i` for the label at `class`.
    ///
    /// # Panics
    ///
    /// Panics if `class` or `i` is out of range.
    pub fn stdev(&self, class: usize, i: usize) -> f64 {
        self.stdevs[class][i]
    }

    pub fn means(&self) -> &[Vec<f64>] {
        &self.means
    }

    pub fn stdevs(&self) -> &[Vec<f64>] {
        &self.stdevs
    }
}

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

// n - 1 denominator.
fn sample_stdev(xs: &[f64], mean: f64) -> f64 {
    let ss: f64 = xs.iter().map(|x| (x - mean) * (x - mean)).sum();
    (ss / (xs.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[(f64, &str)]) -> Vec<Vec<Atom>> {
        data.iter()
            .map(|&(x, label)| vec![Atom::Float(x), Atom::from(label)])
            .collect()
    }

    #[test]
    fn computes_mean_and_sample_stdev() {
        let ds = Dataset::with_last_target(
            "ab",
            rows(&[(1.0, "A"), (2.0, "A"), (3.0, "A"), (10.0, "B"), (14.0, "B")]),
        )
        .unwrap();
        let stats = ClassStatistics::compute(&ds).unwrap();

        assert_eq!(stats.labels(), &[Atom::from("A"), Atom::from("B")]);
        assert_eq!(stats.mean(0, 0), 2.0);
        assert!((stats.stdev(0, 0) - 1.0).abs() < 1e-12);
        assert_eq!(stats.mean(1, 0), 12.0);
        assert!((stats.stdev(1, 0) - 8.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn single_example_class_is_rejected() {
        let ds = Dataset::with_last_target("ab", rows(&[(1.0, "A"), (2.0, "A"), (3.0, "B")])).unwrap();

        assert_eq!(
            ClassStatistics::compute(&ds).unwrap_err(),
            BayesError::InsufficientSamples {
                class: Atom::from("B"),
                attribute: 0
            }
        );
    }

    #[test]
    fn text_feature_is_a_type_mismatch() {
        let ds = Dataset::with_last_target(
            "mixed",
            vec![
                vec![Atom::from("x"), Atom::Int(0)],
                vec![Atom::from("y"), Atom::Int(0)],
            ],
        )
        .unwrap();

        assert_eq!(
            ClassStatistics::compute(&ds).unwrap_err(),
            BayesError::TypeMismatch {
                attribute: 0,
                value: Atom::from("x")
            }
        );
    }

    #[test]
    fn label_valued_features_are_dropped() {
        // Integer labels 0/1 collide with the second feature.
        let data = vec![
            vec![Atom::Int(5), Atom::Int(1), Atom::Int(0)],
            vec![Atom::Int(6), Atom::Int(7), Atom::Int(0)],
            vec![Atom::Int(7), Atom::Int(8), Atom::Int(0)],
            vec![Atom::Int(20), Atom::Int(30), Atom::Int(1)],
            vec![Atom::Int(22), Atom::Int(32), Atom::Int(1)],
        ];
        let ds = Dataset::with_last_target("overlap", data).unwrap();

        let by_value = ClassStatistics::compute(&ds).unwrap();
        // The first row lost its `1`, so position 1 of class 0 only saw 7 and 8.
        assert_eq!(by_value.mean(0, 1), 7.5);

        let by_index = ClassStatistics::compute_with(&ds, FeatureSelection::InputColumns).unwrap();
        assert_eq!(by_index.mean(0, 1), (1.0 + 7.0 + 8.0) / 3.0);
        assert_eq!(by_index.mean(0, 0), 6.0);
    }

    #[test]
    fn float_feature_matching_integer_label_is_dropped() {
        let data = vec![
            vec![Atom::Float(1.0), Atom::Int(0)],
            vec![Atom::Float(4.0), Atom::Int(0)],
            vec![Atom::Float(6.0), Atom::Int(0)],
            vec![Atom::Float(10.0), Atom::Int(1)],
            vec![Atom::Float(12.0), Atom::Int(1)],
        ];
        let ds = Dataset::with_last_target("mixed-kinds", data).unwrap();

        // 1.0 equals the label 1, so only 4.0 and 6.0 remain for class 0.
        let stats = ClassStatistics::compute(&ds).unwrap();
        assert_eq!(stats.mean(0, 0), 5.0);
        assert_eq!(stats.mean(1, 0), 11.0);

        let by_index = ClassStatistics::compute_with(&ds, FeatureSelection::InputColumns).unwrap();
        assert_eq!(by_index.mean(0, 0), 11.0 / 3.0);
    }

    #[test]
    #[should_panic]
    fn out_of_range_class_panics() {
        let ds = Dataset::with_last_target("ab", rows(&[(1.0, "A"), (2.0, "A")])).unwrap();
        let stats = ClassStatistics::compute(&ds).unwrap();
        stats.mean(1, 0);
    }
}
