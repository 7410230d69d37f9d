use std::{collections::HashSet, fmt};

use crate::{
    atom::Atom,
    error::{BayesError, Result},
};

/// An immutable table of examples with one column designated as the target.
///
/// `values[a]` holds the distinct values of column `a` in the order they first
/// appear, which fixes the iteration order of labels and therefore the
/// tie-break of every classifier built on this dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    examples: Vec<Vec<Atom>>,
    attrs: Vec<usize>,
    target: usize,
    inputs: Vec<usize>,
    values: Vec<Vec<Atom>>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, examples: Vec<Vec<Atom>>, target: usize) -> Result<Self> {
        let width = examples.first().ok_or(BayesError::EmptyDataset)?.len();

        for (row, example) in examples.iter().enumerate() {
            if example.len() != width {
                return Err(BayesError::RaggedRow {
                    row,
                    expected: width,
                    got: example.len(),
                });
            }
        }

        if target >= width {
            return Err(BayesError::TargetOutOfRange { target, width });
        }

        let attrs: Vec<usize> = (0..width).collect();
        let inputs = attrs.iter().copied().filter(|&a| a != target).collect();
        let values = attrs
            .iter()
            .map(|&a| unique(examples.iter().map(|example| &example[a])))
            .collect();

        Ok(Dataset {
            name: name.into(),
            examples,
            attrs,
            target,
            inputs,
            values,
        })
    }

    /// Builds a dataset whose last column is the target.
    pub fn with_last_target(name: impl Into<String>, examples: Vec<Vec<Atom>>) -> Result<Self> {
        let width = examples.first().ok_or(BayesError::EmptyDataset)?.len();
        if width == 0 {
            return Err(BayesError::TargetOutOfRange { target: 0, width });
        }
        Self::new(name, examples, width - 1)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn examples(&self) -> &[Vec<Atom>] {
        &self.examples
    }

    pub fn attrs(&self) -> &[usize] {
        &self.attrs
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Every attribute but the target, in column order.
    pub fn inputs(&self) -> &[usize] {
        &self.inputs
    }

    /// Distinct values of column `attr`, in first-seen order.
    ///
    /// # Panics
    ///
    /// Panics if `attr` is not one of `attrs()`.
    pub fn values(&self, attr: usize) -> &[Atom] {
        &self.values[attr]
    }

    /// The label domain.
    pub fn target_values(&self) -> &[Atom] {
        &self.values[self.target]
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<DataSet({}): {} examples, {} attributes>",
            self.name,
            self.examples.len(),
            self.attrs.len()
        )
    }
}

// Deduplicate, keeping first-seen order.
fn unique<'a>(column: impl Iterator<Item = &'a Atom>) -> Vec<Atom> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in column {
        if seen.insert(value) {
            out.push(value.clone());
        }
    }
    out
}
