use anyhow::{Context, Result};
use std::{fs::File, io::Read, path::Path};

use crate::{atom::Atom, bayes::Classifier, dataset::Dataset};

/// Reads header-less CSV rows, converting each cell with [`Atom::parse`].
/// Blank lines are skipped.
pub fn read_examples<R: Read>(input: R) -> Result<Vec<Vec<Atom>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut examples = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to read csv record {}", i + 1))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        examples.push(record.iter().map(Atom::parse).collect());
    }

    Ok(examples)
}

/// Loads a dataset from a CSV file. The target defaults to the last column.
pub fn load_dataset<P: AsRef<Path>>(path: P, target: Option<usize>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let examples =
        read_examples(file).with_context(|| format!("failed to parse {}", path.display()))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let dataset = match target {
        Some(target) => Dataset::new(name, examples, target),
        None => Dataset::with_last_target(name, examples),
    }
    .with_context(|| format!("invalid dataset in {}", path.display()))?;

    Ok(dataset)
}

pub fn write_predictions<P: AsRef<Path>>(path: P, predictions: &[Atom]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(["ID", "Label"])?;
    for (i, label) in predictions.iter().enumerate() {
        writer.write_record(&[(i + 1).to_string(), label.to_string()])?;
    }
    writer.flush()?;

    Ok(())
}

/// Predicts every row of `inpath` and writes the labels to `outpath`.
pub fn predict_file<C, P, Q>(classifier: &C, inpath: P, outpath: Q) -> Result<Vec<Atom>>
where
    C: Classifier + ?Sized,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let inpath = inpath.as_ref();
    let file =
        File::open(inpath).with_context(|| format!("failed to open {}", inpath.display()))?;

    let mut results = Vec::new();
    for (i, example) in read_examples(file)?.iter().enumerate() {
        let label = classifier
            .predict(example)
            .with_context(|| format!("failed to predict row {} of {}", i + 1, inpath.display()))?;
        results.push(label);
    }

    write_predictions(outpath, &results)?;
    Ok(results)
}
