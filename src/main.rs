use anyhow::Result;
use std::env;
use tracing::info;

use tabular_bayes::{
    bayes::{error_rate, Classifier, ContinuousNaiveBayes, DiscreteNaiveBayes},
    config::{Config, ModelKind},
    io, logging,
};

fn main() -> Result<()> {
    logging::init()?;
    let config = Config::from_args(env::args())?;

    let dataset = io::load_dataset(&config.train, config.target)?;
    info!("loaded {}", dataset);

    let mut classifier: Box<dyn Classifier + '_> = match config.model {
        ModelKind::Discrete => Box::new(DiscreteNaiveBayes::new(&dataset)),
        ModelKind::Continuous => Box::new(ContinuousNaiveBayes::with_selection(
            &dataset,
            config.selection,
        )),
    };
    classifier.train()?;

    let error = error_rate(classifier.as_ref(), dataset.examples())?;
    info!(model = ?config.model, error, "training error rate");

    if let Some((inpath, outpath)) = &config.predict {
        let predictions = io::predict_file(classifier.as_ref(), inpath, outpath)?;
        info!(count = predictions.len(), "wrote predictions to {}", outpath.display());
    }

    println!("Done");

    Ok(())
}
