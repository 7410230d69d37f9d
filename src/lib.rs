pub mod atom;
pub mod bayes;
pub mod config;
pub mod dataset;
pub mod distribution;
pub mod error;
pub mod io;
pub mod logging;
pub mod stats;

pub use atom::Atom;
pub use bayes::{error_rate, gaussian, Classifier, ContinuousNaiveBayes, DiscreteNaiveBayes};
pub use dataset::Dataset;
pub use distribution::EmpiricalDistribution;
pub use error::{BayesError, Result};
pub use stats::{ClassStatistics, FeatureSelection};
