use anyhow::{anyhow, bail, Context, Result};
use std::{path::PathBuf, str::FromStr};

use crate::stats::FeatureSelection;

pub const USAGE: &str = "usage: tabular-bayes <train.csv> <discrete|continuous> \
[--target N] [--index-features] [--predict <in.csv> <out.csv>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Discrete,
    Continuous,
}

impl FromStr for ModelKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "discrete" => Ok(ModelKind::Discrete),
            "continuous" => Ok(ModelKind::Continuous),
            other => Err(anyhow!("unknown model `{}`\n{}", other, USAGE)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub train: PathBuf,
    pub model: ModelKind,
    /// Target column; `None` means the last one.
    pub target: Option<usize>,
    pub selection: FeatureSelection,
    /// Input rows and output file for batch prediction.
    pub predict: Option<(PathBuf, PathBuf)>,
}

impl Config {
    /// Parses the program arguments, skipping the binary name.
    pub fn from_args<I: Iterator<Item = String>>(mut args: I) -> Result<Config> {
        args.next();

        let train: PathBuf = args.next().context(USAGE)?.into();
        let model = args.next().context(USAGE)?.parse::<ModelKind>()?;

        let mut config = Config {
            train,
            model,
            target: None,
            selection: FeatureSelection::LabelValues,
            predict: None,
        };

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--target" => {
                    let raw = args.next().context(USAGE)?;
                    let target = raw
                        .parse::<usize>()
                        .with_context(|| format!("invalid target column `{}`", raw))?;
                    config.target = Some(target);
                }
                "--index-features" => config.selection = FeatureSelection::InputColumns,
                "--predict" => {
                    let input = args.next().context(USAGE)?;
                    let output = args.next().context(USAGE)?;
                    config.predict = Some((input.into(), output.into()));
                }
                other => bail!("unexpected argument `{}`\n{}", other, USAGE),
            }
        }

        Ok(config)
    }
}
