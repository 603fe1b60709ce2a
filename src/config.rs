//! Settings of the `fit-linear` harness and their command line form.

use ndarray_rand::rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing value for {flag}")]
    MissingValue { flag: String },

    #[error("Invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Train(TrainConfig),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub hidden_layers: Vec<usize>,
    /// Number of points of `1 - x` to train on.
    pub samples: usize,
    /// Number of evenly spaced inputs reported after training.
    pub probes: usize,
    pub seed: Option<u64>,
    pub strict: bool,
    pub shuffle: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            epochs: 50,
            learning_rate: 0.1,
            hidden_layers: vec![3],
            samples: 10,
            probes: 5,
            seed: None,
            strict: false,
            shuffle: true,
        }
    }
}

impl TrainConfig {
    /// Parse arguments, program name excluded.
    pub fn from_args<I, S>(args: I) -> Result<Invocation, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--epochs" | "-e" => config.epochs = parse_value(&flag, args.next())?,
                "--lr" => config.learning_rate = parse_value(&flag, args.next())?,
                "--hidden" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue {
                        flag: flag.clone(),
                    })?;
                    config.hidden_layers = value
                        .split(',')
                        .map(|size| parse_value(&flag, Some(size.trim().to_string())))
                        .collect::<Result<_, _>>()?;
                }
                "--samples" => config.samples = parse_value(&flag, args.next())?,
                "--probes" => config.probes = parse_value(&flag, args.next())?,
                "--seed" => config.seed = Some(parse_value(&flag, args.next())?),
                "--strict" => config.strict = true,
                "--no-shuffle" => config.shuffle = false,
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => return Err(ConfigError::UnknownArgument(flag)),
            }
        }

        Ok(Invocation::Train(config))
    }

    /// Random source for weight initialisation and shuffling.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue {
        flag: flag.to_string(),
    })?;
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

pub const USAGE: &str = "\
Usage: fit-linear [OPTIONS]

Fits 1 - x with a sigmoid multilayer perceptron.

Options:
  -e, --epochs <N>     Training epochs [default: 50]
      --lr <RATE>      Learning rate [default: 0.1]
      --hidden <SIZES> Comma separated hidden layer sizes [default: 3]
      --samples <N>    Training points [default: 10]
      --probes <N>     Inputs reported after training [default: 5]
      --seed <SEED>    Seed for weights and shuffling
      --strict         Reject out-of-order network calls
      --no-shuffle     Keep the dataset in ascending order
  -h, --help           Print this help";
