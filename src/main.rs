use std::env;

use anyhow::Result;
use log::info;
use perceptron::{
    config::{Invocation, TrainConfig, USAGE},
    data::{probe_inputs, Dataset},
    trainer::{probe, Trainer},
    Network,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match TrainConfig::from_args(env::args().skip(1))? {
        Invocation::Train(config) => config,
        Invocation::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
    };
    info!("{:?}", config);

    let mut rng = config.rng();
    let mut network = Network::new(1, &config.hidden_layers, 1, &mut rng)?;
    if config.strict {
        network = network.strict();
    }

    let mut dataset = Dataset::linear(config.samples);
    if config.shuffle {
        dataset.shuffle(&mut rng);
    }

    Trainer::new(config.learning_rate, config.epochs).train(&mut network, &dataset)?;

    println!("Training complete!");
    println!("=====");
    for (input, output) in probe(&mut network, &probe_inputs(config.probes))? {
        println!("{:.4} -> {:.4}", input, output[0]);
    }

    Ok(())
}
