use std::path::PathBuf;

use clap::Subcommand;
use courier_estimator::config::EstimatorConfig;

use crate::file_utils::write_json;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// Write the default estimator config, ready to be edited
    Config {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
    /// Write the JSON schema of the estimator config
    JsonSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::Config { out } => {
            write_json(&out, &EstimatorConfig::default())?;
        }
        GenerateSubcommands::JsonSchema { out } => {
            let schema = schemars::schema_for!(EstimatorConfig);
            write_json(&out, &schema)?;
        }
    }

    Ok(())
}
