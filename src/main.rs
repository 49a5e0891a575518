use std::path::PathBuf;

use anyhow::{anyhow, Result};
use mhi_ir::constants::envvars;
use mhi_ir::helpers::{init_logging, load_dotenv};
use mhi_ir::{argsets, command};

const CMD_VALIDATE: &str = "validate";
const CMD_BUILD: &str = "build";
const CMD_MODELS: &str = "models";

fn main() -> Result<()> {
    let dotenv_files = load_dotenv();
    init_logging();
    for file in dotenv_files {
        log::debug!("Loaded {file}");
    }

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_VALIDATE) => command::validate(argsets::ValidateArgs {
            config: args.free_from_str()?,
        }),
        Some(CMD_BUILD) => {
            let output: Option<PathBuf> = args
                .opt_value_from_str(["-o", "--output"])?
                .or_else(|| std::env::var_os(envvars::OUTPUT).map(PathBuf::from));
            command::build(argsets::BuildArgs {
                config: args.free_from_str()?,
                output,
            })
        }
        Some(CMD_MODELS) => command::models(),
        _ => Err(anyhow!(
            "Subcommand must be one of 'validate', 'build', 'models'"
        )),
    }
}
