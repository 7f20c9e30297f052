use std::process::ExitCode;

use clap::Parser;

use log::{debug, error};
use pwgen::{generator, params, utils::print};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Prints a random 32-character string made of letters, digits and punctuation
struct Cli {}

fn init_logger() {
    env_logger::builder().format_target(true).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let _args = Cli::parse();

    init_logger();

    debug!("generating string of length {}", params::DEFAULT_LENGTH);
    let value = generator::generate_string(params::DEFAULT_LENGTH)?;

    print::print_generated(&value)?;

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
