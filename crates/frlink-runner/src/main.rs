use std::process::ExitCode;

use clap::Parser;
use frlink_runner::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match frlink_runner::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
