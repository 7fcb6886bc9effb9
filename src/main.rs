// src/main.rs

use std::process::ExitCode;

use watchrun::engine::TerminationCause;
use watchrun::{cli, logging, run, Exit};

#[tokio::main]
async fn main() -> ExitCode {
    match run_main().await {
        Ok(exit) if exit.is_failure() => {
            if let Exit::Terminated(TerminationCause::Aborted(err)) = &exit {
                eprintln!("watchrun: aborting after failed run: {err}");
            }
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("watchrun error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run_main() -> anyhow::Result<Exit> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    Ok(run(args).await?)
}
