mod action;
mod app;
mod check;
mod cli;
mod components;
mod config;
mod errors;
mod logging;
mod state;
mod tui;

use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;

use crate::app::App;
use crate::cli::{Cli, Cmd};
use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    crate::errors::init()?;
    let args = Cli::parse();
    let config = Config::new()?;
    // Keep the guard alive so buffered log lines are flushed on exit.
    let _log_guard = crate::logging::init(&config)?;

    match args.cmd.unwrap_or(Cmd::Run) {
        Cmd::Run => {
            let mut app = App::new(config);
            app.run().await?;
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Check { input, json } => {
            let accepted = crate::check::run(&input, json)?;
            Ok(if accepted {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
