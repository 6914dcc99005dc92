use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "applicant", version, about = "Job application form in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Fill in the form interactively (default)
    Run,
    /// Validate a JSON file of field values without starting the TUI
    Check {
        /// Path to a JSON object of field values, or `-` for stdin
        input: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
