use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qrdoc_cli::{
    commands::{issue::IssueCmd, keygen::KeygenCmd, verify::VerifyCmd, watch::WatchCmd},
    logger::setup_logger,
};

#[derive(Parser)]
#[command(name = "qrdoc", version, about = "Verify and issue signed document QR codes.")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Verify(VerifyCmd),
    Watch(WatchCmd),
    Keygen(KeygenCmd),
    Issue(IssueCmd),
}

fn main() -> Result<ExitCode> {
    setup_logger();
    let cli = Cli::parse();
    match cli.command {
        Command::Verify(cmd) => {
            let valid = cmd.run()?;
            Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Watch(cmd) => cmd.run().map(|_| ExitCode::SUCCESS),
        Command::Keygen(cmd) => cmd.run().map(|_| ExitCode::SUCCESS),
        Command::Issue(cmd) => cmd.run().map(|_| ExitCode::SUCCESS),
    }
}
