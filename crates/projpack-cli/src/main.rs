//! Projpack CLI - package a project directory into a ZIP archive,
//! excluding build artifacts, VCS metadata, and OS cruft.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    if let Err(error) = commands::pack::execute(&cli, &*formatter) {
        formatter.format_error(&error);
        std::process::exit(1);
    }
}
