//! Pagecraft command-line renderer

use clap::Parser;
use colored::Colorize;
use pagecraft_cli::{Cli, init_tracing, run};
use std::process;

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	if let Err(e) = run(cli) {
		eprintln!("{}: {:#}", "Error".red(), e);
		process::exit(1);
	}
}
