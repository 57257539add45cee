use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(name = "tabula")]
#[command(about = "Compile and check resource view column definitions")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(long, short, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// Compile column specifications and print one JSON descriptor per line
	Compile {
		/// Specifications such as `AGE:.metadata.creationTimestamp|T`
		#[arg(required = true)]
		specs: Vec<String>,
	},
	/// Compile every column of a views file and report problems
	Check {
		/// Views file (TOML)
		file: PathBuf,

		/// Only check this view
		#[arg(long)]
		view: Option<String>,
	},
}
