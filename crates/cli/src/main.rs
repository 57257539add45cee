//! `tabula` binary.
//!
//! - `tabula compile <SPEC>...` prints each compiled descriptor as JSON.
//! - `tabula check <FILE>` compiles every view of a views file and reports
//!   per-entry errors and warnings.

mod cli;
mod report;

use std::path::Path;

use anyhow::{Context, bail};
use clap::Parser;
use cli::{Cli, Command};
use tabula_columns::{ColumnDescriptor, ViewsConfig};
use tracing::debug;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	match cli.command {
		Command::Compile { specs } => compile(&specs),
		Command::Check { file, view } => check(&file, view.as_deref()),
	}
}

fn compile(specs: &[String]) -> anyhow::Result<()> {
	let mut failed = 0;
	for spec in specs {
		match ColumnDescriptor::compile_with_warnings(spec) {
			Ok(compiled) => {
				for warning in &compiled.warnings {
					eprintln!("warning: {warning}");
				}
				println!("{}", serde_json::to_string(&compiled.descriptor)?);
			}
			Err(e) => {
				eprintln!("error: {e}");
				failed += 1;
			}
		}
	}

	if failed > 0 {
		bail!("{failed} of {} column definition(s) failed to compile", specs.len());
	}
	Ok(())
}

fn check(file: &Path, view: Option<&str>) -> anyhow::Result<()> {
	let config = ViewsConfig::load(file).with_context(|| format!("failed to load {}", file.display()))?;
	debug!(path = %file.display(), views = config.views.len(), "Loaded views file");

	let views = match view {
		Some(name) => vec![
			config
				.compile_view(name)
				.with_context(|| format!("view {name:?} is not defined in {}", file.display()))?,
		],
		None => config.compile_all(),
	};

	let mut failed = 0;
	for view in &views {
		print!("{}", report::render_view(view));
		failed += view.errors.len();
	}

	if failed > 0 {
		bail!("{failed} column definition(s) failed to compile");
	}
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	// Flag warnings are already printed; the log only repeats them when asked.
	let filter = EnvFilter::try_from_env("TABULA_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("tabula=debug,info")
		} else {
			EnvFilter::new("error")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(verbose)
		.init();
}
