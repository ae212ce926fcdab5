#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;
mod error;

use error::Result;

#[derive(Parser)]
#[command(name = "spriteoutline", about = "Sprite render-data inspection tools")]
struct Cli {
	/// Log decoder decisions to stderr.
	#[arg(long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Evaluate the field-presence rules for one engine version.
	Predicates(cmd::predicates::Args),
	/// Decode a record and print its fields.
	Decode(cmd::decode::Args),
	/// Decode a record and print its outlines.
	Outline(cmd::outline::Args),
	/// Decode a record and print its texture references.
	Deps(cmd::deps::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();

	let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
	tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();

	match cli.command {
		Commands::Predicates(args) => cmd::predicates::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Outline(args) => cmd::outline::run(args),
		Commands::Deps(args) => cmd::deps::run(args),
	}
}
