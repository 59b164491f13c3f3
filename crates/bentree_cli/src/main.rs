#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "bentree", about = "Bencode decoding and inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode bencode and print it as one line of JSON.
	Decode(cmd::decode::Args),
	/// Print summary statistics for bencode input.
	Inspect(cmd::inspect::Args),
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {}: {err}", err.kind().as_str());
		std::process::exit(1);
	}
}

fn run() -> bentree::bencode::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Inspect(args) => cmd::inspect::run(args),
	}
}

fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
