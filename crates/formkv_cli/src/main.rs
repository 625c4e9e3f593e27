#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "formkv", about = "Flatten JSON documents into form key/value pairs")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Encode(cmd::encode::Args),
}

fn main() {
	cmd::util::init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> formkv::form::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Encode(args) => cmd::encode::run(args),
	}
}
