//! tagnet - museum collection tag co-occurrence networks
//!
//! Fetches tag terms for the objects of a collection API, dumps them raw or
//! as weighted co-occurrence edges, and rebuilds edges from saved dumps.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use tagnet::cli::{Cli, Command};
use tagnet::commands;
use tagnet::config::{Destinations, ResultShape};
use tagnet::ui::{self, Log};

fn main() {
	let cli = Cli::parse();
	Log::set_verbose(cli.verbose);

	if let Err(e) = run(cli) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> Result<()> {
	match cli.command {
		Command::Raw { fetch, json } => {
			print_header();
			let config = fetch.into_config(ResultShape::Full, None, json, cli.verbose);
			commands::collect::run(&config)?;
			Ok(())
		}
		Command::Pairs { fetch, csv, json } => {
			print_header();
			let config = fetch.into_config(ResultShape::Pairs, csv, json, cli.verbose);
			commands::collect::run(&config)?;
			Ok(())
		}
		Command::Derive { input, csv, report, create_dirs } => {
			print_header();
			let destinations = Destinations {
				edges_csv: Some(csv),
				json: None,
				report,
				create_missing_dirs: create_dirs,
			};
			commands::derive::run(&input, &destinations)?;
			Ok(())
		}
		Command::Help { subcommand } => print_help(subcommand),
	}
}

fn print_help(subcommand: Option<String>) -> Result<()> {
	let mut cmd = Cli::command();
	if let Some(sub) = subcommand {
		if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
			sub_cmd.print_help()?;
			return Ok(());
		}
		eprintln!("Unknown subcommand: {}", sub);
	}
	cmd.print_help()?;
	Ok(())
}

fn print_header() {
	println!();
	println!(
		"{}",
		format!("─── tagnet v{} ───", env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
}
