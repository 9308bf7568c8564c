use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{
	collection_endpoint, object_endpoint, CollectConfig, Destinations, ResultShape, DEFAULT_CALLS_PER_SECOND,
	DEFAULT_REPORT_FILE,
};

fn parse_param(s: &str) -> Result<(String, String), String> {
	let (key, value) = s
		.split_once('=')
		.ok_or_else(|| format!("'{}' is not a key=value pair", s))?;
	if key.is_empty() {
		return Err(format!("'{}' has an empty key", s));
	}
	Ok((key.to_string(), value.to_string()))
}

fn parse_rate(s: &str) -> Result<f64, String> {
	let val: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if !val.is_finite() || val <= 0.0 {
		Err(format!("rate must be greater than 0, got {}", val))
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	let blue = Some(Color::Ansi(AnsiColor::Blue));
	Styles::styled()
		.header(Style::new().bold().fg_color(blue))
		.usage(Style::new().bold().fg_color(blue))
		.literal(Style::new().fg_color(blue))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(blue))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "tagnet",
	author,
	version,
	about = "Museum collection tag co-occurrence networks",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {tagnet} {raw}     {raw_args}   {raw_desc}
  {tagnet} {pairs}   {pairs_args}   {pairs_desc}
  {tagnet} {derive}  {derive_args}   {derive_desc}
  {tagnet} {help}    {help_args}                     {help_desc}",
		title = "Examples:".bright_blue().bold(),
		tagnet = "tagnet".bright_blue(),
		raw = "raw".yellow(),
		raw_args = "-p departmentIds=17 --json data/raw/tags.json --report",
		raw_desc = "Dump raw terms".dimmed(),
		pairs = "pairs".yellow(),
		pairs_args = "-p departmentIds=17 -n 30 --csv data/pairs.csv   ",
		pairs_desc = "Weighted term pairs".dimmed(),
		derive = "derive".yellow(),
		derive_args = "-i data/raw/tags.json --csv data/pairs.csv         ",
		derive_desc = "Pairs from a raw dump".dimmed(),
		help = "help".yellow(),
		help_args = "pairs",
		help_desc = "Show help for pairs".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose output (per-object terms and failures)
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

/// Where and how to fetch, shared by `raw` and `pairs`
#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
	/// Collection listing endpoint [env: TAGNET_COLLECTION_ENDPOINT, default: Met objects API]
	#[arg(short = 'c', long = "collection", value_name = "URL")]
	pub collection: Option<String>,

	/// Per-object endpoint; the object id is appended as a path segment [env: TAGNET_OBJECT_ENDPOINT]
	#[arg(short = 'o', long = "object-endpoint", value_name = "URL")]
	pub object_endpoint: Option<String>,

	/// Collection query parameter (repeatable, e.g. departmentIds=17)
	#[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
	pub params: Vec<(String, String)>,

	/// Only process the first N object ids (0 means no cap)
	#[arg(short = 'n', long = "limit")]
	pub limit: Option<usize>,

	/// Maximum requests per second
	#[arg(long = "rate", default_value_t = DEFAULT_CALLS_PER_SECOND, value_parser = parse_rate)]
	pub rate: f64,

	/// Write the three-line report (default path: report.txt)
	#[arg(long = "report", value_name = "PATH", num_args = 0..=1, default_missing_value = DEFAULT_REPORT_FILE)]
	pub report: Option<PathBuf>,

	/// Create missing output directories instead of failing
	#[arg(long = "create-dirs")]
	pub create_dirs: bool,
}

impl FetchArgs {
	pub fn into_config(self, shape: ResultShape, edges_csv: Option<PathBuf>, json: Option<PathBuf>, verbose: bool) -> CollectConfig {
		let mut config = CollectConfig::new(shape);
		config.collection_endpoint = collection_endpoint(self.collection);
		config.object_endpoint = object_endpoint(self.object_endpoint);
		config.collection_params = self.params;
		config.limit = self.limit;
		config.calls_per_second = self.rate;
		config.verbose = verbose;
		config.destinations = Destinations {
			edges_csv,
			json,
			report: self.report,
			create_missing_dirs: self.create_dirs,
		};
		config
	}
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Fetch each object's raw term list and dump it as JSON
	Raw {
		#[command(flatten)]
		fetch: FetchArgs,

		/// JSON file for the object id -> terms mapping
		#[arg(short = 'j', long = "json", value_name = "PATH")]
		json: Option<PathBuf>,
	},

	/// Fetch term pairs and write a weighted edge table
	Pairs {
		#[command(flatten)]
		fetch: FetchArgs,

		/// CSV edge table (Source,Target,Weight)
		#[arg(long = "csv", value_name = "PATH")]
		csv: Option<PathBuf>,

		/// JSON file for the unaggregated pair list
		#[arg(short = 'j', long = "json", value_name = "PATH")]
		json: Option<PathBuf>,
	},

	/// Build the weighted edge table from a raw term dump (no network)
	Derive {
		/// Raw term dump written by `tagnet raw`
		#[arg(short = 'i', long = "input", value_name = "PATH")]
		input: PathBuf,

		/// CSV edge table (Source,Target,Weight)
		#[arg(long = "csv", value_name = "PATH")]
		csv: PathBuf,

		/// Write the three-line report (default path: report.txt)
		#[arg(long = "report", value_name = "PATH", num_args = 0..=1, default_missing_value = DEFAULT_REPORT_FILE)]
		report: Option<PathBuf>,

		/// Create missing output directories instead of failing
		#[arg(long = "create-dirs")]
		create_dirs: bool,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
