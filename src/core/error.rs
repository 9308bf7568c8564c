//! Error kinds for collection runs

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TagnetError>;

#[derive(Debug, Error)]
pub enum TagnetError {
	/// Request could not be sent or the server answered with a non-success status
	#[error("HTTP request failed: {0}")]
	Transport(String),

	/// Response body was not valid JSON
	#[error("Failed to decode JSON response: {0}")]
	Decode(String),

	/// Response parsed but lacks the expected fields
	#[error("Unexpected response shape: {0}")]
	Schema(String),

	#[error("Directory {} does not exist", .0.display())]
	Path(PathBuf),

	#[error("Invalid configuration: {0}")]
	Config(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),
}

/// Why a single object produced nothing
#[derive(Debug)]
pub enum FetchFailure {
	Request(TagnetError),
	NoTerms,
}

impl std::fmt::Display for FetchFailure {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Request(e) => write!(f, "{}", e),
			Self::NoTerms => write!(f, "no terms"),
		}
	}
}

impl From<TagnetError> for FetchFailure {
	fn from(e: TagnetError) -> Self {
		Self::Request(e)
	}
}
