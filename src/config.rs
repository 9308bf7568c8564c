//! Application configuration and constants

use std::path::PathBuf;
use std::time::Duration;

use crate::core::{Result, TagnetError};

// === Upstream ===
pub const DEFAULT_COLLECTION_ENDPOINT: &str =
	"https://collectionapi.metmuseum.org/public/collection/v1/objects";
pub const COLLECTION_ENDPOINT_ENV: &str = "TAGNET_COLLECTION_ENDPOINT";
pub const OBJECT_ENDPOINT_ENV: &str = "TAGNET_OBJECT_ENDPOINT";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// === Throttling ===
pub const DEFAULT_CALLS_PER_SECOND: f64 = 2.0;

// === Output ===
pub const DEFAULT_REPORT_FILE: &str = "report.txt";

/// Shape of the per-object result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
	/// Object id to raw term list
	Full,
	/// Flattened co-occurrence pairs
	Pairs,
}

/// Where a run writes its results. Every destination is optional.
#[derive(Debug, Clone, Default)]
pub struct Destinations {
	pub edges_csv: Option<PathBuf>,
	pub json: Option<PathBuf>,
	pub report: Option<PathBuf>,
	pub create_missing_dirs: bool,
}

impl Destinations {
	pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
		[&self.edges_csv, &self.json, &self.report]
			.into_iter()
			.flatten()
	}
}

/// Everything a collection run needs
#[derive(Debug, Clone)]
pub struct CollectConfig {
	pub collection_endpoint: String,
	pub collection_params: Vec<(String, String)>,
	pub object_endpoint: Option<String>,
	pub destinations: Destinations,
	pub shape: ResultShape,
	pub limit: Option<usize>,
	pub calls_per_second: f64,
	pub timeout: Duration,
	pub verbose: bool,
}

impl CollectConfig {
	pub fn new(shape: ResultShape) -> Self {
		Self {
			collection_endpoint: collection_endpoint(None),
			collection_params: Vec::new(),
			object_endpoint: object_endpoint(None),
			destinations: Destinations::default(),
			shape,
			limit: None,
			calls_per_second: DEFAULT_CALLS_PER_SECOND,
			timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
			verbose: false,
		}
	}

	/// Check preconditions that must hold before any request is made.
	///
	/// Returns the object endpoint, which is required.
	pub fn validate(&self) -> Result<&str> {
		if self.collection_endpoint.trim().is_empty() {
			return Err(TagnetError::Config("collection endpoint must be provided".into()));
		}
		if !self.calls_per_second.is_finite() || self.calls_per_second <= 0.0 {
			return Err(TagnetError::Config(format!(
				"calls per second must be a positive number, got {}",
				self.calls_per_second
			)));
		}
		match self.object_endpoint.as_deref().map(str::trim) {
			Some(endpoint) if !endpoint.is_empty() => Ok(endpoint),
			_ => Err(TagnetError::Config("object endpoint must be provided".into())),
		}
	}
}

/// Collection endpoint: explicit value, then TAGNET_COLLECTION_ENDPOINT, then the Met default
pub fn collection_endpoint(explicit: Option<String>) -> String {
	if let Some(url) = explicit {
		return url;
	}
	if let Ok(url) = std::env::var(COLLECTION_ENDPOINT_ENV) {
		crate::ui::debug(&format!("Using {}: {}", COLLECTION_ENDPOINT_ENV, url));
		return url;
	}
	DEFAULT_COLLECTION_ENDPOINT.to_string()
}

/// Object endpoint: explicit value, then TAGNET_OBJECT_ENDPOINT. No default.
pub fn object_endpoint(explicit: Option<String>) -> Option<String> {
	explicit.or_else(|| {
		let url = std::env::var(OBJECT_ENDPOINT_ENV).ok()?;
		crate::ui::debug(&format!("Using {}: {}", OBJECT_ENDPOINT_ENV, url));
		Some(url)
	})
}
