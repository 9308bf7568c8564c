//! Result files: weighted edge table, JSON dump, plain-text report

use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::Destinations;
use crate::core::{aggregate, Result, WeightedEdge};
use crate::processing::{BatchOutcome, BatchResult};
use crate::ui;

/// Three-line run report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
	pub total: usize,
	pub produced: usize,
	pub produced_label: &'static str,
	pub failed: usize,
}

impl Report {
	pub fn from_outcome(outcome: &BatchOutcome) -> Self {
		Self {
			total: outcome.total,
			produced: outcome.result.produced(),
			produced_label: outcome.result.produced_label(),
			failed: outcome.failed,
		}
	}
}

impl std::fmt::Display for Report {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "Total objects: {}", self.total)?;
		writeln!(f, "Total {}: {}", self.produced_label.to_lowercase(), self.produced)?;
		write!(f, "Failed objects: {}", self.failed)
	}
}

/// Write edges as `Source,Target,Weight` CSV.
///
/// Returns false without touching the filesystem when there are no edges.
pub fn save_edges(edges: &[WeightedEdge], path: &Path) -> Result<bool> {
	if edges.is_empty() {
		return Ok(false);
	}

	let mut writer = csv::Writer::from_path(path)?;
	for edge in edges {
		writer.serialize(edge)?;
	}
	writer.flush()?;
	Ok(true)
}

pub fn save_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
	let mut writer = BufWriter::new(fs::File::create(path)?);
	serde_json::to_writer(&mut writer, value)?;
	writer.flush()?;
	Ok(())
}

pub fn save_report(report: &Report, path: &Path) -> Result<()> {
	fs::write(path, report.to_string())?;
	Ok(())
}

/// Weight pairs into edges and write every configured destination.
///
/// Returns the edges of a pairs run (empty for raw runs).
pub fn aggregate_and_save(outcome: &BatchOutcome, destinations: &Destinations) -> Result<Vec<WeightedEdge>> {
	let edges = match &outcome.result {
		BatchResult::Pairs(pairs) => aggregate(pairs.iter().cloned()),
		BatchResult::Full(_) => Vec::new(),
	};

	if let Some(path) = &destinations.edges_csv {
		match &outcome.result {
			BatchResult::Pairs(_) => {
				if save_edges(&edges, path)? {
					ui::success(&format!("Saved {} edges to {}", edges.len(), path.display()));
				} else {
					ui::warn("No pairs collected, edge table not written");
				}
			}
			BatchResult::Full(_) => ui::debug("Edge table skipped for raw term run"),
		}
	}

	if let Some(path) = &destinations.json {
		match &outcome.result {
			BatchResult::Full(map) => save_json(map, path)?,
			BatchResult::Pairs(pairs) => save_json(pairs, path)?,
		}
		ui::success(&format!("Saved results to {}", path.display()));
	}

	if let Some(path) = &destinations.report {
		save_report(&Report::from_outcome(outcome), path)?;
		ui::success(&format!("Saved report to {}", path.display()));
	}

	Ok(edges)
}
