//! Derive command - edge table from a raw term dump

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Destinations;
use crate::core::WeightedEdge;
use crate::storage::{self, Report};
use crate::ui;

pub fn run(input: &Path, destinations: &Destinations) -> Result<Vec<WeightedEdge>> {
    storage::validate_paths(destinations.paths(), destinations.create_missing_dirs)?;

    ui::info(&format!("Reading: {}", input.display()));
    let raw = storage::load_raw(input)
        .with_context(|| format!("Failed to read raw terms from {}", input.display()))?;

    let edges = storage::derive_pairs_from_raw(&raw);
    let pair_count: u32 = edges.iter().map(|e| e.weight).sum();
    ui::info(&format!(
        "{} objects, {} pairs, {} distinct edges",
        raw.len(),
        pair_count,
        edges.len()
    ));

    if let Some(path) = &destinations.edges_csv {
        if storage::save_edges(&edges, path)? {
            ui::success(&format!("Saved {} edges to {}", edges.len(), path.display()));
        } else {
            ui::warn("No pairs found, edge table not written");
        }
    }

    if let Some(path) = &destinations.report {
        let report = Report {
            total: raw.len(),
            produced: pair_count as usize,
            produced_label: "Pairs",
            failed: 0,
        };
        storage::save_report(&report, path)?;
        ui::success(&format!("Saved report to {}", path.display()));
    }

    Ok(edges)
}
