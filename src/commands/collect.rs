//! Raw and pairs commands - fetch tag terms for a collection

use anyhow::{Context, Result};
use std::time::Instant;

use crate::api::{get_object_ids, ApiClient, ObjectApi, RateLimiter};
use crate::config::{CollectConfig, ResultShape};
use crate::processing::{run_batch, BatchOutcome};
use crate::storage;
use crate::ui;

/// Fetch terms for every listed object and write the configured outputs.
///
/// Configuration and destination problems fail before the first request.
/// Returns `None` when the collection lists no objects.
pub fn run(config: &CollectConfig) -> Result<Option<BatchOutcome>> {
    let object_endpoint = config.validate()?;
    storage::validate_paths(config.destinations.paths(), config.destinations.create_missing_dirs)?;

    let mut rate_limiter = RateLimiter::new(config.calls_per_second)?;
    let client = ApiClient::new(config.timeout)?;

    ui::info(&format!("Listing objects: {}", config.collection_endpoint));
    let object_ids = get_object_ids(
        &client,
        &config.collection_endpoint,
        &config.collection_params,
        config.limit,
    )
    .context("Failed to list collection objects")?;

    if object_ids.is_empty() {
        ui::warn("Collection lists no objects");
        return Ok(None);
    }

    let mode = match config.shape {
        ResultShape::Full => "terms",
        ResultShape::Pairs => "term pairs",
    };
    ui::info(&format!(
        "Fetching {} for {} objects ({} calls/s)",
        mode,
        object_ids.len(),
        rate_limiter.limit()
    ));

    let start = Instant::now();
    let source = ObjectApi::new(&client, object_endpoint);
    let outcome = run_batch(&object_ids, &source, &mut rate_limiter, config.shape, config.verbose);

    ui::summary(
        outcome.total,
        outcome.result.produced(),
        outcome.result.produced_label(),
        outcome.failed,
        start.elapsed().as_secs_f32(),
    );

    storage::aggregate_and_save(&outcome, &config.destinations).context("Failed to save results")?;

    if outcome.failed > 0 {
        ui::warn(&format!(
            "{} of {} objects failed",
            outcome.failed, outcome.total
        ));
    } else {
        ui::success(&format!("All {} objects processed", outcome.total));
    }

    Ok(Some(outcome))
}
