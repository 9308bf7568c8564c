//! Rate-limited, per-object fetch loop

use crate::api::{RateLimiter, TermSource};
use crate::config::ResultShape;
use crate::core::{FetchFailure, ObjectId, TermMap, TermPair};
use crate::ui;

/// Accumulated terms of the objects that succeeded
#[derive(Debug, Clone, PartialEq)]
pub enum BatchResult {
    Full(TermMap),
    Pairs(Vec<TermPair>),
}

impl BatchResult {
    fn empty(shape: ResultShape) -> Self {
        match shape {
            ResultShape::Full => Self::Full(TermMap::new()),
            ResultShape::Pairs => Self::Pairs(Vec::new()),
        }
    }

    /// Fetch one object in this result's shape and record it, returning a
    /// short description for the verbose log.
    ///
    /// A raw-mode object without terms has nothing to record and fails; in
    /// pairs mode fewer than two terms is simply zero pairs.
    fn absorb<S: TermSource + ?Sized>(&mut self, source: &S, id: &ObjectId) -> Result<String, FetchFailure> {
        match self {
            Self::Full(map) => {
                let terms = source.fetch_terms(id)?;
                if terms.is_empty() {
                    return Err(FetchFailure::NoTerms);
                }
                let described = format!("{:?}", terms);
                map.insert(id.clone(), terms);
                Ok(described)
            }
            Self::Pairs(all) => {
                let pairs = source.get_pairs(id)?;
                let described = format!("{} pairs", pairs.len());
                all.extend(pairs);
                Ok(described)
            }
        }
    }

    /// Terms (raw mode) or pairs (pairs mode) collected
    pub fn produced(&self) -> usize {
        match self {
            Self::Full(map) => map.term_count(),
            Self::Pairs(pairs) => pairs.len(),
        }
    }

    pub fn produced_label(&self) -> &'static str {
        match self {
            Self::Full(_) => "Terms",
            Self::Pairs(_) => "Pairs",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub result: BatchResult,
    pub total: usize,
    pub failed: usize,
}

impl BatchOutcome {
    pub fn succeeded(&self) -> usize {
        self.total - self.failed
    }
}

/// Fetch every object in order, one rate-limited call each.
///
/// A failing object is counted and skipped; the batch always completes.
pub fn run_batch<S: TermSource + ?Sized>(
    object_ids: &[ObjectId],
    source: &S,
    rate_limiter: &mut RateLimiter,
    shape: ResultShape,
    verbose: bool,
) -> BatchOutcome {
    let total = object_ids.len();
    let mut result = BatchResult::empty(shape);
    let mut failed = 0;

    for (index, id) in object_ids.iter().enumerate() {
        rate_limiter.wait_if_necessary();

        match result.absorb(source, id) {
            Ok(described) => {
                if verbose {
                    ui::info(&format!("{} {}: {}", ui::queue(index, total), id, described));
                }
            }
            Err(e) => {
                if verbose {
                    ui::warn(&format!("{} Failed to process {}: {}", ui::queue(index, total), id, e));
                }
                failed += 1;
            }
        }
    }

    BatchOutcome { result, total, failed }
}
