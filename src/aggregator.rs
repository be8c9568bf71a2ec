//! Director aggregation over fixed-size batches of the movie stream

use crate::types::MovieRecord;
use std::collections::{BTreeSet, HashMap};

/// Aggregates the movie stream into the set of qualifying directors
///
/// Records are consumed in arrival order and partitioned into fixed-size
/// batches; occurrences are counted *within each batch only*, and a director
/// qualifies when some batch-local count is strictly greater than the
/// threshold. Because pages arrive concurrently, batch membership is not
/// deterministic across runs: a director whose catalog-wide count exceeds
/// the threshold can be excluded when no single batch holds enough of their
/// movies, and the converse also holds. This per-batch behavior is
/// externally observable and is preserved as-is.
pub struct DirectorAggregator {
    batch_size: usize,
}

impl DirectorAggregator {
    /// Create an aggregator with the given batch ("processing window") size
    ///
    /// A size of zero is treated as one.
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    /// Compute the sorted, distinct director names qualifying at `threshold`
    ///
    /// Records without a director are discarded before batching. An empty
    /// input, or one where no director qualifies in any batch, yields an
    /// empty (not absent) result.
    pub fn qualifying_directors(&self, records: &[MovieRecord], threshold: u32) -> Vec<String> {
        let directed: Vec<&str> = records
            .iter()
            .filter_map(|record| record.director.as_deref())
            .collect();

        let mut qualifying = BTreeSet::new();

        for batch in directed.chunks(self.batch_size) {
            let mut counts: HashMap<&str, u32> = HashMap::new();
            for director in batch {
                *counts.entry(director).or_insert(0) += 1;
            }

            for (director, count) in counts {
                if count > threshold {
                    tracing::debug!(director, count, threshold, "director qualified in batch");
                    qualifying.insert(director.to_string());
                }
            }
        }

        qualifying.into_iter().collect()
    }
}
