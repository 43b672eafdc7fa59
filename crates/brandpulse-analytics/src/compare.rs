//! Per-model partitioning of analysis records.

use std::collections::{BTreeMap, HashMap};

use brandpulse_core::{ModelKey, ResponseText};

use crate::metrics::aggregate;
use crate::types::{AnalysisRecord, PerformanceMetrics};

/// Partition records by the (provider, model) pair that produced their
/// response and aggregate each partition independently.
///
/// Records whose `response_id` is absent from `responses` are skipped, so
/// the group sizes sum to at most `records.len()`.
#[must_use]
pub fn compare_by_model(
    records: &[AnalysisRecord],
    responses: &[ResponseText],
) -> BTreeMap<ModelKey, PerformanceMetrics> {
    let by_id: HashMap<&str, &ResponseText> =
        responses.iter().map(|r| (r.id.as_str(), r)).collect();

    let mut groups: BTreeMap<ModelKey, Vec<AnalysisRecord>> = BTreeMap::new();
    for record in records {
        let Some(response) = by_id.get(record.response_id.as_str()) else {
            tracing::debug!(
                response_id = %record.response_id,
                "no stored response for record; skipping in comparison"
            );
            continue;
        };
        groups
            .entry(ModelKey::of(response))
            .or_default()
            .push(record.clone());
    }

    groups
        .into_iter()
        .map(|(key, group)| {
            let metrics = aggregate(&group);
            (key, metrics)
        })
        .collect()
}
