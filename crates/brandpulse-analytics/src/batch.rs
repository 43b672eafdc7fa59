//! Concurrent batch analysis with per-item failure isolation.

use std::future::Future;
use std::pin::Pin;

use brandpulse_core::{BrandEntity, ResponseText};
use futures::stream::{self, StreamExt};

use crate::analyzer::analyze_response;
use crate::error::AnalyticsError;
use crate::types::AnalysisRecord;

/// Analyze many responses concurrently.
///
/// One analysis task per response, at most `max_concurrent` in flight.
/// Enrichment is always off in batch mode to bound external-call volume.
/// A failing response is logged and excluded from the result; its siblings
/// are unaffected, so the returned length equals the number of responses
/// that analyzed successfully. Output order is completion order, not input
/// order — correlate by `response_id` when order matters. Dropping the
/// returned future cancels analyses that have not completed; finished
/// results are simply discarded with it.
pub async fn analyze_batch<'r>(
    owner: &'r BrandEntity,
    competitors: &'r [BrandEntity],
    responses: &'r [ResponseText],
    max_concurrent: usize,
) -> Vec<AnalysisRecord> {
    run_batch(responses, max_concurrent, |response| {
        Box::pin(analyze_response(owner, competitors, response, None))
    })
    .await
}

/// Shared fan-out skeleton: run `analyze` over every response, collect the
/// successes, log and count the failures.
pub(crate) async fn run_batch<'r, F>(
    responses: &'r [ResponseText],
    max_concurrent: usize,
    analyze: F,
) -> Vec<AnalysisRecord>
where
    F: Fn(&'r ResponseText) -> Pin<Box<dyn Future<Output = Result<AnalysisRecord, AnalyticsError>> + 'r>>,
{
    let total = responses.len();

    let results: Vec<(&ResponseText, Result<AnalysisRecord, AnalyticsError>)> =
        stream::iter(responses)
            .map(|response| {
                let fut = analyze(response);
                async move { (response, fut.await) }
            })
            .buffer_unordered(max_concurrent.max(1))
            .collect()
            .await;

    let mut records = Vec::with_capacity(results.len());
    let mut failed = 0usize;
    for (response, outcome) in results {
        match outcome {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::error!(
                    response_id = %response.id,
                    error = %e,
                    "analysis failed for response"
                );
                failed += 1;
            }
        }
    }

    if failed > 0 {
        tracing::warn!(failed, total, "some responses failed batch analysis");
    }

    records
}
