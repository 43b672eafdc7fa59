//! Per-response analysis orchestration.

use std::collections::BTreeMap;

use brandpulse_core::{BrandEntity, ResponseText};

use crate::enrich::{run_enrichment, ModelAccess};
use crate::error::AnalyticsError;
use crate::matcher::find_mentions;
use crate::normalize::normalize_brand_name;
use crate::types::{AnalysisRecord, MentionEvidence};

/// Analyze one response for owner and competitor mentions.
///
/// The response content is lower-cased once and scanned for each brand's
/// normalized name. `competitor_mentions` covers every competitor in the
/// roster, zero counts included; `mention_details` keeps only evidence
/// with at least one hit, owner entry first. Empty content yields an
/// all-zero record, not an error.
///
/// When `enrichment` is `Some`, one structured-analysis call is layered on
/// top of the deterministic counts. Its failures are captured inside the
/// record and never abort the analysis.
///
/// # Errors
///
/// Returns [`AnalyticsError`] if a brand's mention pattern fails to
/// compile. Unlike batch analysis, single-response failures propagate to
/// the caller.
pub async fn analyze_response(
    owner: &BrandEntity,
    competitors: &[BrandEntity],
    response: &ResponseText,
    enrichment: Option<&dyn ModelAccess>,
) -> Result<AnalysisRecord, AnalyticsError> {
    let lowered = response.content.to_lowercase();

    let owner_evidence = find_mentions(&lowered, &normalize_brand_name(&owner.name), &owner.name)?;

    let mut competitor_mentions = BTreeMap::new();
    let mut competitor_details: Vec<MentionEvidence> = Vec::new();
    for competitor in competitors {
        let evidence = find_mentions(
            &lowered,
            &normalize_brand_name(&competitor.name),
            &competitor.name,
        )?;
        competitor_mentions.insert(competitor.name.clone(), evidence.mention_count);
        if evidence.mention_count > 0 {
            competitor_details.push(evidence);
        }
    }

    let owner_mentions = owner_evidence.mention_count;
    let total_mentions = owner_mentions + competitor_mentions.values().sum::<usize>();

    let mut mention_details = Vec::with_capacity(competitor_details.len() + 1);
    if owner_evidence.mention_count > 0 {
        mention_details.push(owner_evidence);
    }
    mention_details.extend(competitor_details);

    let enrichment = match enrichment {
        Some(model) => Some(run_enrichment(model, owner, competitors, &response.content).await),
        None => None,
    };

    Ok(AnalysisRecord {
        response_id: response.id.clone(),
        prompt_id: response.prompt_id.clone(),
        owner_mentions,
        competitor_mentions,
        total_mentions,
        mention_details,
        enrichment,
        created_at: response.created_at,
    })
}
