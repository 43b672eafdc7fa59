use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// All word-boundary occurrences of one brand inside one response.
///
/// Positions are byte offsets into the lower-cased response content,
/// strictly increasing; `mention_positions` and `context_snippets` always
/// have exactly `mention_count` entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentionEvidence {
    pub brand_name: String,
    pub mention_count: usize,
    pub mention_positions: Vec<usize>,
    pub context_snippets: Vec<String>,
}

impl MentionEvidence {
    /// Evidence for a brand that was not (or cannot be) matched.
    pub(crate) fn zero(brand_name: &str) -> Self {
        Self {
            brand_name: brand_name.to_string(),
            mention_count: 0,
            mention_positions: Vec::new(),
            context_snippets: Vec::new(),
        }
    }
}

/// Outcome of the optional LLM-assisted analysis pass.
///
/// Enrichment is best-effort: a reply that fails to parse as JSON is kept
/// verbatim, and a failed model call is recorded as its error message.
/// Neither ever fails the surrounding deterministic analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Enrichment {
    Structured { analysis: serde_json::Value },
    Raw { raw_analysis: String },
    Failed { error: String },
}

/// Deterministic mention counts for one response, plus optional enrichment.
///
/// Created once per (response, roster) pair and never mutated afterwards.
/// `total_mentions` always equals `owner_mentions` plus the sum of
/// `competitor_mentions` values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub response_id: String,
    pub prompt_id: String,
    pub owner_mentions: usize,
    /// Every competitor in the roster, zero counts included.
    pub competitor_mentions: BTreeMap<String, usize>,
    pub total_mentions: usize,
    /// Only evidence with at least one hit; owner entry first.
    pub mention_details: Vec<MentionEvidence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichment: Option<Enrichment>,
    pub created_at: DateTime<Utc>,
}

/// One competitor's aggregate standing across a record set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorStanding {
    pub name: String,
    pub total_mentions: usize,
    pub mention_rate: f64,
}

/// Summary statistics over a set of analysis records.
///
/// Derived on demand by [`crate::aggregate`]; never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub total_responses: usize,
    pub owner_mention_rate: f64,
    pub owner_mentions_per_response: f64,
    pub avg_total_mentions: f64,
    pub total_competitor_mentions: usize,
    pub unique_competitors_mentioned: usize,
    /// At most ten competitors, largest totals first; ties keep the order
    /// names were first seen during summation.
    pub top_competitors: Vec<CompetitorStanding>,
    pub performance_summary: String,
}

impl PerformanceMetrics {
    /// The well-defined zero value returned for an empty record set.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            total_responses: 0,
            owner_mention_rate: 0.0,
            owner_mentions_per_response: 0.0,
            avg_total_mentions: 0.0,
            total_competitor_mentions: 0,
            unique_competitors_mentioned: 0,
            top_competitors: Vec::new(),
            performance_summary: "No data available".to_string(),
        }
    }
}
