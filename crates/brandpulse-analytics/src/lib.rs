//! Brand-mention analytics engine.
//!
//! Counts word-boundary mentions of an owner brand and its competitors
//! inside free-text model responses, optionally layers one LLM-assisted
//! analysis pass on top, and reduces the per-response records into
//! comparable performance metrics overall and per (provider, model) pair.

pub mod analyzer;
pub mod batch;
pub mod compare;
pub mod enrich;
pub mod error;
pub mod matcher;
pub mod metrics;
pub mod normalize;
pub mod types;

pub use analyzer::analyze_response;
pub use batch::analyze_batch;
pub use compare::compare_by_model;
pub use enrich::{GenerationConstraints, ModelAccess, ModelAccessError};
pub use error::AnalyticsError;
pub use matcher::find_mentions;
pub use metrics::aggregate;
pub use normalize::{is_matchable, normalize_brand_name};
pub use types::{
    AnalysisRecord, CompetitorStanding, Enrichment, MentionEvidence, PerformanceMetrics,
};
