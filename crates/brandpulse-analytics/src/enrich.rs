//! Optional LLM-assisted enrichment layered on deterministic counting.
//!
//! The engine never talks to a provider directly; it goes through the
//! [`ModelAccess`] capability and absorbs every failure into an
//! [`Enrichment`] variant stored inside the analysis record.

use async_trait::async_trait;
use brandpulse_core::BrandEntity;

use crate::types::Enrichment;

/// Characters of response content included in the analysis prompt.
const MAX_EXCERPT_CHARS: usize = 1500;

/// Competitor names included in the analysis prompt.
const MAX_COMPETITOR_NAMES: usize = 10;

/// Generation limits passed to the model-access capability.
#[derive(Debug, Clone, Copy)]
pub struct GenerationConstraints {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl GenerationConstraints {
    /// Low-temperature constraints used for structured analysis.
    #[must_use]
    pub fn structured_analysis() -> Self {
        Self {
            max_tokens: 800,
            temperature: 0.2,
        }
    }
}

/// Failure raised by a model-access capability.
///
/// Opaque on purpose: timeouts and budgets are the capability's concern;
/// the engine only records the message inside the analysis record.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ModelAccessError(pub String);

/// Generic "ask a model, get text back" capability.
#[async_trait]
pub trait ModelAccess: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        constraints: GenerationConstraints,
    ) -> Result<String, ModelAccessError>;
}

/// Build the fixed structured-analysis prompt for one response.
///
/// The response excerpt and competitor list are truncated so prompt size
/// stays bounded regardless of input.
pub(crate) fn build_enrichment_prompt(
    owner: &BrandEntity,
    competitors: &[BrandEntity],
    content: &str,
) -> String {
    let excerpt: String = content.chars().take(MAX_EXCERPT_CHARS).collect();
    let names = competitors
        .iter()
        .take(MAX_COMPETITOR_NAMES)
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Analyze this AI assistant response for mentions and context about businesses.\n\
         \n\
         Owner business: {owner}\n\
         Competitors to look for: {names}\n\
         \n\
         Response to analyze:\n\
         {excerpt}\n\
         \n\
         Provide analysis in JSON format:\n\
         {{\n\
         \x20   \"mentioned_businesses\": [list of business names mentioned],\n\
         \x20   \"owner_business_context\": \"How was the owner's business mentioned (positive/negative/neutral/not mentioned)\",\n\
         \x20   \"competitor_context\": \"Summary of how competitors were mentioned\",\n\
         \x20   \"recommendation_bias\": \"Does the response seem to favor certain businesses?\",\n\
         \x20   \"geographic_relevance\": \"Are the mentioned businesses locally relevant to the owner?\",\n\
         \x20   \"response_quality\": \"How helpful and comprehensive is this response?\",\n\
         \x20   \"sentiment_analysis\": {{\n\
         \x20       \"owner_business_sentiment\": \"positive/negative/neutral\",\n\
         \x20       \"overall_sentiment\": \"positive/negative/neutral\"\n\
         \x20   }}\n\
         }}",
        owner = owner.name,
    )
}

/// Run one enrichment call and absorb every failure.
///
/// A reply that parses as JSON becomes [`Enrichment::Structured`]; one that
/// does not is kept verbatim as [`Enrichment::Raw`]; a capability failure
/// becomes [`Enrichment::Failed`].
pub(crate) async fn run_enrichment(
    model: &dyn ModelAccess,
    owner: &BrandEntity,
    competitors: &[BrandEntity],
    content: &str,
) -> Enrichment {
    let prompt = build_enrichment_prompt(owner, competitors, content);
    match model
        .generate(&prompt, GenerationConstraints::structured_analysis())
        .await
    {
        Ok(reply) => match serde_json::from_str::<serde_json::Value>(&reply) {
            Ok(analysis) => Enrichment::Structured { analysis },
            Err(_) => {
                tracing::warn!("enrichment reply was not valid JSON; keeping raw text");
                Enrichment::Raw { raw_analysis: reply }
            }
        },
        Err(e) => {
            tracing::error!(error = %e, "enrichment model call failed");
            Enrichment::Failed {
                error: e.to_string(),
            }
        }
    }
}
