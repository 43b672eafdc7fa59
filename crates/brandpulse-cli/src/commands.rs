//! Subcommand handlers: load inputs, run the engine, emit JSON.

use std::path::Path;

use anyhow::Context;

use brandpulse_analytics::{
    aggregate, analyze_batch, analyze_response, compare_by_model, AnalysisRecord, ModelAccess,
};
use brandpulse_core::{load_roster, AppConfig, ResponseText, Roster};
use brandpulse_llm::LlmClient;

use crate::RunArgs;

pub(crate) async fn analyze(config: &AppConfig, args: &RunArgs) -> anyhow::Result<()> {
    let (roster, responses) = load_inputs(args)?;

    let records = if config.enrichment_enabled {
        analyze_enriched(config, &roster, &responses).await?
    } else {
        analyze_batch(
            &roster.owner,
            &roster.competitors,
            &responses,
            config.analytics_max_concurrent,
        )
        .await
    };

    tracing::info!(records = records.len(), "analysis complete");
    emit(&records, args.out.as_deref())
}

pub(crate) async fn report(config: &AppConfig, args: &RunArgs) -> anyhow::Result<()> {
    let (roster, responses) = load_inputs(args)?;
    let records = analyze_batch(
        &roster.owner,
        &roster.competitors,
        &responses,
        config.analytics_max_concurrent,
    )
    .await;
    let metrics = aggregate(&records);
    emit(&metrics, args.out.as_deref())
}

pub(crate) async fn compare(config: &AppConfig, args: &RunArgs) -> anyhow::Result<()> {
    let (roster, responses) = load_inputs(args)?;
    let records = analyze_batch(
        &roster.owner,
        &roster.competitors,
        &responses,
        config.analytics_max_concurrent,
    )
    .await;
    let comparison = compare_by_model(&records, &responses);
    emit(&comparison, args.out.as_deref())
}

/// Sequential analysis with enrichment: one model call per response, so
/// the concurrent batch path is deliberately not used here.
async fn analyze_enriched(
    config: &AppConfig,
    roster: &Roster,
    responses: &[ResponseText],
) -> anyhow::Result<Vec<AnalysisRecord>> {
    let api_key = config
        .llm_api_key
        .as_deref()
        .context("LLM_API_KEY must be set when enrichment is enabled")?;

    let client = match config.llm_base_url.as_deref() {
        Some(base) => LlmClient::with_base_url(
            api_key,
            &config.llm_model,
            config.llm_request_timeout_secs,
            base,
        )?,
        None => LlmClient::new(api_key, &config.llm_model, config.llm_request_timeout_secs)?,
    }
    .with_retry_policy(config.llm_max_retries, 1_000);

    let mut records = Vec::with_capacity(responses.len());
    for response in responses {
        let outcome = analyze_response(
            &roster.owner,
            &roster.competitors,
            response,
            Some(&client as &dyn ModelAccess),
        )
        .await;
        match outcome {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::error!(
                    response_id = %response.id,
                    error = %e,
                    "analysis failed for response"
                );
            }
        }
    }
    Ok(records)
}

fn load_inputs(args: &RunArgs) -> anyhow::Result<(Roster, Vec<ResponseText>)> {
    let roster = load_roster(&args.roster)?;
    let responses = load_responses(&args.responses)?;
    tracing::info!(
        owner = %roster.owner.name,
        competitors = roster.competitors.len(),
        responses = responses.len(),
        "inputs loaded"
    );
    Ok((roster, responses))
}

fn load_responses(path: &Path) -> anyhow::Result<Vec<ResponseText>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read responses file {}", path.display()))?;
    let responses = parse_responses(&content)
        .with_context(|| format!("failed to parse responses file {}", path.display()))?;
    Ok(responses)
}

fn parse_responses(content: &str) -> Result<Vec<ResponseText>, serde_json::Error> {
    serde_json::from_str(content)
}

fn emit<T: serde::Serialize>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_responses_reads_the_stored_shape() {
        let content = r#"[
            {
                "id": "r1",
                "provider": "openai",
                "model": "gpt-4o-mini",
                "prompt_id": "p1",
                "content": "Joe's Pizza is great.",
                "created_at": "2026-05-01T12:00:00Z"
            }
        ]"#;
        let responses = parse_responses(content).unwrap();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].id, "r1");
        assert_eq!(responses[0].provider, "openai");
        assert_eq!(
            responses[0].created_at,
            chrono::DateTime::parse_from_rfc3339("2026-05-01T12:00:00Z").unwrap()
        );
    }

    #[test]
    fn parse_responses_rejects_malformed_input() {
        assert!(parse_responses("not json").is_err());
        assert!(parse_responses(r#"{"id": "not-an-array"}"#).is_err());
    }
}
