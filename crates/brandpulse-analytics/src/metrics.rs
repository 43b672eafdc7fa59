//! Aggregate and competitive metrics over analysis records.

use std::collections::HashMap;

use crate::types::{AnalysisRecord, CompetitorStanding, PerformanceMetrics};

/// Number of competitors reported in the top list.
const TOP_COMPETITOR_LIMIT: usize = 10;

/// Reduce a set of analysis records into summary statistics.
///
/// Empty input yields [`PerformanceMetrics::zero`] — never a division by
/// zero. Competitor totals are summed across records under each name; the
/// top list keeps the ten largest totals, with ties resolved by the order
/// names were first seen during summation (stable sort).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn aggregate(records: &[AnalysisRecord]) -> PerformanceMetrics {
    if records.is_empty() {
        return PerformanceMetrics::zero();
    }

    let total_responses = records.len();
    let responses_with_owner = records.iter().filter(|r| r.owner_mentions > 0).count();
    let owner_total: usize = records.iter().map(|r| r.owner_mentions).sum();
    let mentions_total: usize = records.iter().map(|r| r.total_mentions).sum();

    // Running totals keyed by competitor name; `first_seen` pins the
    // insertion order so equal totals sort deterministically.
    let mut totals: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for record in records {
        for (name, count) in &record.competitor_mentions {
            if !totals.contains_key(name.as_str()) {
                first_seen.push(name);
            }
            *totals.entry(name).or_insert(0) += count;
        }
    }

    let total_competitor_mentions: usize = totals.values().sum();
    let unique_competitors_mentioned = first_seen.len();

    let denom = total_responses as f64;

    let mut top_competitors: Vec<CompetitorStanding> = first_seen
        .iter()
        .map(|name| {
            let total = totals[name];
            CompetitorStanding {
                name: (*name).to_string(),
                total_mentions: total,
                mention_rate: total as f64 / denom,
            }
        })
        .collect();
    top_competitors.sort_by(|a, b| b.total_mentions.cmp(&a.total_mentions));
    top_competitors.truncate(TOP_COMPETITOR_LIMIT);

    let with_owner = responses_with_owner as f64;
    let performance_summary = format!(
        "Owner mentioned in {responses_with_owner}/{total_responses} responses ({:.1}%)",
        with_owner / denom * 100.0
    );

    PerformanceMetrics {
        total_responses,
        owner_mention_rate: with_owner / denom,
        owner_mentions_per_response: owner_total as f64 / denom,
        avg_total_mentions: mentions_total as f64 / denom,
        total_competitor_mentions,
        unique_competitors_mentioned,
        top_competitors,
        performance_summary,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;

    use super::*;

    fn record(owner_mentions: usize, competitors: &[(&str, usize)]) -> AnalysisRecord {
        let competitor_mentions: BTreeMap<String, usize> = competitors
            .iter()
            .map(|(name, count)| ((*name).to_string(), *count))
            .collect();
        let total_mentions = owner_mentions + competitor_mentions.values().sum::<usize>();
        AnalysisRecord {
            response_id: "r".to_string(),
            prompt_id: "p".to_string(),
            owner_mentions,
            competitor_mentions,
            total_mentions,
            mention_details: Vec::new(),
            enrichment: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_input_yields_zero_metrics() {
        let metrics = aggregate(&[]);
        assert_eq!(metrics.total_responses, 0);
        assert_eq!(metrics.owner_mention_rate, 0.0);
        assert_eq!(metrics.avg_total_mentions, 0.0);
        assert!(metrics.top_competitors.is_empty());
        assert_eq!(metrics.performance_summary, "No data available");
    }

    #[test]
    fn owner_mention_rate_counts_responses_not_mentions() {
        let records = vec![
            record(1, &[]),
            record(0, &[]),
            record(2, &[]),
            record(0, &[]),
        ];
        let metrics = aggregate(&records);
        assert_eq!(metrics.owner_mention_rate, 0.5);
        assert_eq!(metrics.owner_mentions_per_response, 0.75);
    }

    #[test]
    fn avg_total_mentions_divides_by_response_count() {
        let records = vec![record(1, &[("Pizza Hut", 2)]), record(0, &[("Pizza Hut", 1)])];
        let metrics = aggregate(&records);
        assert_eq!(metrics.avg_total_mentions, 2.0);
    }

    #[test]
    fn competitor_totals_sum_across_records() {
        let records = vec![
            record(0, &[("Pizza Hut", 2), ("Domino's Pizza", 1)]),
            record(0, &[("Pizza Hut", 3), ("Domino's Pizza", 0)]),
        ];
        let metrics = aggregate(&records);
        assert_eq!(metrics.top_competitors[0].name, "Pizza Hut");
        assert_eq!(metrics.top_competitors[0].total_mentions, 5);
        assert_eq!(metrics.top_competitors[0].mention_rate, 2.5);
        assert_eq!(metrics.top_competitors[1].total_mentions, 1);
        assert_eq!(metrics.total_competitor_mentions, 6);
        assert_eq!(metrics.unique_competitors_mentioned, 2);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        // "Zeta Diner" is seen first (record 1) and ties with "Alpha Grill"
        // (record 2); the tie must not be re-ordered alphabetically.
        let records = vec![
            record(0, &[("Zeta Diner", 2)]),
            record(0, &[("Alpha Grill", 2)]),
        ];
        let metrics = aggregate(&records);
        let names: Vec<&str> = metrics
            .top_competitors
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeta Diner", "Alpha Grill"]);
    }

    #[test]
    fn top_list_is_capped_at_ten() {
        let competitors: Vec<(String, usize)> = (0..14)
            .map(|i| (format!("Competitor {i:02}"), 14 - i))
            .collect();
        let borrowed: Vec<(&str, usize)> = competitors
            .iter()
            .map(|(n, c)| (n.as_str(), *c))
            .collect();
        let metrics = aggregate(&[record(0, &borrowed)]);
        assert_eq!(metrics.top_competitors.len(), 10);
        assert_eq!(metrics.top_competitors[0].name, "Competitor 00");
        assert_eq!(metrics.unique_competitors_mentioned, 14);
    }

    #[test]
    fn zero_count_competitors_still_register() {
        let metrics = aggregate(&[record(0, &[("Pizza Hut", 0)])]);
        assert_eq!(metrics.top_competitors.len(), 1);
        assert_eq!(metrics.top_competitors[0].total_mentions, 0);
    }

    #[test]
    fn summary_reports_owner_share() {
        let records = vec![record(1, &[]), record(0, &[])];
        let metrics = aggregate(&records);
        assert_eq!(
            metrics.performance_summary,
            "Owner mentioned in 1/2 responses (50.0%)"
        );
    }
}
