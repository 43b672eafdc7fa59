//! Word-boundary mention matching with positional and contextual evidence.

use regex::RegexBuilder;

use crate::error::AnalyticsError;
use crate::normalize::is_matchable;
use crate::types::MentionEvidence;

/// Bytes of context captured either side of a match.
const CONTEXT_WINDOW: usize = 50;

/// Find all word-boundary occurrences of `canonical_name` in `lowered_text`.
///
/// `lowered_text` must already be lower-cased by the caller; positions in
/// the returned evidence are byte offsets into that text, strictly
/// increasing. The canonical name is matched as an escaped literal anchored
/// by word boundaries, so "cafe" never matches inside "cafeteria".
/// Unmatchable canonical names yield zero evidence without scanning.
///
/// # Errors
///
/// Returns [`AnalyticsError::Pattern`] if the escaped pattern fails to
/// compile.
pub fn find_mentions(
    lowered_text: &str,
    canonical_name: &str,
    brand_name: &str,
) -> Result<MentionEvidence, AnalyticsError> {
    if !is_matchable(canonical_name) {
        return Ok(MentionEvidence::zero(brand_name));
    }

    let pattern = format!(r"\b{}\b", regex::escape(canonical_name));
    let re = RegexBuilder::new(&pattern).case_insensitive(true).build()?;

    let mut mention_positions = Vec::new();
    let mut context_snippets = Vec::new();
    for m in re.find_iter(lowered_text) {
        mention_positions.push(m.start());
        context_snippets.push(context_snippet(lowered_text, m.start(), m.end()));
    }

    Ok(MentionEvidence {
        brand_name: brand_name.to_string(),
        mention_count: mention_positions.len(),
        mention_positions,
        context_snippets,
    })
}

/// Cut a window of [`CONTEXT_WINDOW`] bytes either side of the match,
/// clamped to text bounds and char boundaries, with internal whitespace
/// runs collapsed to single spaces and the ends trimmed.
fn context_snippet(text: &str, start: usize, end: usize) -> String {
    let from = floor_char_boundary(text, start.saturating_sub(CONTEXT_WINDOW));
    let to = ceil_char_boundary(text, (end + CONTEXT_WINDOW).min(text.len()));
    text[from..to]
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn floor_char_boundary(text: &str, mut idx: usize) -> usize {
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn ceil_char_boundary(text: &str, mut idx: usize) -> usize {
    while idx < text.len() && !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}
