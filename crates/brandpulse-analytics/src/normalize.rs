//! Deterministic brand-name normalization.

/// Corporate and venue suffixes dropped during normalization.
///
/// Lowercase single tokens. "cafe" is deliberately absent — short venue
/// names like "Cafe" must stay matchable on their own.
const BUSINESS_SUFFIXES: &[&str] = &[
    "inc",
    "llc",
    "ltd",
    "corp",
    "corporation",
    "company",
    "co",
    "restaurant",
    "bar",
    "pub",
    "grill",
    "kitchen",
    "services",
    "solutions",
    "group",
    "international",
    "global",
];

/// Generic words that never identify a brand on their own.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
    "between", "is", "are", "was", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "can", "restaurant",
    "company", "business", "service", "shop", "store", "best", "good", "great", "near", "me",
    "my", "you", "your", "they", "their", "them", "we", "our", "us",
];

/// Minimum canonical length (in chars) for a name to be worth scanning for.
const MIN_MATCHABLE_CHARS: usize = 2;

/// Canonicalize a brand name into a matchable token string.
///
/// Lower-cases, replaces everything except word characters, whitespace,
/// hyphens and apostrophes with spaces, then drops suffix tokens, stop
/// words and single-character tokens. Pure and idempotent.
#[must_use]
pub fn normalize_brand_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' || c == '\'' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| {
            !BUSINESS_SUFFIXES.contains(word)
                && !STOP_WORDS.contains(word)
                && word.chars().count() > 1
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a canonical name is long enough to scan for.
///
/// Names that normalize below two characters are unmatchable: they yield
/// zero mentions everywhere, silently.
#[must_use]
pub fn is_matchable(canonical: &str) -> bool {
    canonical.chars().count() >= MIN_MATCHABLE_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_keeps_apostrophes() {
        assert_eq!(normalize_brand_name("Joe's Pizza"), "joe's pizza");
    }

    #[test]
    fn strips_business_suffixes() {
        assert_eq!(normalize_brand_name("Joe's Pizza Inc"), "joe's pizza");
        assert_eq!(normalize_brand_name("Acme Solutions LLC"), "acme");
    }

    #[test]
    fn strips_stop_words() {
        assert_eq!(normalize_brand_name("The Best Pizza Shop"), "pizza");
    }

    #[test]
    fn replaces_punctuation_with_spaces() {
        assert_eq!(normalize_brand_name("Mario & Luigi, Ltd."), "mario luigi");
    }

    #[test]
    fn keeps_hyphenated_tokens() {
        assert_eq!(normalize_brand_name("Tex-Mex Express"), "tex-mex express");
    }

    #[test]
    fn drops_single_character_tokens() {
        assert_eq!(normalize_brand_name("B Good Kitchen"), "");
    }

    #[test]
    fn cafe_survives_normalization() {
        assert_eq!(normalize_brand_name("Cafe"), "cafe");
        assert!(is_matchable(&normalize_brand_name("Cafe")));
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in [
            "Joe's Pizza Inc",
            "The Best Pizza Shop",
            "Mario & Luigi, Ltd.",
            "Cafe",
            "BRĒZ International",
        ] {
            let once = normalize_brand_name(raw);
            assert_eq!(normalize_brand_name(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn short_results_are_unmatchable() {
        assert!(!is_matchable(""));
        assert!(!is_matchable("x"));
        assert!(is_matchable("ab"));
    }

    #[test]
    fn all_stop_words_yield_empty_canonical() {
        let canonical = normalize_brand_name("The Best Restaurant Near Me");
        assert_eq!(canonical, "");
        assert!(!is_matchable(&canonical));
    }
}
