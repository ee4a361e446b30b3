//! Lexicon-based tone scoring around a matched span.

use brandsignal_common::Sentiment;

use crate::window::window_around;

/// Bytes of context either side of the match considered for tone.
pub const SENTIMENT_WINDOW_RADIUS: usize = 120;

pub const POSITIVE_WORDS: &[&str] = &[
    "best",
    "excellent",
    "great",
    "leading",
    "top",
    "recommended",
    "powerful",
    "popular",
    "robust",
    "innovative",
    "trusted",
    "outstanding",
    "impressive",
    "seamless",
    "favorite",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "worst",
    "poor",
    "bad",
    "avoid",
    "limited",
    "expensive",
    "difficult",
    "complicated",
    "weak",
    "outdated",
    "unreliable",
    "disappointing",
    "lacking",
    "slow",
    "buggy",
];

/// Score the tone of the text surrounding `[start, end)`.
///
/// Keyword matching is substring-based on purpose: "best" inside
/// "bestseller" counts. Ties score neutral.
pub fn detect_sentiment(text: &str, start: usize, end: usize) -> Sentiment {
    let window = window_around(text, start, end, SENTIMENT_WINDOW_RADIUS).to_lowercase();

    let positive: usize = POSITIVE_WORDS
        .iter()
        .map(|word| window.matches(word).count())
        .sum();
    let negative: usize = NEGATIVE_WORDS
        .iter()
        .map(|word| window.matches(word).count())
        .sum();

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentiment_of(text: &str, needle: &str) -> Sentiment {
        let start = text.find(needle).unwrap();
        detect_sentiment(text, start, start + needle.len())
    }

    #[test]
    fn positive_context_scores_positive() {
        let text = "Acme is an excellent choice and the most popular option for small teams.";
        assert_eq!(sentiment_of(text, "Acme"), Sentiment::Positive);
    }

    #[test]
    fn negative_context_scores_negative() {
        let text = "Avoid Acme: it is expensive, slow, and frustrating to set up.";
        assert_eq!(sentiment_of(text, "Acme"), Sentiment::Negative);
    }

    #[test]
    fn no_keywords_score_neutral() {
        let text = "Acme is a company that sells software to other companies.";
        assert_eq!(sentiment_of(text, "Acme"), Sentiment::Neutral);
    }

    #[test]
    fn equal_counts_tie_to_neutral() {
        let text = "Acme is powerful but expensive.";
        assert_eq!(sentiment_of(text, "Acme"), Sentiment::Neutral);
    }

    #[test]
    fn keywords_match_inside_longer_words() {
        // Substring matching is deliberate: "best" inside "bestseller" counts.
        let text = "Acme wrote the bestseller on onboarding.";
        assert_eq!(sentiment_of(text, "Acme"), Sentiment::Positive);
    }

    #[test]
    fn keywords_outside_the_window_do_not_count() {
        let padding = "x".repeat(SENTIMENT_WINDOW_RADIUS + 20);
        let text = format!("excellent {padding} Acme {padding} buggy");
        assert_eq!(sentiment_of(&text, "Acme"), Sentiment::Neutral);
    }

    #[test]
    fn scoring_is_case_insensitive() {
        let text = "ACME IS THE BEST TOOL AVAILABLE TODAY.";
        assert_eq!(sentiment_of(text, "ACME"), Sentiment::Positive);
    }
}
