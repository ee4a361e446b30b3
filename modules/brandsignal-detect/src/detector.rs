//! Layered citation matching.
//!
//! Four matchers run in fixed priority order (linked URL, exact name, name
//! fragment, bare domain) and the first hit wins. Each matcher is an
//! independent predicate over the lowercased response, so layers can be
//! tested, added, or reordered without touching the others. A hit fixes the
//! verdict's citation type and confidence; sentiment, list position, and
//! competitor mentions are then filled in before returning.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use brandsignal_common::{
    CitationAnalysis, CitationType, Competitor, CONFIDENCE_BARE_DOMAIN, CONFIDENCE_EXACT_NAME,
    CONFIDENCE_NAME_FRAGMENT, CONFIDENCE_URL_LINK,
};

use crate::competitors::detect_competitors;
use crate::position::detect_position;
use crate::sentiment::detect_sentiment;
use crate::window::window_around;

/// Bytes of context either side of an exact-name match scanned for
/// comparison/recommendation cues.
const MENTION_CUE_WINDOW_RADIUS: usize = 200;

/// `http(s)://` followed by a non-whitespace, non-bracket body.
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s<>()\[\]{}]+").unwrap());

const COMPARISON_CUES: &[&str] = &["compare", "vs", "versus", "compared to"];
const RECOMMENDATION_CUES: &[&str] = &["recommend", "suggest", "try"];

/// Lowercased search inputs shared by every matcher. Spans are byte offsets
/// into `response`.
struct Needles<'a> {
    response: &'a str,
    name: &'a str,
    domain: &'a str,
}

struct LayerHit {
    citation_type: CitationType,
    confidence: f64,
    start: usize,
    end: usize,
}

/// Matchers in priority order. The first `Some` wins; later layers never run.
const MATCHERS: &[fn(&Needles) -> Option<LayerHit>] = &[
    match_linked_url,
    match_exact_name,
    match_name_fragment,
    match_bare_domain,
];

/// Analyze one provider response for the brand.
///
/// Total over all inputs: empty responses, blank identifiers, and pathological
/// brand names produce the uncited verdict, never a panic. Competitor mentions
/// are reported whether or not the brand itself was found.
pub fn detect_citation(
    response: &str,
    brand_name: &str,
    brand_domain: &str,
    competitors: &[Competitor],
) -> CitationAnalysis {
    let response_lc = response.to_lowercase();
    let name = brand_name.trim().to_lowercase();
    let domain = brand_domain.trim().to_lowercase();
    let needles = Needles {
        response: &response_lc,
        name: &name,
        domain: &domain,
    };

    let competitors_mentioned = detect_competitors(response, competitors);

    let Some(hit) = MATCHERS.iter().find_map(|matcher| matcher(&needles)) else {
        return CitationAnalysis::uncited(competitors_mentioned);
    };

    debug!(
        citation_type = %hit.citation_type,
        confidence = hit.confidence,
        "Citation matched"
    );

    CitationAnalysis {
        cited: true,
        citation_type: Some(hit.citation_type),
        sentiment: Some(detect_sentiment(&response_lc, hit.start, hit.end)),
        position: detect_position(response, brand_name, brand_domain),
        competitors_mentioned,
        confidence: hit.confidence,
    }
}

/// Layer 1: the brand domain appears inside an `http(s)://` token.
/// Sentiment anchors at the domain's first textual occurrence, which is not
/// necessarily the linked one.
fn match_linked_url(needles: &Needles) -> Option<LayerHit> {
    if needles.domain.is_empty() {
        return None;
    }
    let linked = URL_RE
        .find_iter(needles.response)
        .any(|token| token.as_str().contains(needles.domain));
    if !linked {
        return None;
    }
    let start = needles.response.find(needles.domain)?;
    Some(LayerHit {
        citation_type: CitationType::UrlLink,
        confidence: CONFIDENCE_URL_LINK,
        start,
        end: start + needles.domain.len(),
    })
}

/// Layer 2: word-bounded match of the brand name. The citation type comes
/// from comparison/recommendation cues near the match.
fn match_exact_name(needles: &Needles) -> Option<LayerHit> {
    if needles.name.is_empty() {
        return None;
    }
    let pattern = format!(r"\b{}\b", regex::escape(needles.name));
    // An escaped pattern that still fails to compile is a miss, not an error.
    let word_bounded = Regex::new(&pattern).ok()?;
    let found = word_bounded.find(needles.response)?;
    let window = window_around(
        needles.response,
        found.start(),
        found.end(),
        MENTION_CUE_WINDOW_RADIUS,
    );
    Some(LayerHit {
        citation_type: classify_mention(window),
        confidence: CONFIDENCE_EXACT_NAME,
        start: found.start(),
        end: found.end(),
    })
}

/// Layer 3: the brand name as a raw substring. Reached only when the
/// word-boundary match misses, e.g. the name embedded inside a larger token.
fn match_name_fragment(needles: &Needles) -> Option<LayerHit> {
    if needles.name.is_empty() {
        return None;
    }
    let start = needles.response.find(needles.name)?;
    Some(LayerHit {
        citation_type: CitationType::DirectMention,
        confidence: CONFIDENCE_NAME_FRAGMENT,
        start,
        end: start + needles.name.len(),
    })
}

/// Layer 4: the bare domain in plain text. URL-wrapped occurrences were
/// already claimed by layer 1.
fn match_bare_domain(needles: &Needles) -> Option<LayerHit> {
    if needles.domain.is_empty() {
        return None;
    }
    let start = needles.response.find(needles.domain)?;
    Some(LayerHit {
        citation_type: CitationType::DirectMention,
        confidence: CONFIDENCE_BARE_DOMAIN,
        start,
        end: start + needles.domain.len(),
    })
}

fn classify_mention(window: &str) -> CitationType {
    if COMPARISON_CUES.iter().any(|cue| window.contains(cue)) {
        CitationType::Comparison
    } else if RECOMMENDATION_CUES.iter().any(|cue| window.contains(cue)) {
        CitationType::Recommendation
    } else {
        CitationType::DirectMention
    }
}
