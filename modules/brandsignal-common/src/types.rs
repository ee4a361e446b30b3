use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// --- Citation Verdict Types ---

/// How the brand was mentioned in a provider response.
/// The kebab-case wire form is a stable contract consumed by dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CitationType {
    DirectMention,
    UrlLink,
    Recommendation,
    Comparison,
}

impl std::fmt::Display for CitationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CitationType::DirectMention => write!(f, "direct-mention"),
            CitationType::UrlLink => write!(f, "url-link"),
            CitationType::Recommendation => write!(f, "recommendation"),
            CitationType::Comparison => write!(f, "comparison"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

// Fixed confidence per detection layer. A verdict's confidence is always one
// of these four values or 0.0 (not cited).
pub const CONFIDENCE_URL_LINK: f64 = 1.0;
pub const CONFIDENCE_EXACT_NAME: f64 = 0.9;
pub const CONFIDENCE_NAME_FRAGMENT: f64 = 0.7;
pub const CONFIDENCE_BARE_DOMAIN: f64 = 0.5;

/// The structured verdict for one provider response.
///
/// Produced fresh per (response, brand, competitors) triple; no state
/// survives across calls. `competitors_mentioned` preserves the configured
/// competitor order, never the textual order of appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CitationAnalysis {
    pub cited: bool,
    pub citation_type: Option<CitationType>,
    pub sentiment: Option<Sentiment>,
    /// 1-based rank parsed from a numbered-list line containing the brand.
    pub position: Option<u32>,
    pub competitors_mentioned: Vec<String>,
    /// Fixed per matching layer: 1.0 linked URL, 0.9 exact name,
    /// 0.7 name fragment, 0.5 bare domain, 0.0 not cited.
    pub confidence: f64,
}

impl CitationAnalysis {
    /// The all-negative verdict. Competitor mentions are still reported.
    pub fn uncited(competitors_mentioned: Vec<String>) -> Self {
        Self {
            cited: false,
            citation_type: None,
            sentiment: None,
            position: None,
            competitors_mentioned,
            confidence: 0.0,
        }
    }
}

/// A rival brand to watch for in responses. Read-only during detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Competitor {
    pub name: String,
    pub domain: String,
}

// --- Probe Categories ---

/// Every query template the prober can expand. Six standard categories drive
/// routine visibility checks; ten validation categories elicit comparative
/// answers for a brand/competitor set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProbeCategory {
    // Standard
    BestOf,
    TopList,
    Comparison,
    Recommendation,
    Review,
    HowTo,
    // Validation
    Difference,
    WhenToUse,
    ProblemSolving,
    AudienceSpecific,
    Beginner,
    Budget,
    Enterprise,
    ProsCons,
    Alternatives,
    Requirement,
}

impl ProbeCategory {
    pub const ALL: &'static [ProbeCategory] = &[
        ProbeCategory::BestOf,
        ProbeCategory::TopList,
        ProbeCategory::Comparison,
        ProbeCategory::Recommendation,
        ProbeCategory::Review,
        ProbeCategory::HowTo,
        ProbeCategory::Difference,
        ProbeCategory::WhenToUse,
        ProbeCategory::ProblemSolving,
        ProbeCategory::AudienceSpecific,
        ProbeCategory::Beginner,
        ProbeCategory::Budget,
        ProbeCategory::Enterprise,
        ProbeCategory::ProsCons,
        ProbeCategory::Alternatives,
        ProbeCategory::Requirement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeCategory::BestOf => "best-of",
            ProbeCategory::TopList => "top-list",
            ProbeCategory::Comparison => "comparison",
            ProbeCategory::Recommendation => "recommendation",
            ProbeCategory::Review => "review",
            ProbeCategory::HowTo => "how-to",
            ProbeCategory::Difference => "difference",
            ProbeCategory::WhenToUse => "when-to-use",
            ProbeCategory::ProblemSolving => "problem-solving",
            ProbeCategory::AudienceSpecific => "audience-specific",
            ProbeCategory::Beginner => "beginner",
            ProbeCategory::Budget => "budget",
            ProbeCategory::Enterprise => "enterprise",
            ProbeCategory::ProsCons => "pros-cons",
            ProbeCategory::Alternatives => "alternatives",
            ProbeCategory::Requirement => "requirement",
        }
    }

    /// Strict parse of the kebab-case form. Callers that accept arbitrary
    /// category strings fall back to a generic prompt on `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }

    /// True for the ten categories that elicit comparative answers.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            ProbeCategory::BestOf
                | ProbeCategory::TopList
                | ProbeCategory::Comparison
                | ProbeCategory::Recommendation
                | ProbeCategory::Review
                | ProbeCategory::HowTo
        )
    }
}

impl std::fmt::Display for ProbeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
