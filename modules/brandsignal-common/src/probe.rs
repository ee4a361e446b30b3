use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{CitationAnalysis, ProbeCategory};

/// An AI-answer provider the prober targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnswerProvider {
    ChatGpt,
    Claude,
    Perplexity,
    Gemini,
    Copilot,
}

impl std::fmt::Display for AnswerProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerProvider::ChatGpt => write!(f, "chat_gpt"),
            AnswerProvider::Claude => write!(f, "claude"),
            AnswerProvider::Perplexity => write!(f, "perplexity"),
            AnswerProvider::Gemini => write!(f, "gemini"),
            AnswerProvider::Copilot => write!(f, "copilot"),
        }
    }
}

impl AnswerProvider {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "chat_gpt" | "chatgpt" => Some(Self::ChatGpt),
            "claude" => Some(Self::Claude),
            "perplexity" => Some(Self::Perplexity),
            "gemini" => Some(Self::Gemini),
            "copilot" => Some(Self::Copilot),
            _ => None,
        }
    }
}

/// One probe outcome, ready for the orchestration layer to persist.
/// The core fills `analysis`; everything else is bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    pub id: Uuid,
    pub provider: AnswerProvider,
    pub category: ProbeCategory,
    pub prompt: String,
    pub brand_name: String,
    pub analysis: CitationAnalysis,
    pub probed_at: DateTime<Utc>,
}

impl ProbeResult {
    pub fn new(
        provider: AnswerProvider,
        category: ProbeCategory,
        prompt: impl Into<String>,
        brand_name: impl Into<String>,
        analysis: CitationAnalysis,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            provider,
            category,
            prompt: prompt.into(),
            brand_name: brand_name.into(),
            analysis,
            probed_at: Utc::now(),
        }
    }
}
