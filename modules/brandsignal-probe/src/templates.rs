//! Static query templates, one per probe category.
//!
//! Templates are process-lifetime constants. Placeholders use single-brace
//! `{name}` tokens drawn from [`PLACEHOLDER_NAMES`]; the builder guarantees
//! none survive into a finished prompt when variables are supplied.

use brandsignal_common::{BrandSignalError, ProbeCategory};

/// The closed set of placeholder names templates may reference.
pub const PLACEHOLDER_NAMES: &[&str] = &[
    "query",
    "option1",
    "option2",
    "problem",
    "category",
    "audience",
    "subject",
    "requirement",
];

/// Look up the template for a category.
pub fn template_for(category: ProbeCategory) -> &'static str {
    match category {
        ProbeCategory::BestOf => {
            "What are the best {query}? Please provide a detailed list with recommendations."
        }
        ProbeCategory::TopList => {
            "List the top 10 {query} available today. Rank them from best to worst with a short reason for each."
        }
        ProbeCategory::Comparison => {
            "Compare the leading {query}. Which one stands out and why?"
        }
        ProbeCategory::Recommendation => {
            "I'm evaluating {query}. Which would you recommend and why?"
        }
        ProbeCategory::Review => {
            "Give an honest review of the most popular {query}. Cover strengths and weaknesses."
        }
        ProbeCategory::HowTo => {
            "How should I choose between different {query}? What criteria matter most?"
        }
        ProbeCategory::Difference => {
            "What is the difference between {option1} and {option2}?"
        }
        ProbeCategory::WhenToUse => {
            "When should I use {option1} instead of {option2}?"
        }
        ProbeCategory::ProblemSolving => {
            "What is the best tool for solving {problem}?"
        }
        ProbeCategory::AudienceSpecific => {
            "What are the best {category} tools for {audience}?"
        }
        ProbeCategory::Beginner => {
            "What is the best {category} tool for someone just getting started?"
        }
        ProbeCategory::Budget => {
            "What is the most affordable {category} tool that is still worth using?"
        }
        ProbeCategory::Enterprise => {
            "Which {category} platform is best suited for large enterprise deployments?"
        }
        ProbeCategory::ProsCons => {
            "What are the pros and cons of {subject}?"
        }
        ProbeCategory::Alternatives => {
            "What are the best alternatives to {subject}?"
        }
        ProbeCategory::Requirement => {
            "Which {category} tool best satisfies {requirement}?"
        }
    }
}

/// Check every template's `{...}` tokens against [`PLACEHOLDER_NAMES`] and
/// that no two categories share a template. Run once at process start; a
/// failure here is a build-time mistake, not a runtime condition.
pub fn validate_templates() -> Result<(), BrandSignalError> {
    let mut seen: Vec<&'static str> = Vec::new();
    for category in ProbeCategory::ALL {
        let template = template_for(*category);
        for token in placeholder_tokens(template) {
            if !PLACEHOLDER_NAMES.contains(&token.as_str()) {
                return Err(BrandSignalError::Template(format!(
                    "Unknown placeholder {{{token}}} in {category} template"
                )));
            }
        }
        if seen.contains(&template) {
            return Err(BrandSignalError::Validation(format!(
                "Duplicate template for {category}"
            )));
        }
        seen.push(template);
    }
    Ok(())
}

/// Extract the names inside `{...}` tokens, in order of appearance.
fn placeholder_tokens(template: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                tokens.push(after[..close].to_string());
                rest = &after[close + 1..];
            }
            None => break,
        }
    }
    tokens
}
