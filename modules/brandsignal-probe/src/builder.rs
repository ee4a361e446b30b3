//! Deterministic prompt expansion from (query, category, variables).

use std::collections::HashMap;

use brandsignal_common::ProbeCategory;

use crate::templates::{template_for, PLACEHOLDER_NAMES};

/// Expand the template for `category` into a finished prompt.
///
/// Unrecognized categories degrade to a generic prompt referencing `query`,
/// never an error. Without `variables`, only `{query}` is substituted (the
/// backward-compatible simple mode). With `variables`, every known placeholder
/// is replaced: the caller's value when non-empty, otherwise `query` as the
/// last-resort default, so no literal `{placeholder}` token survives.
pub fn build_prompt(
    query: &str,
    category: &str,
    variables: Option<&HashMap<String, String>>,
) -> String {
    let template = match ProbeCategory::parse(category) {
        Some(category) => template_for(category),
        None => return fallback_prompt(query),
    };

    match variables {
        None => template.replace("{query}", query),
        Some(variables) => fill_placeholders(template, query, variables),
    }
}

/// Generic prompt for categories the table doesn't know.
fn fallback_prompt(query: &str) -> String {
    format!("Tell me about {query}. What are the most recommended options and why?")
}

fn fill_placeholders(template: &str, query: &str, variables: &HashMap<String, String>) -> String {
    let mut prompt = template.to_string();
    for name in PLACEHOLDER_NAMES {
        let token = format!("{{{name}}}");
        if !prompt.contains(&token) {
            continue;
        }
        let value = variables
            .get(*name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .unwrap_or(query);
        prompt = prompt.replace(&token, value);
    }
    prompt
}
