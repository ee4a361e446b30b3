//! The fixed validation-probe catalogue for a brand/category/competitor set.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use brandsignal_common::{Competitor, ProbeCategory};

use crate::builder::build_prompt;

/// Comparison probes cover at most this many competitors. More is a cap,
/// never an error.
pub const MAX_COMPARISON_COMPETITORS: usize = 3;

/// The fixed audiences probed for every brand, in catalogue order.
pub const PROBE_AUDIENCES: &[&str] = &[
    "startups",
    "small businesses",
    "enterprise companies",
    "freelancers",
];

/// One entry in the validation catalogue: the category, the finished prompt,
/// and the variables it was expanded with (enough to re-run it later).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationProbe {
    pub category: ProbeCategory,
    pub prompt: String,
    pub variables: HashMap<String, String>,
}

/// Emit the validation catalogue for a brand. Deterministic: same inputs,
/// same probes in the same order.
///
/// Order: best-of, top-list, then per competitor (first three) difference and
/// when-to-use, then problem-solving, the four audience probes, beginner,
/// budget, enterprise, and pros-cons on the brand itself.
pub fn generate_validation_probes(
    brand_name: &str,
    category: &str,
    competitors: &[Competitor],
) -> Vec<ValidationProbe> {
    let mut probes = Vec::new();

    probes.push(probe(category, ProbeCategory::BestOf, &[]));
    probes.push(probe(category, ProbeCategory::TopList, &[]));

    for competitor in competitors.iter().take(MAX_COMPARISON_COMPETITORS) {
        for comparison in [ProbeCategory::Difference, ProbeCategory::WhenToUse] {
            probes.push(probe(
                category,
                comparison,
                &[("option1", brand_name), ("option2", &competitor.name)],
            ));
        }
    }

    let problem = format!("common {category} problems");
    probes.push(probe(category, ProbeCategory::ProblemSolving, &[("problem", &problem)]));

    for audience in PROBE_AUDIENCES {
        probes.push(probe(
            category,
            ProbeCategory::AudienceSpecific,
            &[("category", category), ("audience", audience)],
        ));
    }

    for tier in [ProbeCategory::Beginner, ProbeCategory::Budget, ProbeCategory::Enterprise] {
        probes.push(probe(category, tier, &[("category", category)]));
    }

    probes.push(probe(category, ProbeCategory::ProsCons, &[("subject", brand_name)]));

    debug!(
        brand = brand_name,
        category,
        count = probes.len(),
        "Generated validation probes"
    );
    probes
}

fn probe(query: &str, category: ProbeCategory, pairs: &[(&str, &str)]) -> ValidationProbe {
    let variables: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let prompt = build_prompt(query, category.as_str(), Some(&variables));
    ValidationProbe {
        category,
        prompt,
        variables,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitors(names: &[(&str, &str)]) -> Vec<Competitor> {
        names
            .iter()
            .map(|(name, domain)| Competitor {
                name: name.to_string(),
                domain: domain.to_string(),
            })
            .collect()
    }

    #[test]
    fn full_catalogue_is_seventeen_probes() {
        let probes = generate_validation_probes(
            "Acme",
            "CRM software",
            &competitors(&[
                ("Beta", "beta.com"),
                ("Gamma", "gamma.io"),
                ("Delta", "delta.dev"),
            ]),
        );
        assert_eq!(probes.len(), 17);
    }

    #[test]
    fn catalogue_order_is_fixed() {
        let probes = generate_validation_probes(
            "Acme",
            "CRM software",
            &competitors(&[("Beta", "beta.com")]),
        );
        let categories: Vec<ProbeCategory> = probes.iter().map(|p| p.category).collect();
        assert_eq!(
            categories,
            vec![
                ProbeCategory::BestOf,
                ProbeCategory::TopList,
                ProbeCategory::Difference,
                ProbeCategory::WhenToUse,
                ProbeCategory::ProblemSolving,
                ProbeCategory::AudienceSpecific,
                ProbeCategory::AudienceSpecific,
                ProbeCategory::AudienceSpecific,
                ProbeCategory::AudienceSpecific,
                ProbeCategory::Beginner,
                ProbeCategory::Budget,
                ProbeCategory::Enterprise,
                ProbeCategory::ProsCons,
            ]
        );
    }

    #[test]
    fn competitor_list_is_capped_at_three() {
        let probes = generate_validation_probes(
            "Acme",
            "CRM software",
            &competitors(&[
                ("Beta", "beta.com"),
                ("Gamma", "gamma.io"),
                ("Delta", "delta.dev"),
                ("Epsilon", "epsilon.app"),
            ]),
        );
        let comparison_count = probes
            .iter()
            .filter(|p| {
                matches!(p.category, ProbeCategory::Difference | ProbeCategory::WhenToUse)
            })
            .count();
        assert_eq!(comparison_count, 6);
        assert!(!probes
            .iter()
            .any(|p| p.variables.get("option2").map(String::as_str) == Some("Epsilon")));
    }

    #[test]
    fn no_competitors_still_yields_the_fixed_probes() {
        let probes = generate_validation_probes("Acme", "CRM software", &[]);
        assert_eq!(probes.len(), 11);
        assert!(!probes
            .iter()
            .any(|p| matches!(p.category, ProbeCategory::Difference | ProbeCategory::WhenToUse)));
    }

    #[test]
    fn comparison_probes_name_brand_and_competitor() {
        let probes = generate_validation_probes(
            "Acme",
            "CRM software",
            &competitors(&[("Beta", "beta.com")]),
        );
        let difference = probes
            .iter()
            .find(|p| p.category == ProbeCategory::Difference)
            .unwrap();
        assert_eq!(difference.prompt, "What is the difference between Acme and Beta?");
    }

    #[test]
    fn audience_probes_follow_the_fixed_audience_order() {
        let probes = generate_validation_probes("Acme", "CRM software", &[]);
        let audiences: Vec<&str> = probes
            .iter()
            .filter(|p| p.category == ProbeCategory::AudienceSpecific)
            .map(|p| p.variables["audience"].as_str())
            .collect();
        assert_eq!(audiences, PROBE_AUDIENCES);
    }

    #[test]
    fn pros_cons_probe_targets_the_brand() {
        let probes = generate_validation_probes("Acme", "CRM software", &[]);
        let pros_cons = probes.last().unwrap();
        assert_eq!(pros_cons.category, ProbeCategory::ProsCons);
        assert_eq!(pros_cons.prompt, "What are the pros and cons of Acme?");
    }

    #[test]
    fn no_probe_leaks_a_placeholder() {
        let probes = generate_validation_probes(
            "Acme",
            "CRM software",
            &competitors(&[("Beta", "beta.com")]),
        );
        for probe in &probes {
            assert!(
                !probe.prompt.contains('{'),
                "placeholder leaked in {}: {}",
                probe.category,
                probe.prompt
            );
        }
    }

    #[test]
    fn probes_serialize_with_kebab_case_categories() {
        let probes = generate_validation_probes("Acme", "CRM software", &[]);
        let json = serde_json::to_value(&probes[0]).unwrap();
        assert_eq!(json["category"], "best-of");
        assert_eq!(
            json["prompt"],
            "What are the best CRM software? Please provide a detailed list with recommendations."
        );
    }

    #[test]
    fn same_inputs_same_catalogue() {
        let rivals = competitors(&[("Beta", "beta.com"), ("Gamma", "gamma.io")]);
        let a = generate_validation_probes("Acme", "CRM software", &rivals);
        let b = generate_validation_probes("Acme", "CRM software", &rivals);
        assert_eq!(a, b);
    }
}
