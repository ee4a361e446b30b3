//! Competitor co-mention scanning.

use brandsignal_common::Competitor;

/// Which configured competitors appear anywhere in the response, matched
/// case-insensitively by name or domain. The returned display names preserve
/// the configured competitor order, never the textual order of appearance.
/// Presence only; no per-competitor confidence or position.
pub fn detect_competitors(response: &str, competitors: &[Competitor]) -> Vec<String> {
    let response = response.to_lowercase();

    competitors
        .iter()
        .filter(|competitor| {
            let name = competitor.name.trim().to_lowercase();
            let domain = competitor.domain.trim().to_lowercase();
            (!name.is_empty() && response.contains(&name))
                || (!domain.is_empty() && response.contains(&domain))
        })
        .map(|competitor| competitor.name.clone())
        .collect()
}
