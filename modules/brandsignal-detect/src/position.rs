//! Ranked-list position extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Leading numbered-list marker: `1. `, `2) `, `3: `, `4- `, up to two digits.
static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{1,2})[.):\-]\s+(.+)").unwrap());

/// The brand's 1-based rank in the first numbered-list line that mentions it
/// by name or domain (case-insensitive, unanchored). First qualifying line
/// wins; later, better-looking lines are never considered.
pub fn detect_position(response: &str, brand_name: &str, brand_domain: &str) -> Option<u32> {
    let name = brand_name.trim().to_lowercase();
    let domain = brand_domain.trim().to_lowercase();
    if name.is_empty() && domain.is_empty() {
        return None;
    }

    for line in response.lines() {
        let Some(caps) = LIST_ITEM_RE.captures(line) else {
            continue;
        };
        let (Some(marker), Some(rest)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let rest = rest.as_str().to_lowercase();
        let named = !name.is_empty() && rest.contains(&name);
        let domained = !domain.is_empty() && rest.contains(&domain);
        if named || domained {
            return marker.as_str().parse().ok();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_in_a_numbered_list() {
        let response = "1. Acme\n2. Beta\n3. Gamma";
        assert_eq!(detect_position(response, "Acme", "acme.com"), Some(1));
    }

    #[test]
    fn later_item_returns_its_marker() {
        let response = "Here are my picks:\n1. Beta\n2. Gamma\n3. Acme CRM";
        assert_eq!(detect_position(response, "Acme", "acme.com"), Some(3));
    }

    #[test]
    fn no_numbered_lines_means_no_position() {
        let response = "Acme is a solid choice, as is Beta.";
        assert_eq!(detect_position(response, "Acme", "acme.com"), None);
    }

    #[test]
    fn brand_absent_from_every_list_line() {
        let response = "1. Beta\n2. Gamma";
        assert_eq!(detect_position(response, "Acme", "acme.com"), None);
    }

    #[test]
    fn alternative_marker_styles_are_accepted() {
        assert_eq!(detect_position("2) Acme", "Acme", ""), Some(2));
        assert_eq!(detect_position("3: Acme", "Acme", ""), Some(3));
        assert_eq!(detect_position("4- Acme", "Acme", ""), Some(4));
        assert_eq!(detect_position("  5. Acme", "Acme", ""), Some(5));
    }

    #[test]
    fn domain_mention_qualifies_a_line() {
        let response = "1. The tool at acme.com\n2. Beta";
        assert_eq!(detect_position(response, "Acme", "acme.com"), Some(1));
    }

    #[test]
    fn first_qualifying_line_wins_over_later_ones() {
        let response = "5. Acme (honorable mention)\n1. Acme";
        assert_eq!(detect_position(response, "Acme", "acme.com"), Some(5));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(detect_position("1. ACME CRM", "acme", ""), Some(1));
    }

    #[test]
    fn empty_identifiers_never_match() {
        assert_eq!(detect_position("1. Something", "", ""), None);
    }

    #[test]
    fn three_digit_markers_are_not_list_items() {
        assert_eq!(detect_position("100. Acme", "Acme", ""), None);
    }
}
