//! Location relevance filtering of raw search results.

use lva_core::RawResult;

use crate::states::{resolve_state, DENYLIST_STATES};

/// Keep only results that plausibly refer to the target city and state.
///
/// A result passes when its combined title+snippet+url text contains the
/// city token AND a state signal (the state name, or the abbreviation as
/// ` ab ` / `, ab`). A result is rejected outright when it carries any
/// token of another denylisted state. Deliberately strict: false negatives
/// are accepted over false positives, and there is no fuzzy tier.
#[must_use]
pub fn filter_location_relevant(
    results: Vec<RawResult>,
    city: &str,
    state: &str,
) -> Vec<RawResult> {
    let total = results.len();
    let city_lower = city.to_lowercase();
    let state_tokens = state_tokens(state);
    let wrong_state_tokens = wrong_state_tokens(state);

    let filtered: Vec<RawResult> = results
        .into_iter()
        .filter(|result| {
            if result.title.is_empty() && result.snippet.is_empty() && result.url.is_empty() {
                return false;
            }
            let text = result.combined_text().to_lowercase();

            let has_specific_location = text.contains(&city_lower)
                && state_tokens.iter().any(|token| text.contains(token));
            let has_wrong_location = wrong_state_tokens
                .iter()
                .any(|token| text.contains(token));

            has_specific_location && !has_wrong_location
        })
        .collect();

    tracing::debug!(
        total,
        kept = filtered.len(),
        city,
        state,
        "location relevance filter applied"
    );
    filtered
}

/// Lowercased tokens that positively signal the target state.
fn state_tokens(state: &str) -> Vec<String> {
    let mut tokens = vec![state.to_lowercase()];
    if let Some((name, abbrev)) = resolve_state(state) {
        let ab = abbrev.to_lowercase();
        tokens.push(name.to_lowercase());
        tokens.push(format!(" {ab} "));
        tokens.push(format!(", {ab}"));
    }
    tokens.sort();
    tokens.dedup();
    tokens
}

/// Lowercased tokens of denylisted states, excluding the target state's
/// own tokens.
fn wrong_state_tokens(state: &str) -> Vec<String> {
    let target = resolve_state(state).map(|(name, _)| name);

    DENYLIST_STATES
        .iter()
        .filter(|name| Some(**name) != target)
        .flat_map(|name| {
            let mut tokens = vec![name.to_lowercase()];
            if let Some((_, abbrev)) = resolve_state(name) {
                let ab = abbrev.to_lowercase();
                tokens.push(format!(" {ab} "));
                tokens.push(format!(", {ab}"));
            }
            tokens
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, snippet: &str, url: &str) -> RawResult {
        RawResult {
            title: title.to_string(),
            snippet: snippet.to_string(),
            url: url.to_string(),
            domain: String::new(),
        }
    }

    #[test]
    fn keeps_result_with_city_and_state_name() {
        let results = vec![result(
            "Acme Roofing Provo",
            "Roofing services in Provo, Utah",
            "https://acmeroofing.com",
        )];
        let kept = filter_location_relevant(results, "Provo", "Utah");
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn keeps_result_with_city_and_state_abbreviation() {
        let results = vec![result(
            "Acme Roofing",
            "Best roofer in Provo, UT",
            "https://acmeroofing.com",
        )];
        assert_eq!(filter_location_relevant(results, "Provo", "Utah").len(), 1);
    }

    #[test]
    fn drops_result_missing_city() {
        let results = vec![result(
            "Utah roofing directory",
            "Roofers across Utah",
            "https://directory.example.com",
        )];
        assert!(filter_location_relevant(results, "Provo", "Utah").is_empty());
    }

    #[test]
    fn drops_result_missing_state_signal() {
        let results = vec![result(
            "Provo roofing",
            "Roofers serving Provo and nearby",
            "https://acmeroofing.com",
        )];
        assert!(filter_location_relevant(results, "Provo", "Utah").is_empty());
    }

    #[test]
    fn rejects_result_mentioning_denylisted_state() {
        let results = vec![result(
            "Acme Roofing Provo Utah",
            "Also serving customers in California",
            "https://acmeroofing.com",
        )];
        assert!(filter_location_relevant(results, "Provo", "Utah").is_empty());
    }

    #[test]
    fn target_state_is_not_its_own_denylist_entry() {
        // A Texas business must not be rejected for containing "texas".
        let results = vec![result(
            "Acme Roofing Austin",
            "Roofing services in Austin, Texas",
            "https://acmeroofing.com",
        )];
        assert_eq!(filter_location_relevant(results, "Austin", "Texas").len(), 1);
    }

    #[test]
    fn drops_result_with_no_text_at_all() {
        let results = vec![result("", "", "")];
        assert!(filter_location_relevant(results, "Provo", "Utah").is_empty());
    }

    #[test]
    fn abbreviation_needs_delimiting_punctuation() {
        // "brut" contains "ut" but not as a state token.
        let results = vec![result(
            "Provo brut cider",
            "A dry cider from Provo",
            "https://cider.example.com",
        )];
        assert!(filter_location_relevant(results, "Provo", "Utah").is_empty());
    }

    #[test]
    fn accepts_state_passed_as_abbreviation() {
        let results = vec![result(
            "Acme Roofing",
            "Roofing in Provo, UT",
            "https://acmeroofing.com",
        )];
        assert_eq!(filter_location_relevant(results, "Provo", "UT").len(), 1);
    }
}
