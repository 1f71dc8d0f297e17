//! Street address extraction from free text.

use regex::Regex;

use crate::normalize::STREET_SUFFIXES;
use crate::states::resolve_state;

/// Generic UI phrases that produce street-suffix false positives
/// ("Top 10 Main Street businesses", "page 2 results").
const UI_PHRASES: [&str; 4] = ["top ", "best ", "page ", "result"];

/// How far around a candidate the jurisdiction token must appear.
const CONTEXT_WINDOW: usize = 50;

/// Extract the first street address from `text` that plausibly belongs to
/// the target jurisdiction.
///
/// A candidate is a street-number + street-suffix pattern whose ±50-char
/// context window contains the city, the state, or the state's
/// abbreviation. Candidates embedded in generic UI phrases are rejected,
/// as are very short matches. When no street address qualifies, a bare
/// `City, ST` pair for the target state is accepted as a fallback.
#[must_use]
pub fn extract_address(text: &str, city: &str, state: &str) -> Option<String> {
    let pattern = Regex::new(&format!(
        r"(?i)\b\d{{1,6}}\s+[A-Za-z\s]{{2,50}}(?:{STREET_SUFFIXES})\b"
    ))
    .expect("valid regex");

    let street_match = pattern.find_iter(text).find(|m| {
        let candidate = m.as_str().to_lowercase();
        candidate.len() > 10
            && !UI_PHRASES.iter().any(|phrase| candidate.contains(phrase))
            && window_mentions_jurisdiction(text, m.start(), m.end(), city, state)
    });
    if let Some(m) = street_match {
        return Some(m.as_str().trim().to_string());
    }

    city_state_fallback(text, state)
}

/// True when the ±50-char window around `[start, end)` contains the city,
/// the state, or the state abbreviation (as ` ab ` or `, ab`).
fn window_mentions_jurisdiction(
    text: &str,
    start: usize,
    end: usize,
    city: &str,
    state: &str,
) -> bool {
    let from = floor_char_boundary(text, start.saturating_sub(CONTEXT_WINDOW));
    let to = ceil_char_boundary(text, (end + CONTEXT_WINDOW).min(text.len()));
    let window = text[from..to].to_lowercase();

    if window.contains(&city.to_lowercase()) || window.contains(&state.to_lowercase()) {
        return true;
    }

    resolve_state(state).is_some_and(|(name, abbrev)| {
        let ab = abbrev.to_lowercase();
        window.contains(&name.to_lowercase())
            || window.contains(&format!(" {ab} "))
            || window.contains(&format!(", {ab}"))
    })
}

/// Match a bare `City, ST` (or `City, StateName`) pair for the target
/// state. The city part must be one to three capitalized words so the
/// match does not swallow preceding prose.
fn city_state_fallback(text: &str, state: &str) -> Option<String> {
    let mut forms = vec![regex::escape(state.trim())];
    if let Some((name, abbrev)) = resolve_state(state) {
        forms.push(regex::escape(name));
        forms.push(regex::escape(abbrev));
    }
    forms.sort();
    forms.dedup();

    let pattern = Regex::new(&format!(
        r"\b[A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+){{0,2}},\s*(?i:{})\b",
        forms.join("|")
    ))
    .expect("valid regex");

    pattern.find(text).map(|m| m.as_str().trim().to_string())
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(s: &str, mut index: usize) -> usize {
    while index < s.len() && !s.is_char_boundary(index) {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_address_with_city_in_window() {
        let text = "Visit us at 123 South Main Street in Provo for a free quote";
        assert_eq!(
            extract_address(text, "Provo", "Utah").as_deref(),
            Some("123 South Main Street")
        );
    }

    #[test]
    fn extracts_address_with_state_abbreviation_in_window() {
        let text = "Located at 4455 Canyon Road, Sandy, UT 84070";
        assert_eq!(
            extract_address(text, "Sandy", "Utah").as_deref(),
            Some("4455 Canyon Road")
        );
    }

    #[test]
    fn rejects_address_with_no_jurisdiction_context() {
        let text = "Our office sits at 99 Elm Street and we love it";
        assert!(extract_address(text, "Provo", "Utah").is_none());
    }

    #[test]
    fn rejects_ui_phrase_false_positive() {
        // Listicle fragments like "5 best Main Street spots" match the
        // street pattern but are not addresses.
        let text = "Provo guide: 5 best Main Street spots in Provo Utah";
        assert!(extract_address(text, "Provo", "Utah").is_none());
    }

    #[test]
    fn rejects_very_short_match() {
        let text = "Provo Utah 1 A St corner";
        assert_eq!(extract_address(text, "Provo", "Utah"), None);
    }

    #[test]
    fn falls_back_to_city_state_pair() {
        let text = "Serving homeowners across Orem, UT since 2004";
        assert_eq!(
            extract_address(text, "Orem", "Utah").as_deref(),
            Some("Orem, UT")
        );
    }

    #[test]
    fn fallback_accepts_full_state_name() {
        let text = "Proudly based in Provo, Utah";
        assert_eq!(
            extract_address(text, "Provo", "Utah").as_deref(),
            Some("Provo, Utah")
        );
    }

    #[test]
    fn no_match_returns_none() {
        assert!(extract_address("nothing here", "Provo", "Utah").is_none());
    }

    #[test]
    fn empty_text_returns_none() {
        assert!(extract_address("", "Provo", "Utah").is_none());
    }

    #[test]
    fn multibyte_text_near_window_edges_does_not_panic() {
        let text = "«Провo» 123 South Main Street in Provo, été";
        let _ = extract_address(text, "Provo", "Utah");
    }
}
