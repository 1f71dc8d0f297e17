//! External website extraction from free text.

use regex::Regex;

/// Domains and extensions that are never the business's own site: social
/// platforms, search/review aggregators, government and education hosts,
/// and bare file references.
const NON_BUSINESS_TOKENS: [&str; 14] = [
    "facebook",
    "instagram",
    "twitter",
    "linkedin",
    "google",
    "yelp",
    "angi",
    "bbb",
    "thumbtack",
    ".gov",
    ".edu",
    ".pdf",
    ".jpg",
    ".png",
];

/// Minimum character length a candidate must exceed to count as a domain
/// rather than a fragment.
const MIN_CANDIDATE_LEN: usize = 8;

/// Extract the first plausible external business website from `text`.
///
/// Candidates are bare or `http(s)` domains; anything containing a
/// non-business token is discarded, as are candidates too short or without
/// a dot-separated host. The returned URL always carries an `https`
/// scheme.
#[must_use]
pub fn extract_website(text: &str) -> Option<String> {
    let pattern =
        Regex::new(r"(?:https?://)?(?:www\.)?[a-zA-Z0-9-]+\.[a-zA-Z]{2,}").expect("valid regex");

    let result = pattern
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|candidate| is_business_site(candidate))
        .map(|site| {
            if site.starts_with("http") {
                site.to_string()
            } else {
                format!("https://{site}")
            }
        });
    result
}

fn is_business_site(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    lower.len() > MIN_CANDIDATE_LEN
        && lower.split('.').count() >= 2
        && !NON_BUSINESS_TOKENS.iter().any(|token| lower.contains(token))
}
