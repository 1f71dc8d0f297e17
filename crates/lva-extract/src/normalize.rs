//! Canonical forms for phone numbers, street addresses, and domains.
//!
//! Normalization exists only to make equality comparison meaningful; the
//! outputs are never shown to users as corrections. All three functions
//! are idempotent: feeding a normalized value back in returns it unchanged.

use regex::Regex;

/// Street-suffix dictionary shared by address normalization and extraction.
pub(crate) const STREET_SUFFIXES: &str = "Street|St|Avenue|Ave|Road|Rd|Drive|Dr|Lane|Ln|\
Boulevard|Blvd|Circle|Cir|Court|Ct|Place|Pl|Way|Parkway|Pkwy";

/// Normalize a phone number to canonical `(###) ###-####` form.
///
/// Ten digits format directly; eleven digits with a leading `1` drop the
/// country code first. Anything else passes through trimmed, untouched.
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    let area = match digits.len() {
        10 => &digits[0..],
        11 if digits.starts_with('1') => &digits[1..],
        _ => return raw.trim().to_string(),
    };

    format!("({}) {}-{}", &area[0..3], &area[3..6], &area[6..10])
}

/// Normalize a street address for comparison: trim, collapse runs of
/// whitespace, and lowercase street-suffix words (dropping any trailing
/// period on the suffix). Casing of everything else is preserved.
#[must_use]
pub fn normalize_address(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    let suffix_re = Regex::new(&format!(r"(?i)\b({STREET_SUFFIXES})\b\.?")).expect("valid regex");
    suffix_re
        .replace_all(&collapsed, |caps: &regex::Captures<'_>| {
            caps[1].to_lowercase()
        })
        .into_owned()
}

/// Reduce a URL to its registrable host for same-site comparison: scheme
/// and `www.` stripped, path dropped, lowercased.
#[must_use]
pub fn registrable_domain(url: &str) -> String {
    let trimmed = url.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let without_www = without_scheme.strip_prefix("www.").unwrap_or(without_scheme);
    let host = without_www.split('/').next().unwrap_or(without_www);
    host.to_lowercase()
}
