//! Phone number extraction from free text.

use regex::Regex;

use crate::normalize::normalize_phone;

/// Extract the first plausible US phone number from `text`, normalized.
///
/// Candidates match `(###) ###-####` with optional punctuation variants. A
/// candidate is rejected when its digit string is all one digit, the
/// literal ascending sequence, starts with `000`/`111`, or has an area
/// code outside `valid_area_codes`. An empty `valid_area_codes` slice
/// means no area-code constraint (accept-all policy).
#[must_use]
pub fn extract_phone(text: &str, valid_area_codes: &[String]) -> Option<String> {
    let pattern = Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid regex");

    let result = pattern
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|candidate| is_valid_candidate(candidate, valid_area_codes))
        .map(normalize_phone);
    result
}

fn is_valid_candidate(candidate: &str, valid_area_codes: &[String]) -> bool {
    let digits: String = candidate.chars().filter(char::is_ascii_digit).collect();

    let all_same = digits
        .chars()
        .next()
        .is_some_and(|first| digits.chars().all(|c| c == first));
    let basic_valid = !all_same
        && digits != "1234567890"
        && !digits.starts_with("000")
        && !digits.starts_with("111")
        && (digits.len() == 10 || (digits.len() == 11 && digits.starts_with('1')));
    if !basic_valid {
        return false;
    }

    let area_code = &digits[0..3];
    valid_area_codes.is_empty() || valid_area_codes.iter().any(|code| code == area_code)
}
