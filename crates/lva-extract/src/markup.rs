//! Structured-data markup scanning over already-fetched HTML.
//!
//! Fetching the page belongs to the website-crawl collaborator; this module
//! only inspects the `<script type="application/ld+json">` blocks of HTML
//! it is handed. A malformed block is recorded as a warning and scanning
//! continues with the remaining blocks.

use regex::Regex;

use lva_core::SchemaReport;

/// Schema.org types accepted as a business schema.
const BUSINESS_TYPES: [&str; 10] = [
    "LocalBusiness",
    "Organization",
    "Contractor",
    "HomeAndConstructionBusiness",
    "GeneralContractor",
    "ElectricalContractor",
    "PlumbingContractor",
    "RoofingContractor",
    "MovingCompany",
    "LockSmith",
];

/// Required fields for a complete local-business schema. Each missing one
/// costs 33 points.
const REQUIRED_FIELDS: [&str; 3] = ["name", "address", "telephone"];

/// Recommended fields worth 2 bonus points each, capped at 10.
const RECOMMENDED_FIELDS: [&str; 7] = [
    "url",
    "description",
    "image",
    "priceRange",
    "geo",
    "openingHours",
    "areaServed",
];

/// Scan HTML for JSON-LD business markup and score its completeness.
///
/// The best-scoring business schema on the page determines the report;
/// non-business schema types are listed but do not score. Never errors:
/// unparsable blocks accumulate as warnings.
#[must_use]
pub fn scan_structured_data(html: &str) -> SchemaReport {
    let script_re = Regex::new(
        r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#,
    )
    .expect("valid regex");

    let mut report = SchemaReport::default();
    let mut best_score: Option<u32> = None;

    for (index, cap) in script_re.captures_iter(html).enumerate() {
        let Some(block) = cap.get(1) else { continue };

        let value: serde_json::Value = match serde_json::from_str(block.as_str().trim()) {
            Ok(v) => v,
            Err(e) => {
                report
                    .warnings
                    .push(format!("JSON parse error in script {}: {e}", index + 1));
                continue;
            }
        };

        for item in flatten_jsonld(value) {
            let Some(schema_type) = matched_type(&item) else {
                continue;
            };
            if !report.schema_types.contains(&schema_type) {
                report.schema_types.push(schema_type.clone());
            }

            if !is_business_type(&schema_type) {
                continue;
            }

            let (score, missing) = score_business_schema(&item);
            if best_score.is_none_or(|best| score > best) {
                best_score = Some(score);
                report.has_local_business = true;
                report.markup_score = score;
                report.missing_fields = missing;
            }
        }
    }

    tracing::debug!(
        has_local_business = report.has_local_business,
        score = report.markup_score,
        warnings = report.warnings.len(),
        "structured data scan finished"
    );
    report
}

/// Expand a top-level JSON-LD value into candidate items: arrays flatten,
/// and `@graph` containers contribute their members alongside the wrapper.
fn flatten_jsonld(value: serde_json::Value) -> Vec<serde_json::Value> {
    let top_level: Vec<serde_json::Value> = match value {
        serde_json::Value::Array(items) => items,
        other => vec![other],
    };

    let mut items = Vec::new();
    for item in top_level {
        if let Some(graph) = item.get("@graph").and_then(serde_json::Value::as_array) {
            items.extend(graph.iter().cloned());
        }
        items.push(item);
    }
    items
}

/// The item's declared type. `@type` may be a string or an array of
/// strings; an array resolves to its first business type if any, else the
/// first element.
fn matched_type(item: &serde_json::Value) -> Option<String> {
    let node = item.get("@type").or_else(|| item.get("type"))?;

    if let Some(s) = node.as_str() {
        return Some(s.to_string());
    }
    if let Some(arr) = node.as_array() {
        let strings: Vec<&str> = arr.iter().filter_map(|v| v.as_str()).collect();
        let business = strings.iter().find(|s| is_business_type(s));
        return business
            .or(strings.first())
            .map(|s| (*s).to_string());
    }
    None
}

fn is_business_type(schema_type: &str) -> bool {
    BUSINESS_TYPES
        .iter()
        .any(|t| t.eq_ignore_ascii_case(schema_type))
}

/// Score one business schema: 100 minus 33 per missing required field,
/// plus 2 bonus points per recommended field present (max 10), capped at
/// 100.
fn score_business_schema(item: &serde_json::Value) -> (u32, Vec<String>) {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !field_present(item, field))
        .map(|field| (*field).to_string())
        .collect();

    #[allow(clippy::cast_possible_truncation)]
    let base = 100_u32.saturating_sub(33 * missing.len() as u32);

    #[allow(clippy::cast_possible_truncation)]
    let bonus = RECOMMENDED_FIELDS
        .iter()
        .filter(|field| field_present(item, field))
        .count() as u32
        * 2;

    ((base + bonus.min(10)).min(100), missing)
}

fn field_present(item: &serde_json::Value, field: &str) -> bool {
    match item.get(field) {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

#[cfg(test)]
#[path = "markup_test.rs"]
mod tests;
