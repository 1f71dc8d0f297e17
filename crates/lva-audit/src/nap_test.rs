use lva_core::ExtractedIdentity;

use super::*;

fn anchor() -> AnchorRecord {
    AnchorRecord {
        name: "Acme Roofing".to_string(),
        phone: Some("(801) 555-1234".to_string()),
        address: Some("123 Main Street".to_string()),
        website: Some("https://acmeroofing.com".to_string()),
    }
}

fn facts(phones: &[&str], addresses: &[&str], websites: &[&str]) -> NapFacts {
    NapFacts {
        phones: phones.iter().map(|s| (*s).to_string()).collect(),
        addresses: addresses.iter().map(|s| (*s).to_string()).collect(),
        websites: websites.iter().map(|s| (*s).to_string()).collect(),
    }
}

// ---------------------------------------------------------------------------
// NapFacts::collect
// ---------------------------------------------------------------------------

#[test]
fn collect_deduplicates_preserving_order() {
    let identities = vec![
        ExtractedIdentity {
            phone: Some("(801) 555-1234".to_string()),
            address: Some("123 Main st".to_string()),
            ..ExtractedIdentity::default()
        },
        ExtractedIdentity {
            phone: Some("(801) 555-1234".to_string()),
            address: Some("456 Oak ave".to_string()),
            ..ExtractedIdentity::default()
        },
    ];
    let collected = NapFacts::collect(&identities);
    assert_eq!(collected.phones, ["(801) 555-1234"]);
    assert_eq!(collected.addresses, ["123 Main st", "456 Oak ave"]);
}

// ---------------------------------------------------------------------------
// Phone reconciliation
// ---------------------------------------------------------------------------

#[test]
fn matching_phone_in_different_format_is_consistent() {
    // Scenario: anchor "(801) 555-1234", found "801-555-1234". Formats
    // differ but normalized forms are equal, so no inconsistency.
    let found = facts(&["801-555-1234"], &["123 Main Street"], &[]);
    let inconsistencies = reconcile(&found, &anchor());
    assert!(inconsistencies.is_empty());
    assert_eq!(nap_score(&inconsistencies, &SeverityPenalties::default()), 100);
}

#[test]
fn mismatching_phone_is_high_severity_and_costs_30() {
    // Scenario: anchor "(801) 555-1234", found "8015559999".
    let found = facts(&["8015559999"], &["123 Main Street"], &[]);
    let inconsistencies = reconcile(&found, &anchor());

    assert_eq!(inconsistencies.len(), 1);
    let inc = &inconsistencies[0];
    assert_eq!(inc.kind, InconsistencyKind::Phone);
    assert_eq!(inc.severity, Severity::High);
    assert_eq!(inc.expected, "(801) 555-1234");
    assert_eq!(inc.found, "(801) 555-9999");
    assert_eq!(nap_score(&inconsistencies, &SeverityPenalties::default()), 70);
}

#[test]
fn every_distinct_mismatching_phone_is_flagged() {
    let found = facts(
        &["8015559999", "8015558888"],
        &["123 Main Street"],
        &[],
    );
    let inconsistencies = reconcile(&found, &anchor());
    assert_eq!(inconsistencies.len(), 2);
    assert!(inconsistencies
        .iter()
        .all(|inc| inc.kind == InconsistencyKind::Phone));
}

#[test]
fn absent_anchor_phone_skips_phone_comparison() {
    let mut a = anchor();
    a.phone = None;
    let found = facts(&["8015559999"], &["123 Main Street"], &[]);
    assert!(reconcile(&found, &a).is_empty());
}

// ---------------------------------------------------------------------------
// Address reconciliation
// ---------------------------------------------------------------------------

#[test]
fn no_addresses_found_emits_single_medium_missing() {
    let found = facts(&["(801) 555-1234"], &[], &[]);
    let inconsistencies = reconcile(&found, &anchor());

    assert_eq!(inconsistencies.len(), 1);
    let inc = &inconsistencies[0];
    assert_eq!(inc.kind, InconsistencyKind::Address);
    assert_eq!(inc.severity, Severity::Medium);
    assert_eq!(inc.found, "Missing from search results");
    assert_eq!(nap_score(&inconsistencies, &SeverityPenalties::default()), 80);
}

#[test]
fn equivalent_address_formats_are_consistent() {
    let found = facts(&["(801) 555-1234"], &["123  Main   St."], &[]);
    assert!(reconcile(&found, &anchor()).is_empty());
}

#[test]
fn mismatching_address_is_medium_severity() {
    let found = facts(&["(801) 555-1234"], &["999 Wrong Road"], &[]);
    let inconsistencies = reconcile(&found, &anchor());
    assert_eq!(inconsistencies.len(), 1);
    assert_eq!(inconsistencies[0].kind, InconsistencyKind::Address);
    assert_eq!(inconsistencies[0].severity, Severity::Medium);
    assert_eq!(inconsistencies[0].expected, "123 Main street");
}

// ---------------------------------------------------------------------------
// Website reconciliation
// ---------------------------------------------------------------------------

#[test]
fn different_domain_found_is_low_severity() {
    let found = facts(
        &["(801) 555-1234"],
        &["123 Main Street"],
        &["https://other-site.com"],
    );
    let inconsistencies = reconcile(&found, &anchor());
    assert_eq!(inconsistencies.len(), 1);
    assert_eq!(inconsistencies[0].kind, InconsistencyKind::Website);
    assert_eq!(inconsistencies[0].severity, Severity::Low);
}

#[test]
fn anchor_domain_seen_under_www_variant_is_consistent() {
    let found = facts(
        &["(801) 555-1234"],
        &["123 Main Street"],
        &["http://www.acmeroofing.com/contact"],
    );
    assert!(reconcile(&found, &anchor()).is_empty());
}

#[test]
fn zero_websites_found_is_not_flagged() {
    let found = facts(&["(801) 555-1234"], &["123 Main Street"], &[]);
    assert!(reconcile(&found, &anchor()).is_empty());
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

#[test]
fn severity_penalty_composition() {
    // 2 high + 1 medium => 100 - 30 - 30 - 20 = 20.
    let found = facts(
        &["8015559999", "8015558888"],
        &[],
        &[],
    );
    let inconsistencies = reconcile(&found, &anchor());
    assert_eq!(inconsistencies.len(), 3);
    assert_eq!(nap_score(&inconsistencies, &SeverityPenalties::default()), 20);
}

#[test]
fn two_high_and_one_low_score_30() {
    let found = facts(
        &["8015559999", "8015558888"],
        &["123 Main Street"],
        &["https://other-site.com"],
    );
    let inconsistencies = reconcile(&found, &anchor());
    assert_eq!(inconsistencies.len(), 3);
    assert_eq!(nap_score(&inconsistencies, &SeverityPenalties::default()), 30);
}

#[test]
fn score_never_goes_negative() {
    let found = facts(
        &["8015559999", "8015558888", "8015557777", "8015556666"],
        &[],
        &[],
    );
    let inconsistencies = reconcile(&found, &anchor());
    // 4 high + 1 medium = 140 points of penalty; floor at 0.
    assert_eq!(nap_score(&inconsistencies, &SeverityPenalties::default()), 0);
}

#[test]
fn alternate_penalty_table_is_honored() {
    let found = facts(&["8015559999"], &["123 Main Street"], &[]);
    let inconsistencies = reconcile(&found, &anchor());
    let lenient = SeverityPenalties {
        high: 5,
        medium: 3,
        low: 1,
    };
    assert_eq!(nap_score(&inconsistencies, &lenient), 95);
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn reconciliation_is_deterministic() {
    let found = facts(
        &["8015559999", "801-555-1234"],
        &["999 Wrong Road", "123 Main St"],
        &["https://other-site.com"],
    );
    let first = reconcile(&found, &anchor());
    let second = reconcile(&found, &anchor());
    assert_eq!(first, second);
}
