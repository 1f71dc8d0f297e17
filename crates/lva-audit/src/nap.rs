//! NAP reconciliation against the anchor record.
//!
//! Comparisons are directional: the anchor is ground truth, found values
//! are the suspects, and `expected` on every emitted inconsistency carries
//! the anchor's normalized value. The sub-score is an unweighted linear
//! penalty model: `max(0, 100 - sum of severity penalties)`.

use lva_core::{
    AnchorRecord, ExtractedIdentity, Inconsistency, InconsistencyKind, Severity,
    SeverityPenalties,
};
use lva_extract::{normalize_address, normalize_phone, registrable_domain};

/// Unique phone/address/website values found across all filtered results.
#[derive(Debug, Clone, Default)]
pub struct NapFacts {
    pub phones: Vec<String>,
    pub addresses: Vec<String>,
    pub websites: Vec<String>,
}

impl NapFacts {
    /// Collect unique facts from extracted identities, preserving first-seen
    /// order.
    #[must_use]
    pub fn collect(identities: &[ExtractedIdentity]) -> Self {
        let mut facts = NapFacts::default();
        for identity in identities {
            if let Some(phone) = &identity.phone {
                push_unique(&mut facts.phones, phone);
            }
            if let Some(address) = &identity.address {
                push_unique(&mut facts.addresses, address);
            }
            if let Some(website) = &identity.website {
                push_unique(&mut facts.websites, website);
            }
        }
        facts
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// Diff found identity facts against the anchor record.
///
/// Emits one high-severity inconsistency per mismatching phone, one
/// medium-severity inconsistency per mismatching address (or a single one
/// when no address was found at all), and at most one low-severity website
/// inconsistency, only when other websites were found but none shares the
/// anchor's registrable domain. Anchor fields that are absent are skipped:
/// with no trusted value there is nothing to be inconsistent with.
///
/// Deterministic: the same facts and anchor always reproduce the same
/// list.
#[must_use]
pub fn reconcile(facts: &NapFacts, anchor: &AnchorRecord) -> Vec<Inconsistency> {
    let mut inconsistencies = Vec::new();

    if let Some(anchor_phone) = anchor.phone.as_deref().map(normalize_phone) {
        for phone in &facts.phones {
            let found = normalize_phone(phone);
            if found != anchor_phone {
                inconsistencies.push(Inconsistency {
                    kind: InconsistencyKind::Phone,
                    field: "Phone Number".to_string(),
                    expected: anchor_phone.clone(),
                    found,
                    severity: Severity::High,
                    impact: "Customers may call the wrong number, hurting conversion rates"
                        .to_string(),
                    action: format!("Update directory listings to use {anchor_phone}"),
                });
            }
        }
    }

    if let Some(anchor_address) = anchor.address.as_deref().map(normalize_address) {
        if facts.addresses.is_empty() {
            inconsistencies.push(Inconsistency {
                kind: InconsistencyKind::Address,
                field: "Business Address".to_string(),
                expected: anchor_address,
                found: "Missing from search results".to_string(),
                severity: Severity::Medium,
                impact: "Reduced local search visibility and customer confusion".to_string(),
                action: "Add complete address to major directory listings".to_string(),
            });
        } else {
            for address in &facts.addresses {
                let found = normalize_address(address);
                if found != anchor_address {
                    inconsistencies.push(Inconsistency {
                        kind: InconsistencyKind::Address,
                        field: "Business Address".to_string(),
                        expected: anchor_address.clone(),
                        found,
                        severity: Severity::Medium,
                        impact: "Confuses search engines and customers about the business location"
                            .to_string(),
                        action: format!(
                            "Standardize address across all listings to {anchor_address}"
                        ),
                    });
                }
            }
        }
    }

    if let Some(anchor_website) = anchor.website.as_deref() {
        let anchor_domain = registrable_domain(anchor_website);
        let anchor_seen = facts
            .websites
            .iter()
            .any(|site| registrable_domain(site) == anchor_domain);

        // Absence of any website data is not itself flagged.
        if !anchor_seen && !facts.websites.is_empty() {
            inconsistencies.push(Inconsistency {
                kind: InconsistencyKind::Website,
                field: "Website URL".to_string(),
                expected: anchor_website.to_string(),
                found: "Different or missing website in listings".to_string(),
                severity: Severity::Low,
                impact: "May direct customers to the wrong website".to_string(),
                action: format!("Ensure {anchor_website} is listed in all directory profiles"),
            });
        }
    }

    inconsistencies
}

/// NAP sub-score: start at 100, subtract the configured penalty per
/// inconsistency, floor at 0.
#[must_use]
pub fn nap_score(inconsistencies: &[Inconsistency], penalties: &SeverityPenalties) -> u32 {
    let total: u32 = inconsistencies
        .iter()
        .map(|inc| penalties.penalty(inc.severity))
        .sum();
    100_u32.saturating_sub(total)
}

#[cfg(test)]
#[path = "nap_test.rs"]
mod tests;
