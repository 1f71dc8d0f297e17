//! The final audit report: an immutable snapshot whose field names and
//! nesting are a contract with the downstream reporting surface.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use lva_core::{
    BenchmarkRow, CompetitorReport, Inconsistency, KeywordReport, PerformanceReport,
    ReviewReport, SchemaReport, Severity, WebsiteReport,
};

use crate::citations::{CitationAnalysis, NapSummary, SocialSummary};
use crate::scoring::IndustryPosition;

/// Weighted components of the composite visibility score. `local_ranking`
/// carries the ranking points, not the raw rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityBreakdown {
    pub gbp_completeness: u32,
    pub website_quality: u32,
    pub local_ranking: u32,
}

/// Inconsistency counts by severity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InconsistencySummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl InconsistencySummary {
    #[must_use]
    pub fn from_inconsistencies(inconsistencies: &[Inconsistency]) -> Self {
        let count = |severity: Severity| {
            inconsistencies
                .iter()
                .filter(|inc| inc.severity == severity)
                .count()
        };
        Self {
            total: inconsistencies.len(),
            high: count(Severity::High),
            medium: count(Severity::Medium),
            low: count(Severity::Low),
        }
    }
}

/// Triaged improvement backlog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItems {
    pub critical: Vec<String>,
    pub moderate: Vec<String>,
    pub minor: Vec<String>,
    pub all: Vec<String>,
}

/// How one module's payload was obtained.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleStatus {
    /// True when the static fallback payload was substituted.
    pub degraded: bool,
    pub error: Option<String>,
}

/// The raw collaborator payloads that fed the report, fresh or fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResults {
    pub website: WebsiteReport,
    pub competitor: CompetitorReport,
    pub keyword: KeywordReport,
    pub performance: PerformanceReport,
    pub schema: SchemaReport,
    pub review: ReviewReport,
}

/// The final immutable audit snapshot. Created once per run; persistence
/// is a collaborator concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub success: bool,
    pub audit_id: Uuid,
    /// Stable fingerprint of the audited identity; equal runs for the same
    /// business produce the same key.
    pub audit_key: String,
    pub business_name: String,
    pub city: String,
    pub state: String,
    pub generated_at: DateTime<Utc>,

    pub visibility_score: u32,
    pub visibility_breakdown: VisibilityBreakdown,

    pub nap_summary: NapSummary,
    pub social_summary: SocialSummary,
    pub citation_analysis: CitationAnalysis,
    pub inconsistencies: Vec<Inconsistency>,
    pub inconsistency_summary: InconsistencySummary,

    pub action_items: ActionItems,

    pub industry_benchmarks: BenchmarkRow,
    pub industry_position: IndustryPosition,
    pub competitive_gaps: Vec<String>,

    pub module_outcomes: BTreeMap<String, ModuleStatus>,
    pub service_results: ServiceResults,
}

/// Returned instead of a report only for catastrophic failures: conditions
/// arising before or outside the per-module guards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    pub message: String,
    pub generated_at: DateTime<Utc>,
}

impl ErrorEnvelope {
    #[must_use]
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
            generated_at: Utc::now(),
        }
    }
}

/// Stable audit fingerprint: SHA-256 over the normalized business
/// name/city/state, hex-encoded.
#[must_use]
pub fn audit_key(business_name: &str, city: &str, state: &str) -> String {
    let input = format!(
        "{}\x00{}\x00{}",
        business_name.trim().to_lowercase(),
        city.trim().to_lowercase(),
        state.trim().to_uppercase(),
    );
    format!("{:x}", Sha256::digest(input.as_bytes()))
}

#[cfg(test)]
mod tests {
    use lva_core::InconsistencyKind;

    use super::*;

    fn inconsistency(severity: Severity) -> Inconsistency {
        Inconsistency {
            kind: InconsistencyKind::Phone,
            field: "Phone Number".to_string(),
            expected: "a".to_string(),
            found: "b".to_string(),
            severity,
            impact: String::new(),
            action: String::new(),
        }
    }

    // -----------------------------------------------------------------------
    // audit_key
    // -----------------------------------------------------------------------

    #[test]
    fn audit_key_is_deterministic() {
        let key1 = audit_key("Acme Roofing", "Provo", "Utah");
        let key2 = audit_key("Acme Roofing", "Provo", "Utah");
        assert_eq!(key1, key2, "key must be deterministic");
        assert_eq!(key1.len(), 64, "SHA-256 hex is 64 chars");
    }

    #[test]
    fn audit_key_normalizes_case_and_whitespace() {
        assert_eq!(
            audit_key(" acme roofing ", "PROVO", "utah"),
            audit_key("Acme Roofing", "Provo", "Utah"),
        );
    }

    #[test]
    fn audit_key_differs_for_different_cities() {
        assert_ne!(
            audit_key("Acme Roofing", "Provo", "Utah"),
            audit_key("Acme Roofing", "Orem", "Utah"),
        );
    }

    // -----------------------------------------------------------------------
    // InconsistencySummary
    // -----------------------------------------------------------------------

    #[test]
    fn summary_counts_by_severity() {
        let list = vec![
            inconsistency(Severity::High),
            inconsistency(Severity::High),
            inconsistency(Severity::Medium),
            inconsistency(Severity::Low),
        ];
        let summary = InconsistencySummary::from_inconsistencies(&list);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.high, 2);
        assert_eq!(summary.medium, 1);
        assert_eq!(summary.low, 1);
    }

    #[test]
    fn error_envelope_is_marked_unsuccessful() {
        let envelope = ErrorEnvelope::new("ConfigError", "benchmark file unreadable");
        assert!(!envelope.success);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["generatedAt"].is_string());
    }
}
