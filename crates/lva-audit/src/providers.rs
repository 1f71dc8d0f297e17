//! Collaborator seam.
//!
//! The engine never fetches anything itself: providers hand it
//! already-fetched payloads. Each method is one module's contribution and
//! is independently wrapped by the orchestrator, so one provider's failure
//! cannot abort another's.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use lva_core::{
    AnchorRecord, BusinessDescriptor, CompetitorReport, KeywordReport, PerformanceReport,
    ProviderError, RawResult, ReviewReport, SchemaReport, WebsiteReport,
};

/// The structured-data collaborator may return a ready report, or the
/// fetched HTML for the engine to scan itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaPayload {
    Report(SchemaReport),
    Html(String),
}

/// Async fetchers for every collaborator payload the audit consumes.
#[async_trait]
pub trait AuditProviders {
    /// The trusted anchor record from the business-profile collaborator.
    async fn fetch_anchor(
        &self,
        descriptor: &BusinessDescriptor,
    ) -> Result<AnchorRecord, ProviderError>;

    /// Raw results from the search collaborator.
    async fn fetch_search_results(
        &self,
        descriptor: &BusinessDescriptor,
    ) -> Result<Vec<RawResult>, ProviderError>;

    async fn fetch_website_report(
        &self,
        descriptor: &BusinessDescriptor,
    ) -> Result<WebsiteReport, ProviderError>;

    async fn fetch_competitor_report(
        &self,
        descriptor: &BusinessDescriptor,
    ) -> Result<CompetitorReport, ProviderError>;

    async fn fetch_keyword_report(
        &self,
        descriptor: &BusinessDescriptor,
    ) -> Result<KeywordReport, ProviderError>;

    async fn fetch_performance_report(
        &self,
        descriptor: &BusinessDescriptor,
    ) -> Result<PerformanceReport, ProviderError>;

    async fn fetch_schema_payload(
        &self,
        descriptor: &BusinessDescriptor,
    ) -> Result<SchemaPayload, ProviderError>;

    async fn fetch_review_report(
        &self,
        descriptor: &BusinessDescriptor,
    ) -> Result<ReviewReport, ProviderError>;
}

/// Providers backed by pre-collected payloads: the CLI loads one of these
/// from a fixture file, and tests construct them directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureProviders {
    pub anchor: AnchorRecord,
    #[serde(default)]
    pub search_results: Vec<RawResult>,
    #[serde(default)]
    pub website: WebsiteReport,
    #[serde(default)]
    pub competitor: CompetitorReport,
    #[serde(default)]
    pub keyword: KeywordReport,
    #[serde(default)]
    pub performance: PerformanceReport,
    #[serde(default = "default_schema_payload")]
    pub schema: SchemaPayload,
    #[serde(default)]
    pub review: ReviewReport,
}

fn default_schema_payload() -> SchemaPayload {
    SchemaPayload::Report(SchemaReport::default())
}

#[async_trait]
impl AuditProviders for FixtureProviders {
    async fn fetch_anchor(
        &self,
        _descriptor: &BusinessDescriptor,
    ) -> Result<AnchorRecord, ProviderError> {
        Ok(self.anchor.clone())
    }

    async fn fetch_search_results(
        &self,
        _descriptor: &BusinessDescriptor,
    ) -> Result<Vec<RawResult>, ProviderError> {
        Ok(self.search_results.clone())
    }

    async fn fetch_website_report(
        &self,
        _descriptor: &BusinessDescriptor,
    ) -> Result<WebsiteReport, ProviderError> {
        Ok(self.website.clone())
    }

    async fn fetch_competitor_report(
        &self,
        _descriptor: &BusinessDescriptor,
    ) -> Result<CompetitorReport, ProviderError> {
        Ok(self.competitor.clone())
    }

    async fn fetch_keyword_report(
        &self,
        _descriptor: &BusinessDescriptor,
    ) -> Result<KeywordReport, ProviderError> {
        Ok(self.keyword.clone())
    }

    async fn fetch_performance_report(
        &self,
        _descriptor: &BusinessDescriptor,
    ) -> Result<PerformanceReport, ProviderError> {
        Ok(self.performance.clone())
    }

    async fn fetch_schema_payload(
        &self,
        _descriptor: &BusinessDescriptor,
    ) -> Result<SchemaPayload, ProviderError> {
        Ok(self.schema.clone())
    }

    async fn fetch_review_report(
        &self,
        _descriptor: &BusinessDescriptor,
    ) -> Result<ReviewReport, ProviderError> {
        Ok(self.review.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_payload_html_deserializes_from_bare_string() {
        let payload: SchemaPayload = serde_json::from_str(r#""<html></html>""#).unwrap();
        assert!(matches!(payload, SchemaPayload::Html(_)));
    }

    #[test]
    fn schema_payload_report_deserializes_from_object() {
        let payload: SchemaPayload =
            serde_json::from_str(r#"{"hasLocalBusiness": true, "markupScore": 67}"#).unwrap();
        match payload {
            SchemaPayload::Report(report) => {
                assert!(report.has_local_business);
                assert_eq!(report.markup_score, 67);
            }
            SchemaPayload::Html(_) => panic!("expected report variant"),
        }
    }

    #[test]
    fn fixture_providers_deserialize_with_defaults() {
        let json = r#"{"anchor": {"name": "Acme", "phone": null, "address": null, "website": null}}"#;
        let fixture: FixtureProviders = serde_json::from_str(json).unwrap();
        assert!(fixture.search_results.is_empty());
        assert!(matches!(fixture.schema, SchemaPayload::Report(_)));
    }
}
