//! Concurrent fan-out over all analysis modules with per-module fallback.
//!
//! Every provider call is wrapped by one generic run-with-fallback guard:
//! a module that fails is logged and replaced by its configured static
//! payload, and the scoring engine runs unconditionally on the joined
//! bundle. The pipeline degrades per module, never as a whole.

use std::collections::BTreeMap;
use std::future::Future;

use chrono::Utc;
use uuid::Uuid;

use lva_core::{
    AnchorRecord, AuditConfig, BenchmarkTable, BusinessDescriptor, ProviderError, SchemaReport,
};
use lva_extract::{
    extract_identity, filter_location_relevant, scan_structured_data, ExtractionContext,
};

use crate::citations::{analyze_directories, merge_social, NapSummary, SocialSummary};
use crate::nap::{nap_score, reconcile, NapFacts};
use crate::progress::{emit, AuditEvent, ProgressSender};
use crate::providers::{AuditProviders, SchemaPayload};
use crate::report::{
    audit_key, AuditReport, InconsistencySummary, ModuleStatus, ServiceResults,
};
use crate::scoring::{
    competitive_gaps, composite_score, improvement_signals, industry_position, triage_actions,
    TriageMetrics,
};

/// One module's settled result: a fresh payload, or the fallback with the
/// failure recorded.
#[derive(Debug, Clone)]
pub struct ModuleOutcome<T> {
    pub payload: T,
    pub degraded: bool,
    pub error: Option<String>,
}

impl<T> ModuleOutcome<T> {
    fn status(&self) -> ModuleStatus {
        ModuleStatus {
            degraded: self.degraded,
            error: self.error.clone(),
        }
    }
}

/// Run one module future, substituting `fallback` on failure.
///
/// This is the single guard every module goes through: failures are
/// logged, surfaced as `degraded`, and never propagated.
async fn run_module<T, F>(
    module: &'static str,
    fut: F,
    fallback: T,
    progress: Option<&ProgressSender>,
) -> ModuleOutcome<T>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    emit(progress, AuditEvent::ModuleStarted { module });

    let outcome = match fut.await {
        Ok(payload) => ModuleOutcome {
            payload,
            degraded: false,
            error: None,
        },
        Err(e) => {
            tracing::warn!(module, error = %e, "module failed, substituting fallback");
            ModuleOutcome {
                payload: fallback,
                degraded: true,
                error: Some(e.to_string()),
            }
        }
    };

    emit(
        progress,
        AuditEvent::ModuleSettled {
            module,
            degraded: outcome.degraded,
        },
    );
    outcome
}

/// Run the full audit: fan out to all collaborators, join, reconcile,
/// score, and assemble the report.
///
/// Never fails per-module: a collaborator error degrades only its own
/// contribution. The caller always receives a complete report shape.
pub async fn run_audit<P: AuditProviders + Sync>(
    providers: &P,
    descriptor: &BusinessDescriptor,
    config: &AuditConfig,
    benchmarks: &BenchmarkTable,
    progress: Option<ProgressSender>,
) -> AuditReport {
    let progress = progress.as_ref();
    tracing::info!(
        business = %descriptor.business_name,
        city = %descriptor.city,
        state = %descriptor.state,
        "starting visibility audit"
    );

    // With no profile data the descriptor itself is the best available
    // anchor: comparisons against absent fields are skipped downstream.
    let anchor_fallback = AnchorRecord {
        name: descriptor.business_name.clone(),
        phone: None,
        address: None,
        website: descriptor.website.clone(),
    };
    let schema_fallback = SchemaPayload::Report(config.fallbacks.schema.clone());

    // Fan out. Each call settles independently; the join is a barrier, not
    // first-to-finish. Results are merged by value below.
    let (anchor, search, website, competitor, keyword, performance, schema_payload, review) = futures::join!(
        run_module(
            "anchor",
            providers.fetch_anchor(descriptor),
            anchor_fallback,
            progress,
        ),
        run_module(
            "search",
            providers.fetch_search_results(descriptor),
            config.fallbacks.search_results.clone(),
            progress,
        ),
        run_module(
            "website",
            providers.fetch_website_report(descriptor),
            config.fallbacks.website.clone(),
            progress,
        ),
        run_module(
            "competitor",
            providers.fetch_competitor_report(descriptor),
            config.fallbacks.competitor.clone(),
            progress,
        ),
        run_module(
            "keyword",
            providers.fetch_keyword_report(descriptor),
            config.fallbacks.keyword.clone(),
            progress,
        ),
        run_module(
            "performance",
            providers.fetch_performance_report(descriptor),
            config.fallbacks.performance.clone(),
            progress,
        ),
        run_module(
            "schema",
            providers.fetch_schema_payload(descriptor),
            schema_fallback,
            progress,
        ),
        run_module(
            "review",
            providers.fetch_review_report(descriptor),
            config.fallbacks.review.clone(),
            progress,
        ),
    );
    emit(progress, AuditEvent::StageCompleted { stage: "modules" });

    // Everything below is pure and synchronous over the joined bundle.
    let schema_status = schema_payload.status();
    let schema_report: SchemaReport = match schema_payload.payload {
        SchemaPayload::Report(report) => report,
        SchemaPayload::Html(html) => scan_structured_data(&html),
    };

    // Citation pipeline: filter, extract, reconcile, aggregate.
    let ctx = ExtractionContext {
        city: descriptor.city.clone(),
        state: descriptor.state.clone(),
        valid_area_codes: config.valid_area_codes(&descriptor.state).to_vec(),
    };
    let relevant = filter_location_relevant(
        search.payload.clone(),
        &descriptor.city,
        &descriptor.state,
    );
    let identities: Vec<_> = relevant
        .iter()
        .map(|result| extract_identity(&result.combined_text(), &ctx))
        .collect();
    let facts = NapFacts::collect(&identities);

    let inconsistencies = reconcile(&facts, &anchor.payload);
    let consistency_score = nap_score(&inconsistencies, &config.scoring.severity);

    let search_social = identities.iter().fold(
        lva_core::SocialLinks::new(),
        |mut acc, identity| {
            for (platform, urls) in &identity.social_links {
                let entry = acc.entry(*platform).or_default();
                for url in urls {
                    if !entry.contains(url) {
                        entry.push(url.clone());
                    }
                }
            }
            acc
        },
    );
    let merged_social = merge_social(&search_social, &website.payload.social_media_links);

    let nap_summary = NapSummary::build(
        &descriptor.business_name,
        &anchor.payload,
        &facts,
        consistency_score,
        inconsistencies.len(),
    );
    let social_summary =
        SocialSummary::build(&merged_social, &search_social, &website.payload.social_media_links);
    let citation_analysis = analyze_directories(&relevant, &descriptor.business_type);
    emit(
        progress,
        AuditEvent::StageCompleted {
            stage: "reconciliation",
        },
    );

    // Scoring.
    let (visibility_score, visibility_breakdown) = composite_score(
        competitor.payload.profile_completeness,
        website.payload.quality_score,
        competitor.payload.current_rank,
        &config.scoring,
    );

    let benchmark_row = benchmarks.lookup(&descriptor.business_type).clone();
    let position = industry_position(&competitor.payload, &benchmark_row, &config.scoring);
    let gaps = competitive_gaps(&position, &competitor.payload, &benchmark_row);

    let metrics = TriageMetrics {
        nap_score: consistency_score,
        citation_completion_rate: citation_analysis.citation_completion_rate,
        social_score: social_summary.social_score,
        average_speed_score: performance.payload.average_score(),
        has_local_business_markup: schema_report.has_local_business,
    };
    let signals = improvement_signals(
        &website.payload,
        &competitor.payload,
        &keyword.payload,
        &performance.payload,
        &schema_report,
        &review.payload,
        inconsistencies.len(),
        &metrics,
    );
    let action_items = triage_actions(signals, &metrics, &config.scoring.triage);
    emit(progress, AuditEvent::StageCompleted { stage: "scoring" });

    // The citation module's contribution is derived from the anchor and
    // search fetches; it degrades when either of them did.
    let citation_status = ModuleStatus {
        degraded: anchor.degraded || search.degraded,
        error: anchor.error.clone().or_else(|| search.error.clone()),
    };
    let module_outcomes: BTreeMap<String, ModuleStatus> = [
        ("website".to_string(), website.status()),
        ("competitor".to_string(), competitor.status()),
        ("keyword".to_string(), keyword.status()),
        ("citation".to_string(), citation_status),
        ("performance".to_string(), performance.status()),
        ("schema".to_string(), schema_status),
        ("review".to_string(), review.status()),
    ]
    .into_iter()
    .collect();

    let degraded_count = module_outcomes.values().filter(|s| s.degraded).count();
    tracing::info!(
        visibility_score,
        nap_score = consistency_score,
        inconsistencies = inconsistencies.len(),
        degraded_modules = degraded_count,
        "audit complete"
    );

    AuditReport {
        success: true,
        audit_id: Uuid::new_v4(),
        audit_key: audit_key(
            &descriptor.business_name,
            &descriptor.city,
            &descriptor.state,
        ),
        business_name: descriptor.business_name.clone(),
        city: descriptor.city.clone(),
        state: descriptor.state.clone(),
        generated_at: Utc::now(),
        visibility_score,
        visibility_breakdown,
        nap_summary,
        social_summary,
        citation_analysis,
        inconsistency_summary: InconsistencySummary::from_inconsistencies(&inconsistencies),
        inconsistencies,
        action_items,
        industry_benchmarks: benchmark_row,
        industry_position: position,
        competitive_gaps: gaps,
        module_outcomes,
        service_results: ServiceResults {
            website: website.payload,
            competitor: competitor.payload,
            keyword: keyword.payload,
            performance: performance.payload,
            schema: schema_report,
            review: review.payload,
        },
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
