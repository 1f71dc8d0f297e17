//! Audit aggregation and identity-consistency engine.
//!
//! Consumes already-fetched collaborator payloads, reconciles found
//! identity facts against the trusted anchor record, merges citation and
//! social findings, and folds everything into one weighted composite
//! report. Reconciliation and scoring are pure functions; only the
//! provider fan-out suspends.

pub mod citations;
pub mod nap;
pub mod orchestrator;
pub mod progress;
pub mod providers;
pub mod report;
pub mod scoring;

pub use citations::{
    analyze_directories, merge_social, social_score, CitationAnalysis, DirectoryLink, NapSummary,
    SocialDataSource, SocialSummary,
};
pub use nap::{nap_score, reconcile, NapFacts};
pub use orchestrator::{run_audit, ModuleOutcome};
pub use progress::{AuditEvent, ProgressSender};
pub use providers::{AuditProviders, FixtureProviders, SchemaPayload};
pub use report::{
    audit_key, ActionItems, AuditReport, ErrorEnvelope, InconsistencySummary, ModuleStatus,
    ServiceResults, VisibilityBreakdown,
};
pub use scoring::{
    competitive_gaps, composite_score, improvement_signals, industry_position, triage_actions,
    ActionSignal, IndustryPosition, SignalCategory, TriageMetrics,
};
