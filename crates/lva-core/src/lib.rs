//! Shared domain types and configuration for the local visibility audit
//! engine.
//!
//! Everything here is pure data: the analysis logic lives in `lva-extract`
//! and `lva-audit`. Scoring constants are carried as named, injectable
//! tables rather than literals so alternate policies can be substituted in
//! tests without touching control flow.

pub mod app_config;
pub mod benchmarks;
pub mod config;
pub mod error;
pub mod payloads;
pub mod types;

pub use app_config::{load_app_config, load_app_config_from_env, AppConfig, Environment};
pub use benchmarks::{BenchmarkRow, BenchmarkTable};
pub use config::{
    AuditConfig, CompositeWeights, FallbackConfig, PercentileThresholds, RankingPointsTable,
    ScoringConfig, SeverityPenalties, TriageThresholds,
};
pub use error::{ConfigError, ProviderError};
pub use payloads::{
    CompetitorReport, KeywordRanking, KeywordReport, PerformanceReport, ReviewReport,
    SchemaReport, WebsiteReport,
};
pub use types::{
    AnchorRecord, BusinessDescriptor, ExtractedIdentity, Inconsistency, InconsistencyKind,
    RawResult, Severity, SocialLinks, SocialPlatform,
};
