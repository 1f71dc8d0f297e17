//! Injectable scoring, triage, and fallback configuration.
//!
//! Every constant the engine scores with lives in one of these tables. The
//! `Default` impls carry the documented contract values; tests and callers
//! can substitute alternates without touching engine control flow.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::payloads::{
    CompetitorReport, KeywordReport, PerformanceReport, ReviewReport, SchemaReport, WebsiteReport,
};
use crate::types::{RawResult, Severity};

/// Points subtracted from the NAP sub-score per inconsistency, by severity.
///
/// The NAP score is `max(0, 100 - sum of penalties)`, an unweighted linear
/// penalty model. That formula is the contract, not an implementation
/// detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityPenalties {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl Default for SeverityPenalties {
    fn default() -> Self {
        Self {
            high: 30,
            medium: 20,
            low: 10,
        }
    }
}

impl SeverityPenalties {
    #[must_use]
    pub fn penalty(&self, severity: Severity) -> u32 {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

/// Piecewise ranking-points table used by the composite visibility score.
///
/// Rank 0 means untracked and always yields 0 points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingPointsTable {
    pub first: u32,
    pub top_three: u32,
    pub top_five: u32,
    pub top_ten: u32,
    pub top_twenty: u32,
    pub beyond: u32,
}

impl Default for RankingPointsTable {
    fn default() -> Self {
        Self {
            first: 20,
            top_three: 15,
            top_five: 12,
            top_ten: 8,
            top_twenty: 4,
            beyond: 1,
        }
    }
}

impl RankingPointsTable {
    #[must_use]
    pub fn points(&self, rank: u32) -> u32 {
        match rank {
            0 => 0,
            1 => self.first,
            2..=3 => self.top_three,
            4..=5 => self.top_five,
            6..=10 => self.top_ten,
            11..=20 => self.top_twenty,
            _ => self.beyond,
        }
    }
}

/// One rung of the benchmark-percentile ladder: a metric whose
/// value/benchmark ratio is at least `min_ratio` lands at `percentile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentileTier {
    pub min_ratio: f64,
    pub percentile: u32,
}

/// Benchmark-percentile ladder, checked top down; `floor` applies below the
/// lowest rung. A zero or missing benchmark yields percentile 0, never a
/// division error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentileThresholds {
    pub tiers: Vec<PercentileTier>,
    pub floor: u32,
}

impl Default for PercentileThresholds {
    fn default() -> Self {
        // The 45th-percentile rung opens at 0.75 so that near-benchmark
        // ratios like 0.79 land at 45, not 30.
        let tiers = [
            (2.0, 95),
            (1.5, 85),
            (1.2, 75),
            (1.0, 60),
            (0.75, 45),
            (0.6, 30),
            (0.4, 20),
        ]
        .into_iter()
        .map(|(min_ratio, percentile)| PercentileTier {
            min_ratio,
            percentile,
        })
        .collect();
        Self { tiers, floor: 10 }
    }
}

impl PercentileThresholds {
    #[must_use]
    pub fn percentile(&self, value: f64, benchmark: f64) -> u32 {
        if benchmark <= 0.0 {
            return 0;
        }
        let ratio = value / benchmark;
        self.tiers
            .iter()
            .find(|tier| ratio >= tier.min_ratio)
            .map_or(self.floor, |tier| tier.percentile)
    }
}

/// Composite visibility score weights.
///
/// `composite = round(profile_completeness * 0.4 + website_quality * 0.4)
/// + ranking points`. With saturated components and a #1 rank the sum
/// exceeds 100; the observed behavior leaves it unclamped, so clamping is
/// an explicit opt-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeWeights {
    pub profile_completeness: f64,
    pub website_quality: f64,
    pub clamp_composite: bool,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            profile_completeness: 0.4,
            website_quality: 0.4,
            clamp_composite: false,
        }
    }
}

/// Thresholds for bucketing improvement signals into critical / moderate /
/// minor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageThresholds {
    /// NAP score strictly below this is critical.
    pub critical_nap_score: u32,
    /// Citation completion rate strictly below this is moderate.
    pub moderate_directory_rate: u32,
    /// Speed scores inside `moderate_speed_low..=moderate_speed_high` are
    /// moderate; below the low bound they are already surfaced as critical
    /// by the performance module itself.
    pub moderate_speed_low: u32,
    pub moderate_speed_high: u32,
    /// Social score strictly below this is moderate.
    pub moderate_social_score: u32,
}

impl Default for TriageThresholds {
    fn default() -> Self {
        Self {
            critical_nap_score: 80,
            moderate_directory_rate: 50,
            moderate_speed_low: 50,
            moderate_speed_high: 70,
            moderate_social_score: 50,
        }
    }
}

/// All scoring tables bundled for injection into the scoring engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub severity: SeverityPenalties,
    pub ranking: RankingPointsTable,
    pub percentiles: PercentileThresholds,
    pub weights: CompositeWeights,
    pub triage: TriageThresholds,
}

/// One static neutral payload per module, substituted when that module
/// fails. Injected into the orchestrator so tests can swap policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FallbackConfig {
    pub website: WebsiteReport,
    pub competitor: CompetitorReport,
    pub keyword: KeywordReport,
    pub performance: PerformanceReport,
    pub schema: SchemaReport,
    pub review: ReviewReport,
    pub search_results: Vec<RawResult>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            website: WebsiteReport::default(),
            competitor: CompetitorReport::default(),
            keyword: KeywordReport {
                // An unknown keyword landscape is treated as maximally hard.
                avg_difficulty: 100,
                ..KeywordReport::default()
            },
            performance: PerformanceReport::default(),
            schema: SchemaReport::default(),
            review: ReviewReport::default(),
            search_results: Vec::new(),
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditConfig {
    pub scoring: ScoringConfig,
    pub fallbacks: FallbackConfig,
    /// Valid phone area codes per state. A state with no entry gets the
    /// accept-all policy.
    pub area_codes: BTreeMap<String, Vec<String>>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            fallbacks: FallbackConfig::default(),
            area_codes: default_area_codes(),
        }
    }
}

impl AuditConfig {
    /// Area codes considered valid for `state`; empty means no constraint.
    #[must_use]
    pub fn valid_area_codes(&self, state: &str) -> &[String] {
        self.area_codes
            .get(state)
            .map_or(&[], |codes| codes.as_slice())
    }
}

fn default_area_codes() -> BTreeMap<String, Vec<String>> {
    let table: [(&str, &[&str]); 5] = [
        ("Utah", &["385", "435", "801"]),
        (
            "California",
            &[
                "209", "213", "279", "310", "323", "408", "415", "424", "442", "510", "530",
                "559", "562", "619", "626", "628", "650", "657", "661", "669", "707", "714",
                "747", "760", "805", "818", "831", "858", "909", "916", "925", "949", "951",
            ],
        ),
        (
            "Texas",
            &[
                "214", "254", "281", "325", "346", "361", "409", "430", "432", "469", "512",
                "713", "737", "806", "817", "832", "903", "915", "936", "940", "956", "972",
                "979",
            ],
        ),
        (
            "Florida",
            &[
                "239", "305", "321", "352", "386", "407", "561", "727", "754", "772", "786",
                "813", "850", "863", "904", "941", "954",
            ],
        ),
        (
            "New York",
            &[
                "212", "315", "347", "516", "518", "585", "607", "631", "646", "680", "716",
                "718", "845", "914", "917", "929", "934",
            ],
        ),
    ];

    table
        .into_iter()
        .map(|(state, codes)| {
            (
                state.to_string(),
                codes.iter().map(|c| (*c).to_string()).collect(),
            )
        })
        .collect()
}
