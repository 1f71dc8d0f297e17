//! Composite scoring, benchmark positioning, and action triage.

use serde::{Deserialize, Serialize};

use lva_core::{
    BenchmarkRow, CompetitorReport, KeywordReport, PerformanceReport, ReviewReport, SchemaReport,
    ScoringConfig, TriageThresholds, WebsiteReport,
};

use crate::report::{ActionItems, VisibilityBreakdown};

/// Composite visibility score.
///
/// `round(profile_completeness * w1 + website_quality * w2)` plus the
/// piecewise ranking points. The sum can exceed 100 when both weighted
/// components saturate and the business ranks #1; it is clamped only when
/// `clamp_composite` is set.
#[must_use]
pub fn composite_score(
    profile_completeness: u32,
    website_quality: u32,
    rank: u32,
    config: &ScoringConfig,
) -> (u32, VisibilityBreakdown) {
    let ranking_points = config.ranking.points(rank);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let weighted = (f64::from(profile_completeness) * config.weights.profile_completeness
        + f64::from(website_quality) * config.weights.website_quality)
        .round() as u32;

    let mut score = weighted + ranking_points;
    if config.weights.clamp_composite {
        score = score.min(100);
    }

    let breakdown = VisibilityBreakdown {
        gbp_completeness: profile_completeness,
        website_quality,
        local_ranking: ranking_points,
    };
    (score, breakdown)
}

/// Percentile standing against the industry benchmark row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryPosition {
    pub review_percentile: u32,
    pub rating_percentile: u32,
    pub photo_percentile: u32,
}

/// Compare the business's competitor-module metrics to the benchmark row.
#[must_use]
pub fn industry_position(
    competitor: &CompetitorReport,
    benchmark: &BenchmarkRow,
    config: &ScoringConfig,
) -> IndustryPosition {
    let thresholds = &config.percentiles;
    IndustryPosition {
        review_percentile: thresholds
            .percentile(f64::from(competitor.review_count), benchmark.avg_review_count),
        rating_percentile: thresholds.percentile(competitor.rating, benchmark.avg_rating),
        photo_percentile: thresholds
            .percentile(f64::from(competitor.photo_count), benchmark.avg_photo_count),
    }
}

/// Gap statements for metrics sitting in the bottom quartile, plus any
/// threats the competitor module surfaced.
#[must_use]
pub fn competitive_gaps(
    position: &IndustryPosition,
    competitor: &CompetitorReport,
    benchmark: &BenchmarkRow,
) -> Vec<String> {
    let mut gaps = Vec::new();
    if position.review_percentile <= 25 {
        gaps.push(format!(
            "Review count in bottom 25% for {}",
            benchmark.label
        ));
    }
    if position.rating_percentile <= 25 {
        gaps.push(format!("Rating in bottom 25% for {}", benchmark.label));
    }
    if position.photo_percentile <= 25 {
        gaps.push(format!("Photo count in bottom 25% for {}", benchmark.label));
    }
    gaps.extend(competitor.threats.iter().cloned());
    gaps
}

/// What part of the audit produced a signal. Drives triage bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalCategory {
    Nap,
    Directory,
    Social,
    Performance,
    Schema,
    Content,
    Keyword,
    Review,
    Competitive,
}

/// One improvement signal awaiting triage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionSignal {
    pub text: String,
    pub category: SignalCategory,
}

impl ActionSignal {
    fn new(category: SignalCategory, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// The joined metrics the triage rules consult.
#[derive(Debug, Clone, Copy)]
pub struct TriageMetrics {
    pub nap_score: u32,
    pub citation_completion_rate: u32,
    pub social_score: u32,
    pub average_speed_score: u32,
    pub has_local_business_markup: bool,
}

/// Generate improvement signals from every module's findings.
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn improvement_signals(
    website: &WebsiteReport,
    competitor: &CompetitorReport,
    keyword: &KeywordReport,
    performance: &PerformanceReport,
    schema: &SchemaReport,
    review: &ReviewReport,
    inconsistency_count: usize,
    metrics: &TriageMetrics,
) -> Vec<ActionSignal> {
    let mut signals = Vec::new();

    if inconsistency_count > 0 {
        signals.push(ActionSignal::new(
            SignalCategory::Nap,
            format!("Fix {inconsistency_count} NAP inconsistencies found across directories"),
        ));
    }

    if metrics.citation_completion_rate < 100 {
        signals.push(ActionSignal::new(
            SignalCategory::Directory,
            "Increase directory listings for better local SEO visibility",
        ));
    }

    if metrics.social_score < 100 {
        signals.push(ActionSignal::new(
            SignalCategory::Social,
            "Add presence on major social platforms",
        ));
    }

    if schema.has_local_business {
        if !schema.missing_fields.is_empty() {
            signals.push(ActionSignal::new(
                SignalCategory::Schema,
                format!(
                    "Add missing schema fields: {}",
                    schema.missing_fields.join(", ")
                ),
            ));
        }
    } else {
        signals.push(ActionSignal::new(
            SignalCategory::Schema,
            "Add LocalBusiness schema markup with name, address, and telephone",
        ));
    }

    if metrics.average_speed_score < 70 {
        signals.push(ActionSignal::new(
            SignalCategory::Performance,
            "Optimize page speed for mobile devices",
        ));
    }
    if performance.core_web_vitals < 70 {
        signals.push(ActionSignal::new(
            SignalCategory::Performance,
            "Improve Core Web Vitals",
        ));
    }

    if review.total_reviews < 10 {
        signals.push(ActionSignal::new(
            SignalCategory::Review,
            "Increase review volume",
        ));
    }
    if review.average_rating > 0.0 && review.average_rating < 4.5 {
        signals.push(ActionSignal::new(
            SignalCategory::Review,
            "Raise the average review rating",
        ));
    }

    signals.extend(
        website
            .findings
            .iter()
            .map(|finding| ActionSignal::new(SignalCategory::Content, finding.clone())),
    );

    signals.extend(keyword.opportunity_keywords.iter().take(5).map(|kw| {
        ActionSignal::new(SignalCategory::Keyword, format!("Target keyword: \"{kw}\""))
    }));

    signals.extend(
        competitor
            .threats
            .iter()
            .map(|threat| ActionSignal::new(SignalCategory::Competitive, threat.clone())),
    );

    signals
}

/// Bucket every signal into critical / moderate / minor by the fixed rule
/// set, then deduplicate and sort alphabetically within each bucket.
#[must_use]
pub fn triage_actions(
    signals: Vec<ActionSignal>,
    metrics: &TriageMetrics,
    thresholds: &TriageThresholds,
) -> ActionItems {
    let mut critical = Vec::new();
    let mut moderate = Vec::new();
    let mut minor = Vec::new();

    for signal in signals {
        match bucket(&signal, metrics, thresholds) {
            Bucket::Critical => critical.push(signal.text),
            Bucket::Moderate => moderate.push(signal.text),
            Bucket::Minor => minor.push(signal.text),
        }
    }

    dedup_sort(&mut critical);
    dedup_sort(&mut moderate);
    dedup_sort(&mut minor);

    let mut all = Vec::new();
    for text in critical.iter().chain(moderate.iter()).chain(minor.iter()) {
        if !all.contains(text) {
            all.push(text.clone());
        }
    }

    ActionItems {
        critical,
        moderate,
        minor,
        all,
    }
}

enum Bucket {
    Critical,
    Moderate,
    Minor,
}

fn bucket(signal: &ActionSignal, metrics: &TriageMetrics, thresholds: &TriageThresholds) -> Bucket {
    match signal.category {
        SignalCategory::Schema if !metrics.has_local_business_markup => Bucket::Critical,
        SignalCategory::Nap if metrics.nap_score < thresholds.critical_nap_score => {
            Bucket::Critical
        }
        SignalCategory::Directory
            if metrics.citation_completion_rate < thresholds.moderate_directory_rate =>
        {
            Bucket::Moderate
        }
        SignalCategory::Performance
            if (thresholds.moderate_speed_low..=thresholds.moderate_speed_high)
                .contains(&metrics.average_speed_score) =>
        {
            Bucket::Moderate
        }
        SignalCategory::Social if metrics.social_score < thresholds.moderate_social_score => {
            Bucket::Moderate
        }
        _ => Bucket::Minor,
    }
}

fn dedup_sort(texts: &mut Vec<String>) {
    texts.sort();
    texts.dedup();
}

#[cfg(test)]
#[path = "scoring_test.rs"]
mod tests;
