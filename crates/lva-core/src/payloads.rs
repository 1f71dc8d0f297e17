//! Collaborator payload shapes.
//!
//! Each analysis module's collaborator returns one of these structures with
//! its raw findings. All fields carry serde defaults so a partially
//! populated payload still parses; the orchestrator substitutes the
//! configured fallback when a payload is missing or unusable outright.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::SocialPlatform;

/// Website-crawl collaborator output: content quality plus the social links
/// the site self-reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebsiteReport {
    /// Overall content quality, 0-100.
    pub quality_score: u32,
    /// How well the content targets the business's locality, 0-100.
    pub local_content_score: u32,
    pub content_pages: u32,
    /// Platform to profile URL, as linked from the site itself.
    pub social_media_links: BTreeMap<SocialPlatform, String>,
    /// Free-text improvement signals surfaced by the crawl.
    pub findings: Vec<String>,
}

/// Competitor-lookup collaborator output, including the business's own
/// profile completeness and map-pack rank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompetitorReport {
    /// Current local search rank; 0 means untracked.
    pub current_rank: u32,
    /// Business-profile completeness, 0-100.
    pub profile_completeness: u32,
    pub review_count: u32,
    pub rating: f64,
    pub photo_count: u32,
    pub advantages: Vec<String>,
    pub threats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRanking {
    pub keyword: String,
    pub position: u32,
}

/// Keyword-research collaborator output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeywordReport {
    pub ranking_keywords: Vec<KeywordRanking>,
    pub opportunity_keywords: Vec<String>,
    /// Mean difficulty of the analyzed keyword set, 0-100.
    pub avg_difficulty: u32,
}

/// Page-performance collaborator output. Scores are 0-100.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceReport {
    pub mobile_score: u32,
    pub desktop_score: u32,
    pub core_web_vitals: u32,
}

impl PerformanceReport {
    /// Mean of mobile and desktop scores, the value the triage rules use.
    #[must_use]
    pub fn average_score(&self) -> u32 {
        (self.mobile_score + self.desktop_score) / 2
    }
}

/// Structured-data validation output: either supplied ready-made by the
/// collaborator or produced by scanning fetched HTML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaReport {
    pub has_local_business: bool,
    /// Markup completeness, 0-100.
    pub markup_score: u32,
    pub schema_types: Vec<String>,
    pub missing_fields: Vec<String>,
    /// Per-block parse warnings accumulated while scanning.
    pub warnings: Vec<String>,
}

/// Review-aggregation collaborator output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewReport {
    pub average_rating: f64,
    pub total_reviews: u32,
    /// Overall sentiment in [-1.0, 1.0].
    pub sentiment: f64,
}
