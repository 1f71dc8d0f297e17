//! Core identity and inconsistency types shared across the audit engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The business under audit, as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDescriptor {
    pub business_name: String,
    pub city: String,
    pub state: String,
    pub website: Option<String>,
    /// Free-text category ("roofing contractor", "dental clinic", ...).
    /// Matched against benchmark keyword substrings, never parsed.
    pub business_type: String,
}

/// Trusted reference identity for one audit run.
///
/// Sourced from the business-profile collaborator at audit start and
/// immutable afterwards. All inconsistency comparisons are directional:
/// the anchor is ground truth and is never adjusted to match found data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorRecord {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
}

/// One search result from the search collaborator. Consumed once per run,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResult {
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    pub url: String,
    #[serde(default)]
    pub domain: String,
}

impl RawResult {
    /// The combined text a result is matched against: title, snippet, and
    /// URL joined with single spaces.
    #[must_use]
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.title, self.snippet, self.url)
    }
}

/// The four social platforms the audit tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Linkedin,
    Twitter,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 4] = [
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Linkedin,
        SocialPlatform::Twitter,
    ];
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocialPlatform::Facebook => write!(f, "facebook"),
            SocialPlatform::Instagram => write!(f, "instagram"),
            SocialPlatform::Linkedin => write!(f, "linkedin"),
            SocialPlatform::Twitter => write!(f, "twitter"),
        }
    }
}

/// Platform to matched-URL list. `BTreeMap` keeps serialized output and
/// iteration order deterministic.
pub type SocialLinks = BTreeMap<SocialPlatform, Vec<String>>;

/// Identity facts pulled out of one block of free text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedIdentity {
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
}

impl ExtractedIdentity {
    /// True when nothing at all was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phone.is_none()
            && self.address.is_none()
            && self.website.is_none()
            && self.social_links.is_empty()
    }
}

/// Urgency of one inconsistency. Drives both the penalty amount and the
/// reported priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InconsistencyKind {
    Phone,
    Address,
    Website,
}

/// One detected mismatch between found identity data and the anchor record.
///
/// `expected` always carries the anchor's (normalized) value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inconsistency {
    #[serde(rename = "type")]
    pub kind: InconsistencyKind,
    pub field: String,
    pub expected: String,
    pub found: String,
    pub severity: Severity,
    pub impact: String,
    pub action: String,
}
