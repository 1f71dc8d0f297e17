//! Citation and social aggregation.
//!
//! Merges per-platform social URLs discovered in search results with the
//! links the business's own website self-reports, without double-counting,
//! and measures directory coverage against the tier-1 and industry
//! directory sets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use lva_core::{AnchorRecord, RawResult, SocialLinks, SocialPlatform};

use crate::nap::NapFacts;

/// High-authority listing sites every local business is expected on.
pub const TIER1_DIRECTORIES: [&str; 4] =
    ["yelp.com", "bbb.org", "yellowpages.com", "facebook.com"];

/// Directory sets per industry, matched by business-type keyword
/// substring. Unmatched types get the generic set.
const INDUSTRY_DIRECTORIES: [(&[&str], &[&str]); 5] = [
    (
        &["contractor", "roofing", "plumbing", "hvac", "electric", "landscap", "remodel",
          "construction", "handyman"],
        &["angi.com", "houzz.com", "homeadvisor.com", "thumbtack.com"],
    ),
    (
        &["restaurant", "cafe", "bakery", "catering", "food", "pizza"],
        &["opentable.com", "grubhub.com", "doordash.com"],
    ),
    (
        &["dental", "dentist", "medical", "chiropract", "clinic", "therapy"],
        &["healthgrades.com", "zocdoc.com"],
    ),
    (&["law", "legal", "attorney"], &["avvo.com", "findlaw.com"]),
    (
        &["salon", "spa", "beauty", "barber", "nail"],
        &["booksy.com", "styleseat.com"],
    ),
];

/// Generic industry directories for unmatched business types.
const GENERIC_INDUSTRY_DIRECTORIES: [&str; 2] = ["angi.com", "thumbtack.com"];

/// One directory or social listing surfaced by the search collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryLink {
    pub title: String,
    pub url: String,
    pub domain: String,
}

/// Directory coverage section of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationAnalysis {
    pub tier1_found: Vec<String>,
    pub tier1_missing: Vec<String>,
    pub industry_found: Vec<String>,
    pub industry_missing: Vec<String>,
    /// Found directories over all checked directories, 0-100.
    pub citation_completion_rate: u32,
    pub directory_links: Vec<DirectoryLink>,
    pub social_citations: Vec<DirectoryLink>,
}

/// NAP section of the report: what was trusted, what was found, how
/// consistent they are.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NapSummary {
    pub business_name: String,
    pub anchor_phone: Option<String>,
    pub anchor_address: Option<String>,
    pub found_phones: Vec<String>,
    pub found_addresses: Vec<String>,
    pub primary_website: Option<String>,
    pub all_websites: Vec<String>,
    pub consistent: bool,
    pub consistency_score: u32,
    pub inconsistency_count: usize,
}

impl NapSummary {
    #[must_use]
    pub fn build(
        business_name: &str,
        anchor: &AnchorRecord,
        facts: &NapFacts,
        consistency_score: u32,
        inconsistency_count: usize,
    ) -> Self {
        Self {
            business_name: business_name.to_string(),
            anchor_phone: anchor.phone.clone(),
            anchor_address: anchor.address.clone(),
            found_phones: facts.phones.clone(),
            found_addresses: facts.addresses.clone(),
            primary_website: facts
                .websites
                .first()
                .cloned()
                .or_else(|| anchor.website.clone()),
            all_websites: facts.websites.clone(),
            consistent: inconsistency_count == 0,
            consistency_score,
            inconsistency_count,
        }
    }
}

/// Where the merged social links came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialDataSource {
    pub from_search: usize,
    pub from_website: usize,
    pub total_found: usize,
}

/// Social section of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialSummary {
    pub platforms: Vec<SocialPlatform>,
    pub social_score: u32,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub data_source: SocialDataSource,
}

impl SocialSummary {
    #[must_use]
    pub fn build(
        merged: &SocialLinks,
        search: &SocialLinks,
        website: &BTreeMap<SocialPlatform, String>,
    ) -> Self {
        let first = |platform: SocialPlatform| {
            merged
                .get(&platform)
                .and_then(|urls| urls.first())
                .cloned()
        };
        let platforms: Vec<SocialPlatform> = SocialPlatform::ALL
            .into_iter()
            .filter(|p| merged.get(p).is_some_and(|urls| !urls.is_empty()))
            .collect();

        Self {
            social_score: social_score(merged),
            facebook: first(SocialPlatform::Facebook),
            instagram: first(SocialPlatform::Instagram),
            linkedin: first(SocialPlatform::Linkedin),
            twitter: first(SocialPlatform::Twitter),
            data_source: SocialDataSource {
                from_search: search
                    .values()
                    .filter(|urls| !urls.is_empty())
                    .count(),
                from_website: website
                    .values()
                    .filter(|url| !url.trim().is_empty())
                    .count(),
                total_found: platforms.len(),
            },
            platforms,
        }
    }
}

/// Merge search-derived social links with the website's self-reported
/// links, website first, appending only URLs not already present (string
/// equality after trim).
#[must_use]
pub fn merge_social(
    search: &SocialLinks,
    website: &BTreeMap<SocialPlatform, String>,
) -> SocialLinks {
    let mut merged = SocialLinks::new();

    for platform in SocialPlatform::ALL {
        let mut urls: Vec<String> = Vec::new();

        if let Some(link) = website.get(&platform) {
            let trimmed = link.trim();
            if !trimmed.is_empty() {
                urls.push(trimmed.to_string());
            }
        }
        if let Some(found) = search.get(&platform) {
            for link in found {
                let trimmed = link.trim();
                if !trimmed.is_empty() && !urls.iter().any(|u| u == trimmed) {
                    urls.push(trimmed.to_string());
                }
            }
        }

        if !urls.is_empty() {
            merged.insert(platform, urls);
        }
    }

    merged
}

/// Social sub-score: platforms present over the four tracked platforms,
/// as a rounded percentage.
#[must_use]
pub fn social_score(merged: &SocialLinks) -> u32 {
    let found = SocialPlatform::ALL
        .iter()
        .filter(|p| merged.get(*p).is_some_and(|urls| !urls.is_empty()))
        .count();

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = ((found as f64 / SocialPlatform::ALL.len() as f64) * 100.0).round() as u32;
    score
}

/// Industry directory set for a business type.
#[must_use]
pub fn industry_directories(business_type: &str) -> Vec<&'static str> {
    let haystack = business_type.to_lowercase();
    INDUSTRY_DIRECTORIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| haystack.contains(k)))
        .map_or_else(
            || GENERIC_INDUSTRY_DIRECTORIES.to_vec(),
            |(_, dirs)| dirs.to_vec(),
        )
}

/// Measure directory coverage across the filtered search results.
///
/// A directory counts as found when any result's domain contains its
/// token. The completion rate is found over checked across both the
/// tier-1 and industry sets.
#[must_use]
pub fn analyze_directories(results: &[RawResult], business_type: &str) -> CitationAnalysis {
    let domains: Vec<String> = results
        .iter()
        .map(|r| {
            if r.domain.is_empty() {
                lva_extract::registrable_domain(&r.url)
            } else {
                r.domain.to_lowercase()
            }
        })
        .collect();
    let present = |directory: &str| domains.iter().any(|d| d.contains(directory));

    let (tier1_found, tier1_missing): (Vec<_>, Vec<_>) = TIER1_DIRECTORIES
        .iter()
        .map(|d| (*d).to_string())
        .partition(|d| present(d));

    let industry = industry_directories(business_type);
    let (industry_found, industry_missing): (Vec<_>, Vec<_>) = industry
        .iter()
        .map(|d| (*d).to_string())
        .partition(|d| present(d));

    let checked = TIER1_DIRECTORIES.len() + industry.len();
    let found = tier1_found.len() + industry_found.len();
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let citation_completion_rate = ((found as f64 / checked as f64) * 100.0).round() as u32;

    let is_social = |domain: &str| {
        SocialPlatform::ALL
            .iter()
            .map(|p| format!("{p}.com"))
            .any(|token| domain.contains(&token))
            || domain == "x.com"
            || domain.ends_with(".x.com")
    };
    let is_directory = |domain: &str| {
        TIER1_DIRECTORIES.iter().chain(industry.iter()).any(|d| domain.contains(d))
    };

    let mut directory_links = Vec::new();
    let mut social_citations = Vec::new();
    for (result, domain) in results.iter().zip(&domains) {
        let link = DirectoryLink {
            title: result.title.clone(),
            url: result.url.clone(),
            domain: domain.clone(),
        };
        if is_social(domain) && !domain.contains("facebook.com") {
            social_citations.push(link);
        } else if is_directory(domain) {
            directory_links.push(link);
        }
    }

    CitationAnalysis {
        tier1_found,
        tier1_missing,
        industry_found,
        industry_missing,
        citation_completion_rate,
        directory_links,
        social_citations,
    }
}

#[cfg(test)]
#[path = "citations_test.rs"]
mod tests;
