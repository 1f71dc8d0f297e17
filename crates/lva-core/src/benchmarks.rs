//! Industry benchmark table.
//!
//! Benchmark rows are looked up by matching the business-type string
//! against each row's keyword substrings, falling back to a generic row
//! when nothing matches. A built-in table covers the common verticals; a
//! YAML file can replace it wholesale.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Benchmark values for one industry vertical.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRow {
    pub label: String,
    /// Case-insensitive substrings matched against the business type.
    pub keywords: Vec<String>,
    pub avg_review_count: f64,
    pub avg_rating: f64,
    pub avg_photo_count: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkTable {
    pub rows: Vec<BenchmarkRow>,
    /// Used when no row's keywords match the business type.
    pub default_row: BenchmarkRow,
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl BenchmarkTable {
    /// The built-in benchmark table.
    #[must_use]
    pub fn builtin() -> Self {
        let row = |label: &str, keywords: &[&str], reviews: f64, rating: f64, photos: f64| {
            BenchmarkRow {
                label: label.to_string(),
                keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
                avg_review_count: reviews,
                avg_rating: rating,
                avg_photo_count: photos,
            }
        };

        Self {
            rows: vec![
                row(
                    "Home Services & Contractors",
                    &[
                        "contractor", "roofing", "plumbing", "hvac", "electric", "landscap",
                        "remodel", "construction", "handyman",
                    ],
                    45.0,
                    4.5,
                    25.0,
                ),
                row(
                    "Restaurants & Food",
                    &["restaurant", "cafe", "bakery", "catering", "food", "pizza"],
                    250.0,
                    4.2,
                    120.0,
                ),
                row(
                    "Health & Medical",
                    &["dental", "dentist", "medical", "chiropract", "clinic", "therapy"],
                    85.0,
                    4.7,
                    30.0,
                ),
                row(
                    "Legal Services",
                    &["law", "legal", "attorney"],
                    60.0,
                    4.8,
                    15.0,
                ),
                row(
                    "Beauty & Wellness",
                    &["salon", "spa", "beauty", "barber", "nail"],
                    110.0,
                    4.6,
                    60.0,
                ),
            ],
            default_row: row("General Local Business", &[], 75.0, 4.4, 35.0),
        }
    }

    /// Find the benchmark row for a business type by keyword substring
    /// match, case-insensitive. Falls back to the generic default row.
    #[must_use]
    pub fn lookup(&self, business_type: &str) -> &BenchmarkRow {
        let haystack = business_type.to_lowercase();
        self.rows
            .iter()
            .find(|row| {
                row.keywords
                    .iter()
                    .any(|keyword| haystack.contains(&keyword.to_lowercase()))
            })
            .unwrap_or(&self.default_row)
    }

    /// Load and validate a benchmark table from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or fails
    /// validation.
    pub fn from_yaml_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::BenchmarkFileIo {
                path: path.display().to_string(),
                source: e,
            })?;

        let table: BenchmarkTable = serde_yaml::from_str(&content)?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen_labels = HashSet::new();

        for row in self.rows.iter().chain(std::iter::once(&self.default_row)) {
            if row.label.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "benchmark row label must be non-empty".to_string(),
                ));
            }
            if !seen_labels.insert(row.label.to_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate benchmark row label: {}",
                    row.label
                )));
            }
            if row.avg_review_count < 0.0 || row.avg_rating < 0.0 || row.avg_photo_count < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "benchmark row '{}' has a negative benchmark value",
                    row.label
                )));
            }
            if row.avg_rating > 5.0 {
                return Err(ConfigError::Validation(format!(
                    "benchmark row '{}' has an average rating above 5.0",
                    row.label
                )));
            }
        }

        for row in &self.rows {
            if row.keywords.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "benchmark row '{}' has no keywords; only the default row may omit them",
                    row.label
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_contractor_keyword() {
        let table = BenchmarkTable::builtin();
        let row = table.lookup("Roofing Contractor");
        assert_eq!(row.label, "Home Services & Contractors");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = BenchmarkTable::builtin();
        assert_eq!(table.lookup("DENTAL office").label, "Health & Medical");
    }

    #[test]
    fn lookup_unmatched_type_falls_back_to_default() {
        let table = BenchmarkTable::builtin();
        assert_eq!(table.lookup("alpaca farm").label, "General Local Business");
    }

    #[test]
    fn builtin_table_passes_validation() {
        assert!(BenchmarkTable::builtin().validate().is_ok());
    }

    #[test]
    fn validation_rejects_duplicate_labels() {
        let mut table = BenchmarkTable::builtin();
        let mut dup = table.rows[0].clone();
        dup.keywords = vec!["x".to_string()];
        table.rows.push(dup);
        assert!(table.validate().is_err());
    }

    #[test]
    fn validation_rejects_empty_keywords_on_non_default_row() {
        let mut table = BenchmarkTable::builtin();
        table.rows[0].keywords.clear();
        assert!(table.validate().is_err());
    }

    #[test]
    fn validation_rejects_rating_above_five() {
        let mut table = BenchmarkTable::builtin();
        table.rows[0].avg_rating = 5.5;
        assert!(table.validate().is_err());
    }
}
