//! The `audit` command: load a fixture of collaborator payloads, run the
//! engine, and print the report as JSON.
//!
//! The caller always gets a report-shaped object on stdout: failures
//! before the engine starts (unreadable fixture, bad benchmark file) print
//! a timestamped error envelope instead of a report.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use lva_audit::{run_audit, AuditEvent, ErrorEnvelope, FixtureProviders};
use lva_core::{AppConfig, AuditConfig, BenchmarkTable, BusinessDescriptor};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuditFixture {
    descriptor: BusinessDescriptor,
    providers: FixtureProviders,
}

pub(crate) async fn run(app_config: &AppConfig, fixture_path: &Path) -> anyhow::Result<()> {
    let fixture = match load_fixture(fixture_path) {
        Ok(fixture) => fixture,
        Err(e) => return fail("FixtureError", &e),
    };

    let benchmarks = match load_benchmarks(app_config) {
        Ok(table) => table,
        Err(e) => return fail("ConfigError", &e),
    };

    let config = AuditConfig::default();

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let listener = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                AuditEvent::ModuleStarted { module } => {
                    tracing::info!(module, "module started");
                }
                AuditEvent::ModuleSettled { module, degraded } => {
                    tracing::info!(module, degraded, "module settled");
                }
                AuditEvent::StageCompleted { stage } => {
                    tracing::info!(stage, "stage completed");
                }
            }
        }
    });

    let report = run_audit(
        &fixture.providers,
        &fixture.descriptor,
        &config,
        &benchmarks,
        Some(tx),
    )
    .await;
    listener.await.ok();

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Print the catastrophic-failure envelope and exit non-zero.
fn fail(error: &str, cause: &anyhow::Error) -> anyhow::Result<()> {
    let envelope = ErrorEnvelope::new(error, format!("{cause:#}"));
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    std::process::exit(1);
}

fn load_fixture(path: &Path) -> anyhow::Result<AuditFixture> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read fixture file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("cannot parse fixture file {}", path.display()))
}

pub(crate) fn load_benchmarks(app_config: &AppConfig) -> anyhow::Result<BenchmarkTable> {
    match &app_config.benchmarks_path {
        Some(path) => BenchmarkTable::from_yaml_path(path)
            .with_context(|| format!("cannot load benchmark table {}", path.display())),
        None => Ok(BenchmarkTable::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_parses_from_json() {
        let json = r#"{
            "descriptor": {
                "businessName": "Acme Roofing",
                "city": "Provo",
                "state": "Utah",
                "website": "https://acmeroofing.com",
                "businessType": "roofing contractor"
            },
            "providers": {
                "anchor": {
                    "name": "Acme Roofing",
                    "phone": "(801) 555-1234",
                    "address": "123 South Main Street",
                    "website": "https://acmeroofing.com"
                },
                "searchResults": [
                    {"title": "Acme on Yelp", "url": "https://yelp.com/biz/acme", "domain": "yelp.com"}
                ],
                "website": {"qualityScore": 70},
                "competitor": {"currentRank": 3, "profileCompleteness": 80},
                "schema": "<html></html>"
            }
        }"#;
        let fixture: AuditFixture = serde_json::from_str(json).unwrap();
        assert_eq!(fixture.descriptor.business_name, "Acme Roofing");
        assert_eq!(fixture.providers.competitor.current_rank, 3);
        assert_eq!(fixture.providers.search_results.len(), 1);
    }

    #[test]
    fn fixture_with_missing_anchor_is_rejected() {
        let json = r#"{
            "descriptor": {
                "businessName": "Acme Roofing",
                "city": "Provo",
                "state": "Utah",
                "website": null,
                "businessType": "roofing contractor"
            },
            "providers": {}
        }"#;
        assert!(serde_json::from_str::<AuditFixture>(json).is_err());
    }

    #[test]
    fn builtin_benchmarks_load_without_a_path() {
        let app_config = AppConfig {
            env: lva_core::Environment::Test,
            log_level: "info".to_string(),
            benchmarks_path: None,
        };
        let table = load_benchmarks(&app_config).unwrap();
        assert!(!table.rows.is_empty());
    }
}
