//! The `benchmarks` command: print the industry benchmark table, or the
//! row matched by one business type.

use lva_core::AppConfig;

use crate::audit::load_benchmarks;

pub(crate) fn run(app_config: &AppConfig, business_type: Option<&str>) -> anyhow::Result<()> {
    let table = load_benchmarks(app_config)?;

    match business_type {
        Some(business_type) => {
            let row = table.lookup(business_type);
            println!("{}", serde_json::to_string_pretty(row)?);
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
    }
    Ok(())
}
