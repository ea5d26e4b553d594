//! Summary command printing catalogue statistics.

use anyhow::Result;
use clap::Args;

use crate::data::SampleData;
use crate::models::{Platform, ScriptType, Status};

/// Print catalogue statistics
#[derive(Debug, Clone, Args)]
pub struct SummaryArgs {}

impl SummaryArgs {
    /// Execute the summary command
    pub fn execute(&self) -> Result<()> {
        let data = SampleData::build();

        println!("Catalogue summary");
        println!();
        println!("Ad variations: {}", data.ads.len());
        for status in Status::ALL {
            let count = data.ads.iter().filter(|a| a.status == status).count();
            println!("  {:<10} {}", status.label(), count);
        }
        println!();
        println!("By platform:");
        for platform in Platform::ALL {
            let count = data.ads.iter().filter(|a| a.platform == platform).count();
            println!("  {:<10} {}", platform.label(), count);
        }
        println!();
        println!("UGC scripts: {}", data.scripts.len());
        for script_type in ScriptType::ALL {
            let count = data
                .scripts
                .iter()
                .filter(|s| s.script_type == script_type)
                .count();
            println!("  {:<18} {}", script_type.label(), count);
        }
        println!();
        println!("Export history entries: {}", data.export_records.len());

        Ok(())
    }
}
