//! Export command for writing the catalogue to CSV or JSON files.

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::data::SampleData;
use crate::export;
use crate::models::ExportFormat;

/// Export format CLI argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// One CSV per platform plus one for UGC scripts
    Csv,
    /// One consolidated JSON document
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => Self::Csv,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Export the sample catalogue to files
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Output directory (defaults to the configured export directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> Result<()> {
        let config = Config::load().unwrap_or_default();
        let format = self
            .format
            .map_or(config.output.format, ExportFormat::from);
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| config.output.export_dir.clone());

        let data = SampleData::build();
        println!("Exporting {} ad copies and {} UGC scripts as {}", data.ads.len(), data.scripts.len(), format);

        let files = match format {
            ExportFormat::Csv => export::export_csv(&data.ads, &data.scripts, &output_dir)?,
            ExportFormat::Json => {
                vec![export::export_json(&data.ads, &data.scripts, &output_dir)?]
            }
        };

        println!("Wrote {} file(s):", files.len());
        for file in &files {
            println!("  -> {}", file.display());
        }

        Ok(())
    }
}
