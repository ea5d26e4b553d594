//! Aggregate summary records shown on the overview and exports tabs.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ad::Platform;

/// Per-platform account rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSummary {
    /// Platform the rollup belongs to
    pub platform: Platform,
    /// Number of campaigns configured
    pub campaigns: u32,
    /// Number of ad sets
    pub ad_sets: u32,
    /// Number of live ads
    pub ads: u32,
    /// Estimated monthly reach
    pub reach: u32,
    /// Monthly budget, whole dollars
    pub monthly_budget: u32,
    /// Ads ready to publish
    pub ready: u32,
}

/// Number of ad variations authored for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAdCount {
    /// Product display name
    pub product: String,
    /// Number of ad variations
    pub ads: u32,
}

/// One week of content output history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyOutput {
    /// Week label (e.g. "Jun 15")
    pub week: String,
    /// Ad variations produced that week
    pub ads: u32,
    /// UGC scripts produced that week
    pub scripts: u32,
}

/// Pass/fail tally for one authoring quality check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCheck {
    /// Check name (e.g. "Character limits")
    pub name: String,
    /// Records that passed
    pub passed: u32,
    /// Records that failed
    pub failed: u32,
}

/// Output format for exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One CSV file per platform plus one for UGC scripts
    #[default]
    Csv,
    /// One consolidated JSON document
    Json,
}

impl ExportFormat {
    /// Lowercase identifier (matches CLI argument and config values).
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// The other format (used by the wizard's format toggle).
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Csv => Self::Json,
            Self::Json => Self::Csv,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One previously exported file, as listed on the exports tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    /// File name
    pub file: String,
    /// Format the file was written in
    pub format: ExportFormat,
    /// Number of records in the file
    pub records: u32,
    /// Export date label (e.g. "Jul 30 09:14")
    pub exported_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_toggle_round_trips() {
        assert_eq!(ExportFormat::Csv.toggled(), ExportFormat::Json);
        assert_eq!(ExportFormat::Csv.toggled().toggled(), ExportFormat::Csv);
    }

    #[test]
    fn test_export_format_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ExportFormat::Json).unwrap(), "\"json\"");
    }
}
