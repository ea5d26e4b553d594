//! Exporters for ad copies and UGC scripts.
//!
//! CSV output writes one file per platform (each platform has its own column
//! set) plus one file for UGC scripts with scenes flattened into a readable
//! text column. JSON output writes a single consolidated document.

pub mod brief;

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{AdVariation, Platform, UgcScript};

/// Escapes a single CSV field.
///
/// Fields containing commas, quotes, or newlines are quoted with embedded
/// quotes doubled.
#[must_use]
pub fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn csv_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| csv_escape(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Column headers for a platform's ad CSV.
#[must_use]
pub const fn ad_csv_columns(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Meta => &[
            "product",
            "headline",
            "primary_text",
            "description",
            "cta",
            "angle",
            "status",
        ],
        Platform::Google => &[
            "product",
            "headline",
            "description_line_1",
            "description_line_2",
            "angle",
            "status",
        ],
        Platform::Tiktok => &["product", "ad_text", "caption", "cta", "angle", "status"],
        Platform::Pinterest => &["product", "title", "description", "cta", "angle", "status"],
    }
}

/// Renders the ad CSV for one platform.
///
/// Only ads targeting `platform` are included, in catalogue order.
#[must_use]
pub fn ads_csv_for_platform(ads: &[AdVariation], platform: Platform) -> String {
    let mut lines = vec![csv_row(ad_csv_columns(platform))];

    for ad in ads.iter().filter(|a| a.platform == platform) {
        let angle = format!("{}", ad.angle);
        let status = ad.status.label();
        let row = match platform {
            Platform::Meta => csv_row(&[
                &ad.product,
                &ad.headline,
                &ad.body,
                &ad.description,
                &ad.cta,
                &angle,
                status,
            ]),
            Platform::Google => csv_row(&[
                &ad.product,
                &ad.headline,
                &ad.body,
                &ad.description,
                &angle,
                status,
            ]),
            Platform::Tiktok => csv_row(&[
                &ad.product,
                &ad.headline,
                &ad.description,
                &ad.cta,
                &angle,
                status,
            ]),
            Platform::Pinterest => csv_row(&[
                &ad.product,
                &ad.headline,
                &ad.body,
                &ad.cta,
                &angle,
                status,
            ]),
        };
        lines.push(row);
    }

    lines.join("\n") + "\n"
}

/// Column headers for the UGC script CSV.
pub const SCRIPT_CSV_COLUMNS: [&str; 7] = [
    "product",
    "script_type",
    "duration",
    "hook",
    "cta",
    "scene_count",
    "full_script",
];

/// Flattens a script's scenes into one readable text field.
#[must_use]
pub fn flatten_scenes(script: &UgcScript) -> String {
    script
        .scenes
        .iter()
        .enumerate()
        .map(|(i, scene)| {
            format!(
                "[Scene {} {}] {} | VO: {}",
                i + 1,
                scene.timestamp(),
                scene.direction,
                scene.voiceover
            )
        })
        .collect::<Vec<_>>()
        .join(" || ")
}

/// Renders the UGC script CSV.
#[must_use]
pub fn scripts_csv(scripts: &[UgcScript]) -> String {
    let columns: Vec<&str> = SCRIPT_CSV_COLUMNS.to_vec();
    let mut lines = vec![csv_row(&columns)];

    for script in scripts {
        let scene_count = script.scenes.len().to_string();
        let full_script = flatten_scenes(script);
        lines.push(csv_row(&[
            &script.product,
            script.script_type.slug(),
            script.duration.label(),
            &script.hook,
            &script.cta,
            &scene_count,
            &full_script,
        ]));
    }

    lines.join("\n") + "\n"
}

/// Summary block of a consolidated JSON export.
#[derive(Debug, Serialize)]
pub struct ExportSummary {
    /// Number of exported ad copies
    pub total_ad_copies: usize,
    /// Number of exported UGC scripts
    pub total_ugc_scripts: usize,
    /// Platforms present in the export
    pub platforms: Vec<String>,
    /// Script types present in the export
    pub ugc_types: Vec<String>,
}

/// The consolidated JSON export document.
#[derive(Debug, Serialize)]
pub struct FullExport<'a> {
    /// ISO-8601 export timestamp
    pub exported_at: String,
    /// Count summary
    pub summary: ExportSummary,
    /// All ad copies
    pub ad_copies: &'a [AdVariation],
    /// All UGC scripts
    pub ugc_scripts: &'a [UgcScript],
}

impl<'a> FullExport<'a> {
    /// Assembles the export document for the given records.
    #[must_use]
    pub fn new(ads: &'a [AdVariation], scripts: &'a [UgcScript], exported_at: String) -> Self {
        let mut platforms: Vec<String> = ads.iter().map(|a| a.platform.slug().to_string()).collect();
        platforms.sort();
        platforms.dedup();

        let mut ugc_types: Vec<String> = scripts
            .iter()
            .map(|s| s.script_type.slug().to_string())
            .collect();
        ugc_types.sort();
        ugc_types.dedup();

        Self {
            exported_at,
            summary: ExportSummary {
                total_ad_copies: ads.len(),
                total_ugc_scripts: scripts.len(),
                platforms,
                ugc_types,
            },
            ad_copies: ads,
            ugc_scripts: scripts,
        }
    }
}

/// Writes per-platform ad CSVs and the UGC script CSV into `output_dir`.
///
/// Only platforms with at least one ad get a file. Returns the created paths.
pub fn export_csv(
    ads: &[AdVariation],
    scripts: &[UgcScript],
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create export directory: {}", output_dir.display()))?;

    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let mut created = Vec::new();

    for platform in Platform::ALL {
        if !ads.iter().any(|a| a.platform == platform) {
            continue;
        }
        let path = output_dir.join(format!("ads_{}_{}.csv", platform.slug(), stamp));
        fs::write(&path, ads_csv_for_platform(ads, platform))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        created.push(path);
    }

    if !scripts.is_empty() {
        let path = output_dir.join(format!("ugc_scripts_{}.csv", stamp));
        fs::write(&path, scripts_csv(scripts))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        created.push(path);
    }

    Ok(created)
}

/// Writes the consolidated JSON export into `output_dir`.
pub fn export_json(
    ads: &[AdVariation],
    scripts: &[UgcScript],
    output_dir: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create export directory: {}", output_dir.display()))?;

    let now = chrono::Local::now();
    let document = FullExport::new(ads, scripts, now.to_rfc3339());
    let content =
        serde_json::to_string_pretty(&document).context("Failed to serialize export")?;

    let path = output_dir.join(format!("full_export_{}.json", now.format("%Y%m%d_%H%M%S")));
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleData;

    #[test]
    fn test_csv_escape_quotes_commas_and_quotes() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_platform_csv_contains_only_that_platform() {
        let data = SampleData::build();
        let csv = ads_csv_for_platform(&data.ads, Platform::Google);
        let rows = csv.lines().count() - 1; // minus header
        let expected = data
            .ads
            .iter()
            .filter(|a| a.platform == Platform::Google)
            .count();
        assert_eq!(rows, expected);
        assert!(csv.starts_with("product,headline,description_line_1"));
    }

    #[test]
    fn test_scripts_csv_has_scene_counts() {
        let data = SampleData::build();
        let csv = scripts_csv(&data.scripts);
        assert!(csv.starts_with("product,script_type,duration,hook,cta,scene_count,full_script"));
        assert_eq!(csv.lines().count(), data.scripts.len() + 1);
        assert!(csv.contains("[Scene 1 0:00-0:05]"));
    }

    #[test]
    fn test_full_export_summary_counts() {
        let data = SampleData::build();
        let export = FullExport::new(&data.ads, &data.scripts, "2025-07-30T00:00:00Z".to_string());
        assert_eq!(export.summary.total_ad_copies, data.ads.len());
        assert_eq!(export.summary.total_ugc_scripts, data.scripts.len());
        assert_eq!(export.summary.platforms.len(), 4);

        // Round-trips through serde_json.
        let json = serde_json::to_string(&export).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["summary"]["total_ad_copies"].as_u64().unwrap() as usize,
            data.ads.len()
        );
        assert_eq!(
            value["ad_copies"].as_array().unwrap().len(),
            data.ads.len()
        );
    }

    #[test]
    fn test_export_csv_writes_expected_files() {
        let data = SampleData::build();
        let dir = tempfile::tempdir().unwrap();
        let created = export_csv(&data.ads, &data.scripts, dir.path()).unwrap();
        // Four platforms plus the scripts file.
        assert_eq!(created.len(), 5);
        for path in &created {
            assert!(path.exists());
        }
    }
}
