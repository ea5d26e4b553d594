//! Aggregate summary fixtures for the overview and exports tabs.

use crate::models::{
    ExportFormat, ExportRecord, Platform, PlatformSummary, ProductAdCount, QualityCheck,
    WeeklyOutput,
};

/// Per-platform account rollups.
pub fn platform_summaries() -> Vec<PlatformSummary> {
    vec![
        PlatformSummary {
            platform: Platform::Meta,
            campaigns: 3,
            ad_sets: 8,
            ads: 24,
            reach: 182_000,
            monthly_budget: 1_200,
            ready: 9,
        },
        PlatformSummary {
            platform: Platform::Google,
            campaigns: 2,
            ad_sets: 6,
            ads: 18,
            reach: 95_000,
            monthly_budget: 800,
            ready: 6,
        },
        PlatformSummary {
            platform: Platform::Tiktok,
            campaigns: 1,
            ad_sets: 3,
            ads: 12,
            reach: 210_000,
            monthly_budget: 600,
            ready: 3,
        },
        PlatformSummary {
            platform: Platform::Pinterest,
            campaigns: 1,
            ad_sets: 2,
            ads: 9,
            reach: 46_000,
            monthly_budget: 250,
            ready: 4,
        },
    ]
}

/// Number of authored ad variations per product.
pub fn product_ad_counts() -> Vec<ProductAdCount> {
    vec![
        ProductAdCount {
            product: "Linen Waffle Throw".to_string(),
            ads: 4,
        },
        ProductAdCount {
            product: "Cedar & Amber Soy Candle".to_string(),
            ads: 4,
        },
        ProductAdCount {
            product: "Stoneware Pour-Over Set".to_string(),
            ads: 4,
        },
    ]
}

/// Eight weeks of content output history.
pub fn weekly_output() -> Vec<WeeklyOutput> {
    let weeks = [
        ("Jun 8", 3, 1),
        ("Jun 15", 5, 2),
        ("Jun 22", 4, 1),
        ("Jun 29", 7, 3),
        ("Jul 6", 6, 2),
        ("Jul 13", 9, 4),
        ("Jul 20", 8, 3),
        ("Jul 27", 11, 5),
    ];
    weeks
        .into_iter()
        .map(|(week, ads, scripts)| WeeklyOutput {
            week: week.to_string(),
            ads,
            scripts,
        })
        .collect()
}

/// Authoring quality check tallies.
///
/// "Character limits" reflects the one draft whose headline was authored
/// over the Google limit.
pub fn quality_checks() -> Vec<QualityCheck> {
    vec![
        QualityCheck {
            name: "Character limits".to_string(),
            passed: 11,
            failed: 1,
        },
        QualityCheck {
            name: "Banned words".to_string(),
            passed: 12,
            failed: 0,
        },
        QualityCheck {
            name: "Tone match".to_string(),
            passed: 10,
            failed: 2,
        },
        QualityCheck {
            name: "CTA present".to_string(),
            passed: 12,
            failed: 0,
        },
    ]
}

/// Previously exported files listed on the exports tab.
pub fn export_records() -> Vec<ExportRecord> {
    vec![
        ExportRecord {
            file: "ads_meta_20250718_091402.csv".to_string(),
            format: ExportFormat::Csv,
            records: 24,
            exported_at: "Jul 18 09:14".to_string(),
        },
        ExportRecord {
            file: "ads_google_20250718_091402.csv".to_string(),
            format: ExportFormat::Csv,
            records: 18,
            exported_at: "Jul 18 09:14".to_string(),
        },
        ExportRecord {
            file: "ugc_scripts_20250722_160230.csv".to_string(),
            format: ExportFormat::Csv,
            records: 14,
            exported_at: "Jul 22 16:02".to_string(),
        },
        ExportRecord {
            file: "full_export_20250729_083015.json".to_string(),
            format: ExportFormat::Json,
            records: 77,
            exported_at: "Jul 29 08:30".to_string(),
        },
    ]
}
