//! The sample catalogue shipped with the demo.
//!
//! Everything shown in the dashboard comes from this module. The catalogue is
//! built by an explicit constructor and handed to consumers as a value; there
//! is no hidden global, and nothing here mutates after construction. The board
//! takes its own working copy of the script list, so drag-and-drop changes are
//! session-local and reset on every launch.

pub mod ads;
pub mod products;
pub mod scripts;
pub mod summaries;

use crate::models::{
    AdVariation, ExportRecord, PlatformSummary, ProductAdCount, QualityCheck, UgcScript,
    WeeklyOutput,
};

/// The complete read-only fixture set.
#[derive(Debug, Clone)]
pub struct SampleData {
    /// Ad copy variations
    pub ads: Vec<AdVariation>,
    /// UGC video scripts
    pub scripts: Vec<UgcScript>,
    /// Per-platform account rollups
    pub platform_summaries: Vec<PlatformSummary>,
    /// Ad variation counts per product
    pub product_ad_counts: Vec<ProductAdCount>,
    /// Weekly output history
    pub weekly_output: Vec<WeeklyOutput>,
    /// Authoring quality check tallies
    pub quality_checks: Vec<QualityCheck>,
    /// Previously exported files
    pub export_records: Vec<ExportRecord>,
}

impl SampleData {
    /// Builds the full catalogue.
    #[must_use]
    pub fn build() -> Self {
        Self {
            ads: ads::sample_ads(),
            scripts: scripts::sample_scripts(),
            platform_summaries: summaries::platform_summaries(),
            product_ad_counts: summaries::product_ad_counts(),
            weekly_output: summaries::weekly_output(),
            quality_checks: summaries::quality_checks(),
            export_records: summaries::export_records(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Angle, DurationBucket, Platform, ScriptType, Status};
    use std::collections::HashSet;

    #[test]
    fn test_record_ids_are_unique() {
        let data = SampleData::build();
        let mut ids: HashSet<&str> = HashSet::new();
        for ad in &data.ads {
            assert!(ids.insert(&ad.id), "duplicate ad id {}", ad.id);
        }
        for script in &data.scripts {
            assert!(ids.insert(&script.id), "duplicate script id {}", script.id);
        }
    }

    #[test]
    fn test_every_platform_and_angle_is_represented() {
        let data = SampleData::build();
        for platform in Platform::ALL {
            assert!(data.ads.iter().any(|a| a.platform == platform));
        }
        for angle in Angle::ALL {
            assert!(data.ads.iter().any(|a| a.angle == angle));
        }
    }

    #[test]
    fn test_every_status_appears_in_both_lists() {
        let data = SampleData::build();
        for status in Status::ALL {
            assert!(data.ads.iter().any(|a| a.status == status));
            assert!(data.scripts.iter().any(|s| s.status == status));
        }
    }

    #[test]
    fn test_every_script_type_and_duration_is_represented() {
        let data = SampleData::build();
        for script_type in ScriptType::ALL {
            assert!(data.scripts.iter().any(|s| s.script_type == script_type));
        }
        for duration in [
            DurationBucket::Short,
            DurationBucket::Standard,
            DurationBucket::Extended,
        ] {
            assert!(data.scripts.iter().any(|s| s.duration == duration));
        }
    }

    #[test]
    fn test_scene_timestamps_are_ordered() {
        let data = SampleData::build();
        for script in &data.scripts {
            let mut last_end = 0;
            for scene in &script.scenes {
                assert!(scene.start_secs < scene.end_secs, "{}", script.id);
                assert!(scene.start_secs >= last_end, "{}", script.id);
                last_end = scene.end_secs;
            }
        }
    }

    #[test]
    fn test_product_ad_counts_match_catalogue() {
        let data = SampleData::build();
        for count in &data.product_ad_counts {
            let actual = data
                .ads
                .iter()
                .filter(|a| a.product == count.product)
                .count();
            assert_eq!(actual as u32, count.ads, "{}", count.product);
        }
    }

    #[test]
    fn test_character_limit_check_matches_catalogue() {
        let data = SampleData::build();
        let failing = data.ads.iter().filter(|a| !a.within_limits()).count();
        let check = data
            .quality_checks
            .iter()
            .find(|c| c.name == "Character limits")
            .expect("character limit check present");
        assert_eq!(failing as u32, check.failed);
        assert_eq!(data.ads.len() as u32, check.passed + check.failed);
    }
}
