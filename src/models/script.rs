//! UGC video script records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::status::{HasStatus, Status};

/// The kind of UGC video a script is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptType {
    /// Product review with genuine reaction
    Review,
    /// First-look unboxing experience
    Unboxing,
    /// Pain point then product fix
    ProblemSolution,
    /// How-to / getting started
    Tutorial,
    /// This vs that
    Comparison,
    /// Day-in-the-life featuring the product
    Lifestyle,
}

impl ScriptType {
    /// All script types in display order.
    pub const ALL: [Self; 6] = [
        Self::Review,
        Self::Unboxing,
        Self::ProblemSolution,
        Self::Tutorial,
        Self::Comparison,
        Self::Lifestyle,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Review => "Review",
            Self::Unboxing => "Unboxing",
            Self::ProblemSolution => "Problem/Solution",
            Self::Tutorial => "Tutorial",
            Self::Comparison => "Comparison",
            Self::Lifestyle => "Lifestyle",
        }
    }

    /// Lowercase identifier used in serialized data.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Review => "review",
            Self::Unboxing => "unboxing",
            Self::ProblemSolution => "problem-solution",
            Self::Tutorial => "tutorial",
            Self::Comparison => "comparison",
            Self::Lifestyle => "lifestyle",
        }
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Target runtime bucket for a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationBucket {
    /// 15-30 seconds
    Short,
    /// 30-45 seconds
    Standard,
    /// 45-60 seconds
    Extended,
}

impl DurationBucket {
    /// Human-readable range label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Short => "15-30s",
            Self::Standard => "30-45s",
            Self::Extended => "45-60s",
        }
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One scene of a UGC script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene start, seconds from video start
    pub start_secs: u16,
    /// Scene end, seconds from video start
    pub end_secs: u16,
    /// Director's note: what is happening on camera
    pub direction: String,
    /// Voiceover / spoken line
    pub voiceover: String,
}

impl Scene {
    /// Timestamp range label (e.g. "0:03-0:08").
    #[must_use]
    pub fn timestamp(&self) -> String {
        format!(
            "{}:{:02}-{}:{:02}",
            self.start_secs / 60,
            self.start_secs % 60,
            self.end_secs / 60,
            self.end_secs % 60
        )
    }
}

/// A structured short-video script: hook, ordered scenes, call to action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UgcScript {
    /// Stable record identifier
    pub id: String,
    /// Product the script features
    pub product: String,
    /// Kind of UGC video
    pub script_type: ScriptType,
    /// Target runtime bucket
    pub duration: DurationBucket,
    /// Opening hook line (first 3-5 seconds)
    pub hook: String,
    /// Ordered scenes
    pub scenes: Vec<Scene>,
    /// Closing call to action
    pub cta: String,
    /// Review status
    pub status: Status,
}

impl HasStatus for UgcScript {
    fn status(&self) -> Status {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_timestamp_format() {
        let scene = Scene {
            start_secs: 3,
            end_secs: 65,
            direction: "Close-up".to_string(),
            voiceover: "Look at this".to_string(),
        };
        assert_eq!(scene.timestamp(), "0:03-1:05");
    }

    #[test]
    fn test_script_type_serde_kebab_case() {
        let json = serde_json::to_string(&ScriptType::ProblemSolution).unwrap();
        assert_eq!(json, "\"problem-solution\"");
    }
}
