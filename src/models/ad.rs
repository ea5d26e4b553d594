//! Ad variation records and the platform catalogue they target.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::status::{HasStatus, Status};

/// Advertising platform an ad variation is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Meta (Facebook/Instagram) feed ads
    Meta,
    /// Google Ads text ads
    Google,
    /// TikTok in-feed ads
    Tiktok,
    /// Pinterest promoted pins
    Pinterest,
}

impl Platform {
    /// All platforms in display order.
    pub const ALL: [Self; 4] = [Self::Meta, Self::Google, Self::Tiktok, Self::Pinterest];

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Meta => "Meta",
            Self::Google => "Google",
            Self::Tiktok => "TikTok",
            Self::Pinterest => "Pinterest",
        }
    }

    /// Lowercase identifier used in export filenames and serialized data.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::Google => "google",
            Self::Tiktok => "tiktok",
            Self::Pinterest => "pinterest",
        }
    }

    /// Static per-field character limits for this platform.
    ///
    /// These mirror the platform ad specs the copy was authored against and
    /// never change at runtime.
    #[must_use]
    pub const fn char_limits(&self) -> CharLimits {
        match self {
            Self::Meta => CharLimits {
                headline: 40,
                body: 125,
                description: 30,
            },
            Self::Google => CharLimits {
                headline: 30,
                body: 90,
                description: 90,
            },
            Self::Tiktok => CharLimits {
                headline: 100,
                body: 100,
                description: 150,
            },
            Self::Pinterest => CharLimits {
                headline: 100,
                body: 500,
                description: 500,
            },
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Character limits for the three copy fields of a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharLimits {
    /// Maximum headline length
    pub headline: usize,
    /// Maximum primary/body text length
    pub body: usize,
    /// Maximum description length
    pub description: usize,
}

/// Creative angle applied to an ad variation.
///
/// The generator rotates through these six approaches so variations for the
/// same product read differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Angle {
    /// Lead with what the customer gains
    BenefitFocused,
    /// Name the pain, offer the fix
    ProblemSolution,
    /// Imply popularity or trust
    SocialProof,
    /// Limited time, scarcity, FOMO
    Urgency,
    /// Tease a result without revealing everything
    Curiosity,
    /// Paint a picture of life with the product
    Lifestyle,
}

impl Angle {
    /// All angles in generator rotation order.
    pub const ALL: [Self; 6] = [
        Self::BenefitFocused,
        Self::ProblemSolution,
        Self::SocialProof,
        Self::Urgency,
        Self::Curiosity,
        Self::Lifestyle,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BenefitFocused => "Benefit-focused",
            Self::ProblemSolution => "Problem/Solution",
            Self::SocialProof => "Social proof",
            Self::Urgency => "Urgency",
            Self::Curiosity => "Curiosity",
            Self::Lifestyle => "Lifestyle",
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One generated piece of platform-specific ad copy for a product.
///
/// The `*_chars` fields were counted when the copy was authored and are
/// displayed as-is; they are intentionally never recomputed from the text
/// fields (the gallery is read-only, so the two cannot drift).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdVariation {
    /// Stable record identifier
    pub id: String,
    /// Product display name
    pub product: String,
    /// Product SKU
    pub sku: String,
    /// Target platform
    pub platform: Platform,
    /// Creative angle of this variation
    pub angle: Angle,
    /// Headline copy
    pub headline: String,
    /// Primary/body text
    pub body: String,
    /// Description line
    pub description: String,
    /// Call to action
    pub cta: String,
    /// Authored headline character count
    pub headline_chars: usize,
    /// Authored body character count
    pub body_chars: usize,
    /// Authored description character count
    pub description_chars: usize,
    /// Review status
    pub status: Status,
    /// Creation date label (e.g. "Jul 28")
    pub created: String,
}

impl AdVariation {
    /// Whether every authored count is within the platform's limits.
    #[must_use]
    pub fn within_limits(&self) -> bool {
        let limits = self.platform.char_limits();
        self.headline_chars <= limits.headline
            && self.body_chars <= limits.body
            && self.description_chars <= limits.description
    }
}

impl HasStatus for AdVariation {
    fn status(&self) -> Status {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_limits_are_platform_specific() {
        assert_eq!(Platform::Meta.char_limits().headline, 40);
        assert_eq!(Platform::Google.char_limits().headline, 30);
        assert_eq!(Platform::Tiktok.char_limits().description, 150);
        assert_eq!(Platform::Pinterest.char_limits().body, 500);
    }

    #[test]
    fn test_angle_serde_kebab_case() {
        let json = serde_json::to_string(&Angle::ProblemSolution).unwrap();
        assert_eq!(json, "\"problem-solution\"");
        let back: Angle = serde_json::from_str("\"benefit-focused\"").unwrap();
        assert_eq!(back, Angle::BenefitFocused);
    }

    #[test]
    fn test_within_limits_uses_authored_counts() {
        let mut ad = AdVariation {
            id: "ad-test".to_string(),
            product: "Test".to_string(),
            sku: "T-1".to_string(),
            platform: Platform::Meta,
            angle: Angle::Urgency,
            headline: "Short".to_string(),
            body: "Body".to_string(),
            description: "Desc".to_string(),
            cta: "Shop Now".to_string(),
            headline_chars: 40,
            body_chars: 125,
            description_chars: 30,
            status: Status::Draft,
            created: "Jul 1".to_string(),
        };
        assert!(ad.within_limits());

        // Authored count decides, not the actual string length.
        ad.headline_chars = 41;
        assert!(!ad.within_limits());
    }
}
