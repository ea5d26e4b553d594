//! Data models for ad variations, UGC scripts, and catalogue summaries.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of UI and business logic.

pub mod ad;
pub mod product;
pub mod script;
pub mod status;
pub mod summary;

// Re-export all model types
pub use ad::{AdVariation, Angle, CharLimits, Platform};
pub use product::{Product, ProductSource};
pub use script::{DurationBucket, Scene, ScriptType, UgcScript};
pub use status::{filter_records, HasStatus, Status, StatusFilter};
pub use summary::{
    ExportFormat, ExportRecord, PlatformSummary, ProductAdCount, QualityCheck, WeeklyOutput,
};
