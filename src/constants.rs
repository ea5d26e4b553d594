//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the demo brand it ships with.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "AdBoard";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "adboard";

/// The fictitious home-goods brand whose sample catalogue ships with the demo.
pub const DEMO_BRAND_NAME: &str = "Hearth & Haven";
