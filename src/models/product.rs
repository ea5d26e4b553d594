//! Imported product records used by the setup wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a product record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSource {
    /// Imported by scraping a product URL
    UrlScrape,
    /// Imported from a CSV upload
    CsvImport,
}

impl ProductSource {
    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::UrlScrape => "URL",
            Self::CsvImport => "CSV",
        }
    }
}

impl fmt::Display for ProductSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalogue product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product display name
    pub name: String,
    /// Product SKU
    pub sku: String,
    /// Store category
    pub category: String,
    /// Price label (e.g. "$48")
    pub price: String,
    /// One-line description
    pub description: String,
    /// Import source
    pub source: ProductSource,
}
