//! Product fixtures used by the setup wizard's simulated imports.

use crate::models::{Product, ProductSource};

fn product(name: &str, sku: &str, category: &str, price: &str, description: &str, source: ProductSource) -> Product {
    Product {
        name: name.to_string(),
        sku: sku.to_string(),
        category: category.to_string(),
        price: price.to_string(),
        description: description.to_string(),
        source,
    }
}

/// The constant pool the wizard draws from when "scraping" a product URL.
///
/// Entries are consumed round-robin; the pool never changes at runtime.
pub fn scrape_pool() -> Vec<Product> {
    vec![
        product(
            "Walnut Serving Board",
            "HH-KIT-322",
            "Kitchen",
            "$42",
            "End-grain walnut board with a juice groove and leather hanging loop.",
            ProductSource::UrlScrape,
        ),
        product(
            "Cloud Knit Lumbar Pillow",
            "HH-THR-117",
            "Textiles",
            "$38",
            "Chunky-knit lumbar pillow with a hidden zipper and washable cover.",
            ProductSource::UrlScrape,
        ),
        product(
            "Matte Ceramic Vase Trio",
            "HH-DEC-410",
            "Decor",
            "$56",
            "Three nesting vases in sand, clay, and bone matte glazes.",
            ProductSource::UrlScrape,
        ),
        product(
            "Brass Wick Trimmer",
            "HH-CND-215",
            "Home Fragrance",
            "$18",
            "Weighted brass trimmer that keeps wicks at the ideal quarter inch.",
            ProductSource::UrlScrape,
        ),
    ]
}

/// The fixed batch appended by the wizard's "CSV upload".
///
/// Always exactly these three records, regardless of the selected file.
pub fn csv_batch() -> Vec<Product> {
    vec![
        product(
            "Oat Linen Napkin Set",
            "HH-TBL-502",
            "Table",
            "$34",
            "Set of four stonewashed linen napkins in oat with fringed edges.",
            ProductSource::CsvImport,
        ),
        product(
            "Smoked Glass Tumblers",
            "HH-TBL-509",
            "Table",
            "$44",
            "Four hand-blown tumblers in a smoked charcoal tint.",
            ProductSource::CsvImport,
        ),
        product(
            "Eucalyptus Shower Stems",
            "HH-BTH-601",
            "Bath",
            "$22",
            "Preserved eucalyptus bundle that steams into a spa in your shower.",
            ProductSource::CsvImport,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_batch_is_exactly_three() {
        assert_eq!(csv_batch().len(), 3);
    }

    #[test]
    fn test_pool_skus_are_unique() {
        let pool = scrape_pool();
        let mut skus: Vec<&str> = pool.iter().map(|p| p.sku.as_str()).collect();
        skus.sort_unstable();
        skus.dedup();
        assert_eq!(skus.len(), pool.len());
    }
}
