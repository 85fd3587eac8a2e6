//! Line item extraction from the export's free-text items column.
//!
//! The portal writes items either with a `REF <sku>` label or with an
//! `EAN <barcode>` label. The two conventions never share one block, so the
//! barcode pattern is only tried when the SKU pattern finds nothing at all.

use bobochic_models::ParsedItem;
use once_cell::sync::Lazy;
use regex::Regex;

/// `<qty> x ... REF ... <sku>`: digits, up to two capitals, one optional digit.
static SKU_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+) x.+?REF.+?(\d+[A-Z]{0,2}\d?)").expect("sku pattern is valid")
});

/// `<qty> x ... EAN ... <13 digit barcode>`
static EAN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+) x.+?EAN.+?(\d{13})").expect("ean pattern is valid")
});

/// Extracts every line item of an items block. Unrecognized text yields an
/// empty list.
pub fn parse_items(text: &str) -> Vec<ParsedItem> {
    let by_sku: Vec<ParsedItem> = SKU_PATTERN
        .captures_iter(text)
        .map(|captures| ParsedItem::Reference {
            sku: captures[2].to_string(),
            qty: captures[1].to_string(),
        })
        .collect();

    if !by_sku.is_empty() {
        return by_sku;
    }

    let by_barcode: Vec<ParsedItem> = EAN_PATTERN
        .captures_iter(text)
        .map(|captures| ParsedItem::Barcode {
            barcode: captures[2].to_string(),
            qty: captures[1].to_string(),
        })
        .collect();

    if by_barcode.is_empty() && !text.trim().is_empty() {
        tracing::debug!(items = text, "No line item recognized");
    }

    by_barcode
}
