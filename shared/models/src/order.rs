//! Order domain models for the supplier portal export.
//!
//! An [`OrderRecord`] is rebuilt from one export row every time orders are
//! fetched. Its address and items are the structured result of the text
//! extractors in `bobochic-utils`.

use serde::{Deserialize, Serialize};

/// Country attached to every parsed address. The portal only ships to France.
pub const FRANCE: &str = "France";

/// A normalized order as exposed to callers of the order client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRecord {
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub date: Option<String>,
    /// Title-cased customer name, `None` when the export cell is empty.
    pub customer: Option<String>,
    pub phone: Option<String>,
    pub address: ParsedAddress,
    pub items: Vec<ParsedItem>,
    pub shipping_label_url: Option<String>,
}

/// Street, zip code and city extracted from the free-text address column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostalAddress {
    pub address: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
}

impl PostalAddress {
    pub fn french(address: String, zip_code: String, city: String) -> Self {
        Self {
            address,
            zip_code,
            city,
            country: FRANCE.to_string(),
        }
    }
}

/// Result of address extraction.
///
/// `Unmatched` serializes as an empty object: an address that does not
/// follow the `<street> <zip> <city> (FR)` layout is a normal case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ParsedAddress {
    Postal(PostalAddress),
    Unmatched {},
}

impl ParsedAddress {
    pub fn as_postal(&self) -> Option<&PostalAddress> {
        match self {
            Self::Postal(address) => Some(address),
            Self::Unmatched {} => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Unmatched {})
    }
}

impl Default for ParsedAddress {
    fn default() -> Self {
        Self::Unmatched {}
    }
}

impl From<PostalAddress> for ParsedAddress {
    fn from(address: PostalAddress) -> Self {
        Self::Postal(address)
    }
}

/// A single order line.
///
/// The portal labels products either with a `REF` SKU or with an `EAN`
/// barcode; a whole items block always uses one convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ParsedItem {
    Reference { sku: String, qty: String },
    Barcode { barcode: String, qty: String },
}

impl ParsedItem {
    pub fn qty(&self) -> &str {
        match self {
            Self::Reference { qty, .. } | Self::Barcode { qty, .. } => qty,
        }
    }

    pub fn sku(&self) -> Option<&str> {
        match self {
            Self::Reference { sku, .. } => Some(sku),
            Self::Barcode { .. } => None,
        }
    }

    pub fn barcode(&self) -> Option<&str> {
        match self {
            Self::Reference { .. } => None,
            Self::Barcode { barcode, .. } => Some(barcode),
        }
    }
}
