//! Order Export Processing Module
//!
//! Decodes the supplier portal's XLSX order export into an
//! [`ExportTable`](bobochic_models::ExportTable) and extracts structured
//! addresses and line items from its free-text columns.

pub mod workbook;
pub mod address;
pub mod items;

pub use workbook::{parse_export, normalize_cell};
pub use address::parse_address;
pub use items::parse_items;
