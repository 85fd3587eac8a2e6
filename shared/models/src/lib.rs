//! # Bobochic Domain Models
//!
//! Data types shared by the supplier order client: the in-memory export table
//! downloaded from the supplier portal and the normalized order records built
//! from it.
//!
//! ## Key Models
//!
//! - **ExportTable** / **ExportRow**: one snapshot of the order export spreadsheet
//! - **OrderRecord**: a normalized order with parsed address, items and label link
//! - **ParsedAddress**: a French postal address, or an empty object when unmatched
//! - **ParsedItem**: a line item identified either by SKU or by EAN barcode
//!
//! ## Serialization
//!
//! Output types serialize with serde to the record shape consumers expect:
//! the order reference is written as `ref`, absent optional fields are
//! omitted or written as `null`, and an unmatched address is written as `{}`.

pub mod export;
pub mod order;

#[cfg(test)]
pub mod property_tests;

pub use export::*;
pub use order::*;
