//! In-memory snapshot of the supplier portal order export.

use serde::{Deserialize, Serialize};

/// Number of leading columns with a known meaning.
pub const KNOWN_COLUMNS: usize = 6;

/// One order row of the export, columns in spreadsheet order.
///
/// Empty cells are `None`, never an empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportRow {
    pub reference: Option<String>,
    pub date: Option<String>,
    pub customer: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub items: Option<String>,
    /// Trailing columns. Read and kept, never interpreted.
    pub extra: Vec<Option<String>>,
}

impl ExportRow {
    /// Builds a row from normalized cells in column order. Missing trailing
    /// cells are treated as empty.
    pub fn from_cells(cells: Vec<Option<String>>) -> Self {
        let mut cells = cells.into_iter();
        let mut next = || cells.next().flatten();

        let reference = next();
        let date = next();
        let customer = next();
        let phone = next();
        let address = next();
        let items = next();

        Self {
            reference,
            date,
            customer,
            phone,
            address,
            items,
            extra: cells.collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reference.is_none()
            && self.date.is_none()
            && self.customer.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.items.is_none()
            && self.extra.iter().all(Option::is_none)
    }
}

/// Parsed order export.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportTable {
    pub sheet_name: String,
    pub column_headers: Vec<String>,
    pub rows: Vec<ExportRow>,
}

impl ExportTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExportRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a ExportTable {
    type Item = &'a ExportRow;
    type IntoIter = std::slice::Iter<'a, ExportRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
