//! Export Workbook Parser
//!
//! Reads the first worksheet of the XLSX export. The first row holds the
//! column headers; every following non-empty row becomes an `ExportRow`.

use bobochic_models::{ExportRow, ExportTable, KNOWN_COLUMNS};
use calamine::{open_workbook_from_rs, DataType, Reader, Xlsx};
use chrono::NaiveDateTime;
use std::io::Cursor;

use crate::error::{PortalError, PortalResult};
use crate::text::non_blank;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse export bytes into a table
pub fn parse_export(data: &[u8]) -> PortalResult<ExportTable> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(data))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| PortalError::workbook("No sheets found in workbook"))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .ok_or_else(|| PortalError::workbook(format!("Worksheet {} is missing", sheet_name)))??;

    let mut rows_iter = range.rows();

    let column_headers: Vec<String> = match rows_iter.next() {
        Some(header) => header
            .iter()
            .map(|cell| normalize_cell(cell).unwrap_or_default())
            .collect(),
        None => Vec::new(),
    };

    if !column_headers.is_empty() && column_headers.len() < KNOWN_COLUMNS {
        tracing::warn!(
            columns = column_headers.len(),
            "Export has fewer columns than expected, missing cells read as empty"
        );
    }

    let rows: Vec<ExportRow> = rows_iter
        .map(|row| ExportRow::from_cells(row.iter().map(normalize_cell).collect()))
        .filter(|row| !row.is_empty())
        .collect();

    tracing::debug!(sheet = %sheet_name, rows = rows.len(), "Parsed order export");

    Ok(ExportTable {
        sheet_name,
        column_headers,
        rows,
    })
}

/// Renders a cell as text. Empty and blank cells become `None`.
///
/// Integral numbers drop their decimal part so that references and phone
/// numbers stored as numbers read back as typed.
pub fn normalize_cell(cell: &DataType) -> Option<String> {
    match cell {
        DataType::Empty => None,
        DataType::String(value) => non_blank(value),
        DataType::Float(value) => Some(format_number(*value)),
        DataType::Int(value) => Some(value.to_string()),
        DataType::Bool(value) => Some(value.to_string()),
        DataType::DateTime(_) => cell
            .as_datetime()
            .map(|date: NaiveDateTime| date.format(DATE_FORMAT).to_string()),
        DataType::Error(_) => None,
        other => non_blank(&other.to_string()),
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
