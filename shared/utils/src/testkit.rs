//! In-memory XLSX fixtures.
//!
//! Builds the smallest workbook the export parser accepts: one worksheet,
//! shared strings, no styles. Empty cells are left out of the sheet.

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const SHEET_NAME: &str = "Commandes";

#[derive(Debug, Default, Clone)]
pub struct XlsxBuilder {
    rows: Vec<Vec<String>>,
}

impl XlsxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut strings: Vec<&str> = Vec::new();
        let mut sheet_rows = String::new();

        for (row_idx, row) in self.rows.iter().enumerate() {
            let row_number = row_idx + 1;
            sheet_rows.push_str(&format!(r#"<row r="{}">"#, row_number));
            for (col_idx, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                let string_idx = strings.len();
                strings.push(value);
                sheet_rows.push_str(&format!(
                    r#"<c r="{}{}" t="s"><v>{}</v></c>"#,
                    column_name(col_idx),
                    row_number,
                    string_idx
                ));
            }
            sheet_rows.push_str("</row>");
        }

        let shared_strings: String = strings
            .iter()
            .map(|value| format!(r#"<si><t xml:space="preserve">{}</t></si>"#, escape(value)))
            .collect();

        let files = [
            ("[Content_Types].xml", CONTENT_TYPES.to_string()),
            ("_rels/.rels", ROOT_RELS.to_string()),
            ("xl/workbook.xml", WORKBOOK.replace("{sheet}", SHEET_NAME)),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.to_string()),
            (
                "xl/sharedStrings.xml",
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><sst xmlns="{}" count="{}" uniqueCount="{}">{}</sst>"#,
                    MAIN_NS,
                    strings.len(),
                    strings.len(),
                    shared_strings
                ),
            ),
            (
                "xl/worksheets/sheet1.xml",
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="{}"><sheetData>{}</sheetData></worksheet>"#,
                    MAIN_NS, sheet_rows
                ),
            ),
        ];

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Stored);
        for (path, content) in files {
            zip.start_file(path, options)
                .expect("in-memory zip entry can be started");
            zip.write_all(content.as_bytes())
                .expect("in-memory zip entry can be written");
        }
        zip.finish()
            .expect("in-memory zip can be finished")
            .into_inner()
    }
}

/// Zero-based column index to spreadsheet letters: 0 -> A, 26 -> AA.
fn column_name(mut index: usize) -> String {
    let mut name = Vec::new();
    loop {
        name.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/><Override PartName="/xl/sharedStrings.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{sheet}" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/></Relationships>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_name() {
        assert_eq!(column_name(0), "A");
        assert_eq!(column_name(8), "I");
        assert_eq!(column_name(25), "Z");
        assert_eq!(column_name(26), "AA");
        assert_eq!(column_name(27), "AB");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("Pull <rouge> & \"bleu\""), "Pull &lt;rouge&gt; &amp; &quot;bleu&quot;");
    }
}
