use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const TABLE_BASE_URL: &str =
    "https://docs.google.com/spreadsheets/d/1tK916JyG5ZSXW_cXfsyZnzXfjyoN-8B2GXLbYD6_vF0/gviz/tq?tqx=out:csv";

const CT_ID_COLUMN: &str = "CT/1/ID";
const CT_NAME_COLUMN: &str = "CT/1";
const CT_LABEL_COLUMN: &str = "CT/1/Label";

// Exported sheets carry a preamble of unpredictable length before the
// header row. The header starts at the first anatomical-structure column,
// quoted or not. Documents where the scan fails fall back to a fixed skip.
const FALLBACK_DATA_OFFSET: usize = 10;

static HEADER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^"?AS/[0-9]+"#).expect("valid header pattern"));

#[derive(Debug, Clone)]
pub struct ReferenceRow {
    pub ct_id: String,
    pub ct_name: String,
    pub ct_label: String,
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("decoding reference table: {0}")]
    Decode(String),
}

pub fn sheet_url(table: &str) -> String {
    format!("{TABLE_BASE_URL}&sheet={table}")
}

pub fn locate_data_start(lines: &[&str]) -> usize {
    lines
        .iter()
        .position(|line| HEADER_PATTERN.is_match(line))
        .unwrap_or(FALLBACK_DATA_OFFSET)
}

// Rows only expose the cell-type columns relevant to reconciliation; a
// column missing from the sheet reads as empty.
pub fn parse_reference_table(raw: &str) -> Result<Vec<ReferenceRow>, TableError> {
    let lines: Vec<&str> = raw.split('\n').collect();
    let start = locate_data_start(&lines);
    let table = lines
        .iter()
        .skip(start)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(table.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| TableError::Decode(e.to_string()))?
        .clone();
    let id_col = column_index(&headers, CT_ID_COLUMN);
    let name_col = column_index(&headers, CT_NAME_COLUMN);
    let label_col = column_index(&headers, CT_LABEL_COLUMN);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| TableError::Decode(e.to_string()))?;
        rows.push(ReferenceRow {
            ct_id: field(&record, id_col).to_string(),
            ct_name: field(&record, name_col).to_string(),
            ct_label: field(&record, label_col).to_string(),
        });
    }

    Ok(rows)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn field<'a>(record: &'a csv::StringRecord, idx: Option<usize>) -> &'a str {
    idx.and_then(|i| record.get(i)).unwrap_or("")
}

#[cfg(test)]
#[path = "../../tests/src_inline/asctb/tests.rs"]
mod tests;
