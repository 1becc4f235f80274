use std::collections::BTreeMap;

use thiserror::Error;

use crate::fetch::RowSource;
use crate::organs::OrganConfig;

pub mod ontology;

pub const ANNOTATION_BASE_URL: &str =
    "https://raw.githubusercontent.com/satijalab/azimuth_website/master/static/csv/";

const LABEL_COLUMN: &str = "Label";
const ONTOLOGY_COLUMN: &str = "OBO Ontology ID";

// Canonical key -> display value. Key semantics depend on the organ's
// match type; insertion overwrites, so the last source wins on collision.
pub type AnnotationMap = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("decoding annotation source {file}: {message}")]
    Decode { file: String, message: String },
}

pub fn annotation_url(file: &str) -> String {
    format!("{ANNOTATION_BASE_URL}{file}.csv")
}

// A source that cannot be fetched, or comes back empty, is skipped; the
// remaining sources still contribute.
pub fn build_annotation_map(
    organ: &OrganConfig,
    source: &dyn RowSource,
) -> Result<AnnotationMap, AnnotationError> {
    let mut map = AnnotationMap::new();

    for &file in organ.annotations {
        let url = annotation_url(file);
        let text = match source.fetch_text(&url) {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                tracing::warn!(
                    organ = organ.name,
                    file,
                    "annotation source returned no content"
                );
                continue;
            }
            Err(err) => {
                tracing::warn!(
                    organ = organ.name,
                    file,
                    error = %err,
                    "could not fetch annotation source"
                );
                continue;
            }
        };
        merge_annotation_rows(&mut map, &text, file, organ)?;
    }

    Ok(map)
}

fn merge_annotation_rows(
    map: &mut AnnotationMap,
    text: &str,
    file: &str,
    organ: &OrganConfig,
) -> Result<(), AnnotationError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AnnotationError::Decode {
            file: file.to_string(),
            message: e.to_string(),
        })?
        .clone();
    let label_col = column_index(&headers, LABEL_COLUMN);
    let ontology_col = column_index(&headers, ONTOLOGY_COLUMN);

    for record in reader.records() {
        let record = record.map_err(|e| AnnotationError::Decode {
            file: file.to_string(),
            message: e.to_string(),
        })?;
        let label = field(&record, label_col);
        let ontology_id = ontology::extract_ontology_id(field(&record, ontology_col));
        if let Some((key, value)) = organ.match_type.annotation_entry(label, ontology_id) {
            map.insert(key, value);
        }
    }

    Ok(())
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn field<'a>(record: &'a csv::StringRecord, idx: Option<usize>) -> &'a str {
    idx.and_then(|i| record.get(i)).unwrap_or("")
}

#[cfg(test)]
#[path = "../../tests/src_inline/annotate/tests.rs"]
mod tests;
