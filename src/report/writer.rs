use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::annotate::AnnotationMap;
use crate::organs::MatchType;
use crate::report::SummaryRecord;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct AnnotationRow<'a> {
    #[serde(rename = "Label")]
    label: &'a str,
    #[serde(rename = "Ontology ID")]
    ontology_id: &'a str,
}

// One row per entry, in ascending key order (BTreeMap iteration).
pub fn write_annotations(
    path: &Path,
    map: &AnnotationMap,
    match_type: MatchType,
) -> Result<(), WriteError> {
    let mut writer = csv::Writer::from_path(path)?;
    for (key, value) in map {
        let (label, ontology_id) = match_type.output_fields(key, value);
        writer.serialize(AnnotationRow { label, ontology_id })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_summary(path: &Path, records: &[SummaryRecord]) -> Result<(), WriteError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/writer.rs"]
mod tests;
