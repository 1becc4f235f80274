use serde::Serialize;

use crate::organs::OrganConfig;

pub mod writer;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryRecord {
    #[serde(rename = "Dataset")]
    pub dataset: String,
    #[serde(rename = "Azimuth Annotation Files")]
    pub annotation_files: String,
    #[serde(rename = "ASCT+B Table")]
    pub asctb_table: String,
    #[serde(rename = "Present in ASCT+B")]
    pub present: usize,
    #[serde(rename = "Absent in ASCT+B")]
    pub absent: usize,
    #[serde(rename = "Total Azimuth CTs")]
    pub total: usize,
    #[serde(rename = "Match Strategy")]
    pub match_strategy: String,
}

pub fn build_summary(organ: &OrganConfig, total: usize, present: usize) -> SummaryRecord {
    SummaryRecord {
        dataset: organ.name.to_string(),
        annotation_files: organ.annotations.join(", "),
        asctb_table: organ.asctb_table.to_string(),
        present,
        absent: total - present,
        total,
        match_strategy: organ.match_type.as_str().to_string(),
    }
}
