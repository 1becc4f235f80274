use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::annotate::annotation_url;
use crate::asctb::sheet_url;
use crate::organs::MatchType;
use crate::report::writer::write_summary as write_summary_file;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!(
        "azimuth_asctb_test_main_{}_{}",
        std::process::id(),
        id
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

struct FakeRowSource {
    documents: HashMap<String, String>,
}

impl FakeRowSource {
    fn new(documents: &[(String, &str)]) -> Self {
        Self {
            documents: documents
                .iter()
                .map(|(url, text)| (url.clone(), text.to_string()))
                .collect(),
        }
    }
}

impl RowSource for FakeRowSource {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}

const SPLEEN: OrganConfig = OrganConfig {
    name: "Spleen",
    annotations: &["spleen_l1"],
    asctb_table: "Spleen_v1.0_DRAFT",
    match_type: MatchType::Id,
};

const THYMUS: OrganConfig = OrganConfig {
    name: "Thymus",
    annotations: &["thymus_l1"],
    asctb_table: "Thymus_v1.0_DRAFT",
    match_type: MatchType::Id,
};

const SPLEEN_ANNOTATIONS: &str = "\
Label,OBO Ontology ID
T cell,\"[CL:0000084](http://purl.obolibrary.org/obo/CL_0000084)\"
B cell,\"[CL:0000236](http://purl.obolibrary.org/obo/CL_0000236)\"
";

const SPLEEN_TABLE: &str = "\
\"ASCT+B Spleen v1.0\",\"\"
\"Author\",\"HRA Team\"
\"AS/1\",\"AS/1/LABEL\",\"CT/1\",\"CT/1/Label\",\"CT/1/ID\"
\"spleen\",\"Spleen\",\"T cell\",\"alpha-beta T cell\",\"CL:0000084\"
\"spleen\",\"Spleen\",\"plasma cell\",\"plasma cell\",\"CL:0000786\"
";

fn spleen_source() -> FakeRowSource {
    FakeRowSource::new(&[
        (annotation_url("spleen_l1"), SPLEEN_ANNOTATIONS),
        (sheet_url("Spleen_v1.0_DRAFT"), SPLEEN_TABLE),
    ])
}

#[test]
fn test_process_organ_end_to_end() {
    let dir = make_temp_dir();
    let source = spleen_source();

    let record = process_organ(&SPLEEN, &source, &dir).unwrap();

    assert_eq!(record.dataset, "Spleen");
    assert_eq!(record.total, 2);
    assert_eq!(record.present, 1);
    assert_eq!(record.absent, 1);
    assert_eq!(record.match_strategy, "ID");

    let content = fs::read_to_string(dir.join("Spleen.csv")).unwrap();
    assert_eq!(content, "Label,Ontology ID\nB cell,CL:0000236\n");
}

#[test]
fn test_failed_reference_fetch_skips_organ_only() {
    let dir = make_temp_dir();
    // Thymus has annotations but no reference table in the fake.
    let source = FakeRowSource::new(&[
        (annotation_url("spleen_l1"), SPLEEN_ANNOTATIONS),
        (sheet_url("Spleen_v1.0_DRAFT"), SPLEEN_TABLE),
        (annotation_url("thymus_l1"), SPLEEN_ANNOTATIONS),
    ]);

    let summaries = process_all(&[THYMUS, SPLEEN], &source, &dir);

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].dataset, "Spleen");
    assert!(dir.join("Spleen.csv").exists());
    assert!(!dir.join("Thymus.csv").exists());
}

#[test]
fn test_summaries_sorted_by_dataset() {
    let dir = make_temp_dir();
    let source = FakeRowSource::new(&[
        (annotation_url("spleen_l1"), SPLEEN_ANNOTATIONS),
        (sheet_url("Spleen_v1.0_DRAFT"), SPLEEN_TABLE),
        (annotation_url("thymus_l1"), SPLEEN_ANNOTATIONS),
        (sheet_url("Thymus_v1.0_DRAFT"), SPLEEN_TABLE),
    ]);

    // Declared out of order; the accumulator comes back sorted.
    let summaries = process_all(&[THYMUS, SPLEEN], &source, &dir);

    let datasets: Vec<&str> = summaries.iter().map(|s| s.dataset.as_str()).collect();
    assert_eq!(datasets, vec!["Spleen", "Thymus"]);
}

#[test]
fn test_reruns_produce_identical_output() {
    let first = make_temp_dir();
    let second = make_temp_dir();
    let source = spleen_source();

    let summaries_a = process_all(&[SPLEEN], &source, &first);
    write_summary_file(&first.join("Summary.csv"), &summaries_a).unwrap();
    let summaries_b = process_all(&[SPLEEN], &source, &second);
    write_summary_file(&second.join("Summary.csv"), &summaries_b).unwrap();

    for file in ["Spleen.csv", "Summary.csv"] {
        assert_eq!(
            fs::read(first.join(file)).unwrap(),
            fs::read(second.join(file)).unwrap(),
        );
    }
}

#[test]
fn test_organ_with_all_sources_missing_still_reports() {
    let dir = make_temp_dir();
    // Annotation fetches fail but the reference table resolves: the organ
    // degrades to an empty map rather than aborting.
    let source = FakeRowSource::new(&[(sheet_url("Spleen_v1.0_DRAFT"), SPLEEN_TABLE)]);

    let record = process_organ(&SPLEEN, &source, &dir).unwrap();

    assert_eq!(record.total, 0);
    assert_eq!(record.present, 0);
    assert_eq!(record.absent, 0);
    assert_eq!(fs::read_to_string(dir.join("Spleen.csv")).unwrap(), "");
}
