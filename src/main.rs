mod annotate;
mod asctb;
mod fetch;
mod organs;
mod reconcile;
mod report;

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::annotate::{AnnotationError, build_annotation_map};
use crate::asctb::{TableError, parse_reference_table, sheet_url};
use crate::fetch::{FetchError, HttpRowSource, RowSource};
use crate::organs::{OrganConfig, builtin_organs};
use crate::report::writer::{WriteError, write_annotations, write_summary};
use crate::report::{SummaryRecord, build_summary};

const OUTPUT_DIR: &str = "output";

#[derive(Debug, Error)]
enum OrganError {
    #[error(transparent)]
    Annotation(#[from] AnnotationError),
    #[error("fetching reference table: {0}")]
    ReferenceFetch(#[from] FetchError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

#[derive(Debug, Error)]
enum RunError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Client(#[from] FetchError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn run() -> Result<(), RunError> {
    let out_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out_dir)?;

    let source = HttpRowSource::new()?;
    let summaries = process_all(builtin_organs(), &source, out_dir);
    write_summary(&out_dir.join("Summary.csv"), &summaries)?;

    Ok(())
}

// An organ that fails is logged and skipped so the remaining organs, and
// the summary, still get written.
fn process_all(
    organs: &[OrganConfig],
    source: &dyn RowSource,
    out_dir: &Path,
) -> Vec<SummaryRecord> {
    let mut summaries = Vec::with_capacity(organs.len());

    for organ in organs {
        match process_organ(organ, source, out_dir) {
            Ok(record) => summaries.push(record),
            Err(err) => {
                tracing::error!(organ = organ.name, error = %err, "skipping organ");
            }
        }
    }

    summaries.sort_by(|a, b| a.dataset.cmp(&b.dataset));
    summaries
}

fn process_organ(
    organ: &OrganConfig,
    source: &dyn RowSource,
    out_dir: &Path,
) -> Result<SummaryRecord, OrganError> {
    let mut map = build_annotation_map(organ, source)?;
    let total = map.len();

    let raw = source.fetch_text(&sheet_url(organ.asctb_table))?;
    let rows = parse_reference_table(&raw)?;
    let present = reconcile::reconcile(&mut map, &rows, organ.match_type);
    tracing::info!("{} values found for {}", present, organ.name);

    write_annotations(
        &out_dir.join(format!("{}.csv", organ.name)),
        &map,
        organ.match_type,
    )?;

    Ok(build_summary(organ, total, present))
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
