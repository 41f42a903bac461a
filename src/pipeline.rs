use std::path::Path;

use tracing::info;

use crate::dedup::dedupe;
use crate::error::Result;
use crate::input::read_raw_records_file;
use crate::normalize::clean_records;
use crate::output::{write_compact_file, write_table_file};
use crate::record::{IntersectionRecord, RawRecord};
use crate::resolve::resolve_records;

/// How many records survived (or were dropped at) each stage of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    pub raw: usize,
    pub invalid_id: usize,
    pub cleaned: usize,
    pub unresolved_cross_street: usize,
    pub resolved: usize,
    pub intersections: usize,
}

pub fn munge(rows: &[RawRecord]) -> Result<(Vec<IntersectionRecord>, PipelineStats)> {
    let mut stats = PipelineStats {
        raw: rows.len(),
        ..PipelineStats::default()
    };

    let (cleaned, invalid_id) = clean_records(rows)?;
    stats.invalid_id = invalid_id;
    stats.cleaned = cleaned.len();

    let (resolved, unresolved) = resolve_records(cleaned)?;
    stats.unresolved_cross_street = unresolved;
    stats.resolved = resolved.len();

    let intersections = dedupe(resolved)?;
    stats.intersections = intersections.len();
    Ok((intersections, stats))
}

/// Reads `input`, writes the tabular CSV to `table_path` and the compact JSON
/// to `compact_path`.
pub fn munge_files(
    input: &Path,
    table_path: &Path,
    compact_path: &Path,
) -> Result<PipelineStats> {
    let rows = read_raw_records_file(input)?;
    info!(count = rows.len(), path = %input.display(), "read raw records");

    let (intersections, stats) = munge(&rows)?;
    info!(
        cleaned = stats.cleaned,
        invalid_id = stats.invalid_id,
        "cleaned records with valid street ids"
    );
    info!(
        resolved = stats.resolved,
        unresolved_cross_street = stats.unresolved_cross_street,
        "resolved cross streets"
    );
    info!(count = stats.intersections, "de-duped intersections");

    write_table_file(table_path, &intersections)?;
    info!(path = %table_path.display(), "wrote munged CSV");
    write_compact_file(compact_path, &intersections)?;
    info!(path = %compact_path.display(), "wrote simplified JSON");

    Ok(stats)
}
