//! Record-by-record JSONL normalization.
//!
//! Reads an input file once, maps each record into the target schema, and
//! writes one output line per kept record, preserving input order. Records
//! that cannot be used are skipped with a logged warning and counted; they
//! never abort the run.

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::dataset::{self, JsonlWriter};
use crate::schema::{MappingOptions, TargetSchema};

/// Outcome counts for one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Non-blank input lines seen
    pub read: usize,
    /// Output lines written
    pub written: usize,
    /// Lines that were not valid JSON
    pub skipped_malformed: usize,
    /// Parsed records missing a transcript or audio reference
    pub skipped_incomplete: usize,
}

impl NormalizeReport {
    pub fn skipped(&self) -> usize {
        self.skipped_malformed + self.skipped_incomplete
    }

    /// Fold another file's counts into a running total.
    pub fn absorb(&mut self, other: &NormalizeReport) {
        self.read += other.read;
        self.written += other.written;
        self.skipped_malformed += other.skipped_malformed;
        self.skipped_incomplete += other.skipped_incomplete;
    }
}

/// Normalize one input file into an already-open writer.
///
/// Used directly when combining several chunk files into a single manifest.
pub fn normalize_file(
    input: &Path,
    writer: &mut JsonlWriter,
    schema: TargetSchema,
    options: &MappingOptions,
) -> Result<NormalizeReport> {
    debug!("Normalizing {} with {} schema", input.display(), schema.name());
    let mut report = NormalizeReport::default();

    for (line_no, parsed) in dataset::open_records(input)? {
        report.read += 1;

        let record = match parsed {
            Ok(record) => record,
            Err(issue) => {
                warn!("Skipping line {} of {}: {}", line_no, input.display(), issue);
                report.skipped_malformed += 1;
                continue;
            }
        };

        let id = TargetSchema::new_sample_id();
        match schema.map_record(&record, &id, options) {
            Ok(sample) => {
                writer.write_line(&sample)?;
                report.written += 1;
            }
            Err(issue) => {
                warn!("Skipping line {} of {}: {}", line_no, input.display(), issue);
                report.skipped_incomplete += 1;
            }
        }
    }

    Ok(report)
}

/// Normalize a single input file to a single output file.
pub fn normalize_to_path(
    input: &Path,
    output: &Path,
    schema: TargetSchema,
    options: &MappingOptions,
) -> Result<NormalizeReport> {
    let mut writer = JsonlWriter::create(output)?;
    let report = normalize_file(input, &mut writer, schema, options)?;
    writer.finish()?;

    info!(
        "Wrote {} of {} records to {} ({} skipped)",
        report.written,
        report.read,
        output.display(),
        report.skipped()
    );
    Ok(report)
}
