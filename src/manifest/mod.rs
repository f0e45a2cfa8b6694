//! Combined manifest construction from a folder of transcript chunk files.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

use crate::dataset::JsonlWriter;
use crate::normalizer::{self, NormalizeReport};
use crate::schema::{MappingOptions, TargetSchema};

/// Counts for a whole manifest build.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestReport {
    pub files: usize,
    pub totals: NormalizeReport,
}

/// Match a filename against a pattern where `*` matches any run of
/// characters. No other metacharacters are supported.
pub fn matches_pattern(name: &str, pattern: &str) -> bool {
    if !pattern.contains('*') {
        return name == pattern;
    }

    let mut parts = pattern.split('*');
    let first = parts.next().unwrap_or("");
    if !name.starts_with(first) {
        return false;
    }

    let mut pos = first.len();
    let parts: Vec<&str> = parts.collect();
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        if i == parts.len() - 1 {
            return name.len() >= pos && name[pos..].ends_with(part);
        }
        match name[pos..].find(part) {
            Some(found) => pos += found + part.len(),
            None => return false,
        }
    }

    // Pattern ends with '*'
    true
}

/// Find input files directly under `folder` whose names match `pattern`,
/// sorted by path for a deterministic processing order.
pub fn discover_inputs(folder: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        bail!("Input folder not found: {}", folder.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .map(|name| matches_pattern(name, pattern))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();

    if files.is_empty() {
        bail!(
            "No files matching '{}' found in folder: {}",
            pattern,
            folder.display()
        );
    }

    Ok(files)
}

/// Normalize every discovered file into one combined manifest, in file order.
///
/// `on_file` runs after each file completes, for progress reporting.
pub fn build_manifest(
    files: &[PathBuf],
    output: &Path,
    schema: TargetSchema,
    options: &MappingOptions,
    mut on_file: impl FnMut(&Path, &NormalizeReport),
) -> Result<ManifestReport> {
    let mut writer = JsonlWriter::create(output)?;
    let mut report = ManifestReport::default();

    for file in files {
        let file_report = normalizer::normalize_file(file, &mut writer, schema, options)
            .with_context(|| format!("Failed to process {}", file.display()))?;
        info!("Processed file: {}", file.display());
        report.files += 1;
        report.totals.absorb(&file_report);
        on_file(file, &file_report);
    }

    writer.finish()?;
    info!(
        "Saved {} samples to manifest: {}",
        report.totals.written,
        output.display()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_pattern_wildcard() {
        assert!(matches_pattern("chunks_01.jsonl", "*.jsonl"));
        assert!(matches_pattern(
            "combined_transcripts_audio_chunks_3.jsonl",
            "combined_transcripts_audio_chunks_*.jsonl"
        ));
        assert!(!matches_pattern("chunks_01.json", "*.jsonl"));
        assert!(!matches_pattern("notes.txt", "chunks_*.jsonl"));
    }

    #[test]
    fn test_matches_pattern_literal() {
        assert!(matches_pattern("data.jsonl", "data.jsonl"));
        assert!(!matches_pattern("data.jsonl.bak", "data.jsonl"));
    }

    #[test]
    fn test_matches_pattern_middle_wildcards() {
        assert!(matches_pattern("a_mid_b.jsonl", "a_*_b.jsonl"));
        assert!(matches_pattern("prefix-anything", "prefix-*"));
        assert!(!matches_pattern("b_mid_a.jsonl", "a_*_b.jsonl"));
    }
}
