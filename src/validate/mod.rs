//! Dataset validation pass.
//!
//! Walks a JSONL dataset once without writing output, counting malformed
//! lines and incomplete records. With audio checks enabled it also verifies
//! every audio reference resolves on disk, and reads the header of wav files
//! to confirm the sampling rate matches the configured one.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::dataset::{self, RecordIssue};

/// What to check beyond line shape and required fields.
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    pub check_audio: bool,
    pub expected_sampling_rate: u32,
}

/// Counts from one validation pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateReport {
    /// Non-blank input lines seen
    pub records: usize,
    /// Records that passed every enabled check
    pub valid: usize,
    pub malformed: usize,
    pub incomplete: usize,
    pub audio_missing: usize,
    pub sample_rate_mismatch: usize,
}

impl ValidateReport {
    pub fn is_clean(&self) -> bool {
        self.valid == self.records
    }

    pub fn invalid(&self) -> usize {
        self.records - self.valid
    }
}

/// Validate one JSONL dataset file.
pub fn validate_file(input: &Path, options: &ValidateOptions) -> Result<ValidateReport> {
    let base_dir = input.parent().map(Path::to_path_buf);
    let mut report = ValidateReport::default();

    for (line_no, parsed) in dataset::open_records(input)? {
        report.records += 1;

        let issue = match parsed {
            Err(issue) => Some(issue),
            Ok(record) => match record.require_fields() {
                Err(issue) => Some(issue),
                Ok((_, audio)) => {
                    if options.check_audio {
                        check_audio(audio, base_dir.as_deref(), options.expected_sampling_rate)
                            .err()
                    } else {
                        None
                    }
                }
            },
        };

        match issue {
            None => report.valid += 1,
            Some(issue) => {
                warn!("Line {} of {}: {}", line_no, input.display(), issue);
                match issue {
                    RecordIssue::Malformed(_) => report.malformed += 1,
                    RecordIssue::MissingTranscript | RecordIssue::MissingAudio => {
                        report.incomplete += 1
                    }
                    RecordIssue::AudioNotFound(_) | RecordIssue::UnreadableAudio { .. } => {
                        report.audio_missing += 1
                    }
                    RecordIssue::SampleRateMismatch { .. } => report.sample_rate_mismatch += 1,
                }
            }
        }
    }

    Ok(report)
}

/// Relative audio paths are resolved against the dataset file's directory.
fn resolve_audio_path(audio: &str, base_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(audio);
    match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

fn check_audio(
    audio: &str,
    base_dir: Option<&Path>,
    expected_sampling_rate: u32,
) -> std::result::Result<(), RecordIssue> {
    let path = resolve_audio_path(audio, base_dir);
    if !path.is_file() {
        return Err(RecordIssue::AudioNotFound(audio.to_string()));
    }

    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
    {
        let reader = hound::WavReader::open(&path).map_err(|e| RecordIssue::UnreadableAudio {
            path: audio.to_string(),
            reason: e.to_string(),
        })?;
        let found = reader.spec().sample_rate;
        if found != expected_sampling_rate {
            return Err(RecordIssue::SampleRateMismatch {
                path: audio.to_string(),
                found,
                expected: expected_sampling_rate,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_audio_path_relative() {
        let base = Path::new("/data/set");
        assert_eq!(
            resolve_audio_path("clips/a.wav", Some(base)),
            PathBuf::from("/data/set/clips/a.wav")
        );
        assert_eq!(
            resolve_audio_path("/abs/a.wav", Some(base)),
            PathBuf::from("/abs/a.wav")
        );
    }
}
