//! Raw dataset records and JSONL line handling.
//!
//! Input files are JSON Lines: one transcribed-audio record per line. Records
//! are independent; this module reads them one at a time and classifies the
//! lines that cannot be used so callers can report rather than silently drop.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a record was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordIssue {
    #[error("invalid JSON: {0}")]
    Malformed(String),
    #[error("missing or empty transcript")]
    MissingTranscript,
    #[error("missing or empty audio reference")]
    MissingAudio,
    #[error("audio file not found: {0}")]
    AudioNotFound(String),
    #[error("unreadable audio file {path}: {reason}")]
    UnreadableAudio { path: String, reason: String },
    #[error("sampling rate {found} Hz, expected {expected} Hz: {path}")]
    SampleRateMismatch {
        path: String,
        found: u32,
        expected: u32,
    },
}

impl RecordIssue {
    /// Malformed lines are counted separately from structurally valid records
    /// that fail a presence or audio check.
    pub fn is_malformed(&self) -> bool {
        matches!(self, RecordIssue::Malformed(_))
    }
}

/// Audio reference as it appears in raw transcript files: either a bare path
/// string or a nested `{"path": ...}` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AudioRef {
    Path(String),
    Clip { path: String },
}

impl AudioRef {
    pub fn path(&self) -> &str {
        match self {
            AudioRef::Path(p) => p,
            AudioRef::Clip { path } => path,
        }
    }
}

/// One line of an input JSONL transcript file.
///
/// Field spellings vary between export pipelines, so the transcript and audio
/// reference accept the aliases we ingest in practice.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(alias = "sentence", alias = "transcript")]
    pub text: Option<String>,
    #[serde(alias = "audio_path")]
    pub audio: Option<AudioRef>,
    pub translation: Option<String>,
    pub language: Option<String>,
    pub duration: Option<f64>,
}

impl RawRecord {
    /// Presence checks for the two required fields. Returns the trimmed
    /// transcript and audio path when the record is usable.
    pub fn require_fields(&self) -> std::result::Result<(&str, &str), RecordIssue> {
        let text = self
            .text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(RecordIssue::MissingTranscript)?;

        let audio = self
            .audio
            .as_ref()
            .map(AudioRef::path)
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or(RecordIssue::MissingAudio)?;

        Ok((text, audio))
    }

    /// Translation text when present and non-empty.
    pub fn translation_text(&self) -> Option<&str> {
        self.translation
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Iterate the records of a JSONL file in input order.
///
/// Yields `(line_number, parse_result)` pairs; blank lines are skipped without
/// counting as records. Fails fast when the file cannot be opened.
pub fn open_records(
    path: &Path,
) -> Result<impl Iterator<Item = (usize, std::result::Result<RawRecord, RecordIssue>)>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open input file {}", path.display()))?;
    let reader = BufReader::new(file);

    Ok(reader.lines().enumerate().filter_map(|(idx, line)| {
        let line_no = idx + 1;
        let line = match line {
            Ok(line) => line,
            Err(e) => return Some((line_no, Err(RecordIssue::Malformed(e.to_string())))),
        };
        if line.trim().is_empty() {
            return None;
        }
        let parsed = serde_json::from_str::<RawRecord>(line.trim())
            .map_err(|e| RecordIssue::Malformed(e.to_string()));
        Some((line_no, parsed))
    }))
}

/// Buffered JSONL writer: one serialized object per output line.
pub struct JsonlWriter {
    path: PathBuf,
    inner: BufWriter<File>,
}

impl JsonlWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            inner: BufWriter::new(file),
        })
    }

    pub fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).context("Failed to serialize output record")?;
        writeln!(self.inner, "{}", json)
            .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.inner
            .flush()
            .with_context(|| format!("Failed to flush {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_ref_accepts_both_shapes() {
        let flat: RawRecord =
            serde_json::from_str(r#"{"audio_path": "a.wav", "text": "hello"}"#).unwrap();
        assert_eq!(flat.audio.as_ref().unwrap().path(), "a.wav");

        let nested: RawRecord =
            serde_json::from_str(r#"{"audio": {"path": "b.wav"}, "sentence": "hi"}"#).unwrap();
        assert_eq!(nested.audio.as_ref().unwrap().path(), "b.wav");
        assert_eq!(nested.text.as_deref(), Some("hi"));
    }

    #[test]
    fn test_require_fields_rejects_empty_transcript() {
        let record: RawRecord =
            serde_json::from_str(r#"{"audio_path": "a.wav", "text": "   "}"#).unwrap();
        assert_eq!(
            record.require_fields().unwrap_err(),
            RecordIssue::MissingTranscript
        );
    }

    #[test]
    fn test_require_fields_rejects_missing_audio() {
        let record: RawRecord = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(
            record.require_fields().unwrap_err(),
            RecordIssue::MissingAudio
        );
    }

    #[test]
    fn test_translation_text_ignores_blank() {
        let record: RawRecord =
            serde_json::from_str(r#"{"text": "hola", "audio_path": "a.wav", "translation": " "}"#)
                .unwrap();
        assert!(record.translation_text().is_none());
    }
}
