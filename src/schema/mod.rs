//! Target training schemas and the record mapping.
//!
//! The mapping from a raw record to a manifest sample is a pure function of
//! (record, schema, options, id). Sample identifiers are generated by the
//! caller so the mapping itself stays deterministic.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dataset::{RawRecord, RecordIssue};

/// Language and audio parameters applied during mapping.
#[derive(Debug, Clone)]
pub struct MappingOptions {
    /// Source language code (M4T langcode)
    pub source_lang: String,
    /// Target language code (M4T langcode)
    pub target_lang: String,
    /// Audio sampling rate in Hz
    pub sampling_rate: u32,
}

/// Which fine-tuning pipeline the output manifest targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TargetSchema {
    /// SeamlessM4T S2T manifest: nested source/target halves sharing an id
    Seamless,
    /// Flat Whisper fine-tuning sample: audio path plus transcript
    Whisper,
}

/// Source half of a SeamlessM4T manifest sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceHalf {
    pub id: String,
    pub text: String,
    pub lang: String,
    pub audio_local_path: String,
    pub sampling_rate: u32,
}

/// Target half of a SeamlessM4T manifest sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetHalf {
    pub id: String,
    pub text: String,
    pub lang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeamlessSample {
    pub source: SourceHalf,
    pub target: TargetHalf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhisperSample {
    pub audio: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// One output JSONL line in whichever schema was selected.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ManifestSample {
    Seamless(SeamlessSample),
    Whisper(WhisperSample),
}

impl TargetSchema {
    /// Generate a fresh sample identifier.
    pub fn new_sample_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Map one raw record into this schema.
    ///
    /// Fails with the reason when a required field is missing or empty; the
    /// caller decides whether that skips the record or fails the run.
    pub fn map_record(
        &self,
        record: &RawRecord,
        id: &str,
        options: &MappingOptions,
    ) -> Result<ManifestSample, RecordIssue> {
        let (text, audio) = record.require_fields()?;

        match self {
            TargetSchema::Seamless => {
                // Same-language fine-tuning has no translation; the target
                // half repeats the transcript.
                let target_text = record.translation_text().unwrap_or(text);
                Ok(ManifestSample::Seamless(SeamlessSample {
                    source: SourceHalf {
                        id: id.to_string(),
                        text: text.to_string(),
                        lang: options.source_lang.clone(),
                        audio_local_path: audio.to_string(),
                        sampling_rate: options.sampling_rate,
                    },
                    target: TargetHalf {
                        id: id.to_string(),
                        text: target_text.to_string(),
                        lang: options.target_lang.clone(),
                    },
                }))
            }
            TargetSchema::Whisper => Ok(ManifestSample::Whisper(WhisperSample {
                audio: audio.to_string(),
                text: text.to_string(),
                language: record.language.clone(),
                duration: record.duration,
            })),
        }
    }

    /// Name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            TargetSchema::Seamless => "seamless",
            TargetSchema::Whisper => "whisper",
        }
    }
}
