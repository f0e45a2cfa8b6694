//! CLI handler for validating a dataset.
//!
//! This module handles terminal presentation.
//! Core business logic is delegated to the `validate` module.

use anyhow::{bail, Result};
use std::path::Path;

use crate::cli::args::ValidateCliArgs;
use crate::config::Config;
use crate::validate::{self, ValidateOptions};

pub fn handle_validate_command(args: ValidateCliArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let options = ValidateOptions {
        check_audio: args.check_audio,
        expected_sampling_rate: args.sampling_rate.unwrap_or(config.audio.sampling_rate),
    };

    let report = validate::validate_file(&args.input, &options)?;

    println!("Validated {}", args.input.display());
    println!("Records: {}", report.records);
    println!("Valid: {}", report.valid);
    println!("Malformed lines: {}", report.malformed);
    println!("Incomplete records: {}", report.incomplete);
    if args.check_audio {
        println!("Missing audio files: {}", report.audio_missing);
        println!("Sample rate mismatches: {}", report.sample_rate_mismatch);
    }

    if !report.is_clean() {
        bail!(
            "{} of {} record(s) failed validation",
            report.invalid(),
            report.records
        );
    }

    println!("Dataset is valid.");
    Ok(())
}
