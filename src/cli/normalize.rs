//! CLI handler for normalizing a single JSONL file.
//!
//! This module handles terminal presentation.
//! Core business logic is delegated to the `normalizer` module.

use anyhow::Result;
use std::path::Path;

use crate::cli::args::NormalizeCliArgs;
use crate::cli::mapping_options;
use crate::config::Config;
use crate::normalizer;

pub fn handle_normalize_command(args: NormalizeCliArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let schema = args.schema.unwrap_or(config.dataset.schema);
    let options = mapping_options(&config, args.source_lang, args.target_lang, args.sampling_rate);

    let report = normalizer::normalize_to_path(&args.input, &args.output, schema, &options)?;

    println!(
        "Normalized {} -> {} ({} schema)",
        args.input.display(),
        args.output.display(),
        schema.name()
    );
    println!(
        "Records: {} read, {} written, {} skipped",
        report.read,
        report.written,
        report.skipped()
    );
    if report.skipped() > 0 {
        println!(
            "Skipped breakdown: {} malformed, {} incomplete (see warnings above)",
            report.skipped_malformed, report.skipped_incomplete
        );
    }

    Ok(())
}
