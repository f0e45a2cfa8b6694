//! CLI handler for building a combined fine-tuning manifest.
//!
//! Discovers transcript chunk files, delegates to the `manifest` module, and
//! reports progress per file.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::cli::args::ManifestCliArgs;
use crate::cli::mapping_options;
use crate::config::Config;
use crate::manifest;

pub fn handle_manifest_command(args: ManifestCliArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let schema = args.schema.unwrap_or(config.dataset.schema);
    let pattern = args
        .pattern
        .unwrap_or_else(|| config.dataset.pattern.clone());
    let options = mapping_options(&config, args.source_lang, args.target_lang, args.sampling_rate);

    let files = manifest::discover_inputs(&args.input_folder, &pattern)?;

    let pb = if args.no_progress {
        None
    } else {
        Some(create_progress_bar(files.len() as u64))
    };

    let report = manifest::build_manifest(
        &files,
        &args.output_manifest,
        schema,
        &options,
        |file, file_report| {
            if let Some(pb) = &pb {
                pb.set_message(format!(
                    "{} ({} samples)",
                    file.file_name().and_then(|n| n.to_str()).unwrap_or("?"),
                    file_report.written
                ));
                pb.inc(1);
            }
        },
    )?;

    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    println!(
        "Saved {} samples from {} file(s) to {} ({} schema)",
        report.totals.written,
        report.files,
        args.output_manifest.display(),
        schema.name()
    );
    if report.totals.skipped() > 0 {
        println!(
            "Skipped {} record(s): {} malformed, {} incomplete (see warnings above)",
            report.totals.skipped(),
            report.totals.skipped_malformed,
            report.totals.skipped_incomplete
        );
    }

    Ok(())
}

fn create_progress_bar(files: u64) -> ProgressBar {
    let pb = ProgressBar::new(files);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("━╸━"),
    );
    pb
}
