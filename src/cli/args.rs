use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::schema::TargetSchema;

#[derive(Parser, Debug)]
#[command(name = "voxprep")]
#[command(about = "Prepare JSONL datasets for speech model fine-tuning", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to an alternate config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Normalize one JSONL file into a target training schema
    Normalize(NormalizeCliArgs),
    /// Build a combined fine-tuning manifest from a folder of transcript chunks
    Manifest(ManifestCliArgs),
    /// Check a JSONL dataset without writing output
    Validate(ValidateCliArgs),
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct NormalizeCliArgs {
    /// Input JSONL file
    pub input: PathBuf,
    /// Output JSONL file
    pub output: PathBuf,
    /// Target training schema
    #[arg(long, value_enum)]
    pub schema: Option<TargetSchema>,
    /// Source language code (M4T langcode)
    #[arg(long)]
    pub source_lang: Option<String>,
    /// Target language code (M4T langcode)
    #[arg(long)]
    pub target_lang: Option<String>,
    /// Audio sampling rate in Hz
    #[arg(long)]
    pub sampling_rate: Option<u32>,
}

#[derive(ClapArgs, Debug)]
pub struct ManifestCliArgs {
    /// Directory containing JSONL transcript chunk files
    pub input_folder: PathBuf,
    /// Path of the combined output manifest
    pub output_manifest: PathBuf,
    /// Filename pattern for input files ('*' wildcard)
    #[arg(long)]
    pub pattern: Option<String>,
    /// Target training schema
    #[arg(long, value_enum)]
    pub schema: Option<TargetSchema>,
    /// Source language code (M4T langcode)
    #[arg(long)]
    pub source_lang: Option<String>,
    /// Target language code (M4T langcode)
    #[arg(long)]
    pub target_lang: Option<String>,
    /// Audio sampling rate in Hz
    #[arg(long)]
    pub sampling_rate: Option<u32>,
    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ValidateCliArgs {
    /// Input JSONL file
    pub input: PathBuf,
    /// Verify audio references exist and wav sample rates match
    #[arg(long)]
    pub check_audio: bool,
    /// Expected sampling rate in Hz for wav checks
    #[arg(long)]
    pub sampling_rate: Option<u32>,
}
