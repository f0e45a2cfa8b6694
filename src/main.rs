use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use voxprep::cli::{
    handle_manifest_command, handle_normalize_command, handle_validate_command, Cli, CliCommand,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        CliCommand::Version => {
            println!("voxprep {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliCommand::Normalize(args) => handle_normalize_command(args, cli.config.as_deref()),
        CliCommand::Manifest(args) => handle_manifest_command(args, cli.config.as_deref()),
        CliCommand::Validate(args) => handle_validate_command(args, cli.config.as_deref()),
    }
}
