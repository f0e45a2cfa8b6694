pub mod args;
mod manifest;
mod normalize;
mod validate;

pub use args::{Cli, CliCommand};
pub use manifest::handle_manifest_command;
pub use normalize::handle_normalize_command;
pub use validate::handle_validate_command;

use crate::config::Config;
use crate::schema::MappingOptions;

/// Merge CLI overrides onto the loaded config.
fn mapping_options(
    config: &Config,
    source_lang: Option<String>,
    target_lang: Option<String>,
    sampling_rate: Option<u32>,
) -> MappingOptions {
    MappingOptions {
        source_lang: source_lang.unwrap_or_else(|| config.languages.source.clone()),
        target_lang: target_lang.unwrap_or_else(|| config.languages.target.clone()),
        sampling_rate: sampling_rate.unwrap_or(config.audio.sampling_rate),
    }
}
