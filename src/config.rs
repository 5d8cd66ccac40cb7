//! Run configuration, resolved once at startup.
//!
//! The section rules are fixed (see [`crate::taxonomy`]); only the inputs
//! and presentation of a run are configurable, from the command line and
//! environment.

use crate::cli::{Cli, ColorChoice, OutputFormat as CliOutputFormat};
use crate::formatting::{ColorMode, FormattingConfig};
use crate::output::OutputFormat;
use std::path::{Path, PathBuf};

/// Documentation root used when none is given, relative to the install location.
pub fn default_docs_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("docs")
        .join("industry-standard")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocmapConfig {
    pub docs_path: PathBuf,
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
    pub verbosity: u8,
}

impl DocmapConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let format = match (cli.plain, cli.format) {
            (true, CliOutputFormat::Json) => OutputFormat::Json,
            (true, _) | (false, CliOutputFormat::Plain) => OutputFormat::Plain,
            (false, CliOutputFormat::Terminal) => OutputFormat::Terminal,
            (false, CliOutputFormat::Json) => OutputFormat::Json,
        };

        Self {
            docs_path: cli.path.clone().unwrap_or_else(default_docs_path),
            format,
            formatting: resolve_formatting(cli.plain, cli.color),
            verbosity: cli.verbosity,
        }
    }
}

fn resolve_formatting(plain: bool, color: ColorChoice) -> FormattingConfig {
    if plain {
        return FormattingConfig::plain();
    }
    let mut config = FormattingConfig::from_env();
    match color {
        ColorChoice::Auto => {}
        ColorChoice::Always => config.color = ColorMode::Always,
        ColorChoice::Never => config.color = ColorMode::Never,
    }
    config
}
