use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docmap")]
#[command(about = "Conformance checker for pillar-organized best-practice documentation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Documentation root to analyze
    #[arg(env = "DOCMAP_DOCS_PATH")]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// When to use colors
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Plain output (ASCII only, no colors)
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Plain,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
