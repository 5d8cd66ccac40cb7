use crate::analysis::analyze_directory;
use crate::config::DocmapConfig;
use crate::core::DocmapError;
use crate::output::write_report;
use anyhow::Result;
use std::io::Write;

/// Analyze the configured root and render the report to `writer`.
///
/// Fails with [`DocmapError::RootNotFound`] before anything is written when
/// the root does not exist.
pub fn handle_analyze<W: Write>(config: &DocmapConfig, writer: W) -> Result<()> {
    if !config.docs_path.exists() {
        return Err(DocmapError::root_not_found(&config.docs_path).into());
    }

    log::info!("Analyzing {}", config.docs_path.display());
    let result = analyze_directory(&config.docs_path);
    write_report(&result, config.format, config.formatting, writer)
}
