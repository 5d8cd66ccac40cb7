use anyhow::Result;
use docmap::cli;
use docmap::config::DocmapConfig;
use docmap::core::DocmapError;
use docmap::formatting::formatter_for;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = cli::parse_args();
    docmap::observability::init_logging(cli.verbosity);

    let config = DocmapConfig::from_cli(&cli);
    log::debug!("Resolved configuration: {:?}", config);

    let stdout = std::io::stdout();
    match docmap::commands::handle_analyze(&config, stdout.lock()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<DocmapError>() {
            Some(missing @ DocmapError::RootNotFound { .. }) => {
                let formatter = formatter_for(config.formatting);
                eprintln!("{}", formatter.error(&format!("Error: {missing}")));
                Ok(ExitCode::FAILURE)
            }
            _ => Err(err),
        },
    }
}
