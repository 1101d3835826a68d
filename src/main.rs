use anyhow::Context;
use clap::Parser;
use raut2webstr::utils::logger;
use raut2webstr::{CliConfig, ConversionSummary, ConvertConfig, ConvertError, Converter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(summary) => {
            if !cli.dry_run {
                tracing::info!(
                    "Relocated {} files into {} modules, removed {} marker files",
                    summary.files_relocated,
                    summary.modules_created,
                    summary.init_files_removed
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => match e.downcast_ref::<ConvertError>() {
            // Input problems: nothing was touched, report on stdout.
            Some(err) if err.is_input_error() => {
                tracing::debug!("Input rejected: {:?}", err);
                println!("error: {}", err);
                ExitCode::from(err.exit_code())
            }
            Some(err) => {
                tracing::error!("Conversion failed: {}", err);
                eprintln!("error: {:#}", e);
                ExitCode::from(err.exit_code())
            }
            None => {
                eprintln!("error: {:#}", e);
                ExitCode::from(2)
            }
        },
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<ConversionSummary> {
    let config = ConvertConfig::from_cli(cli)?;
    let directory = config.directory.clone();
    let converter = Converter::new(config);

    let stdout = std::io::stdout();
    let summary = converter
        .run_configured(stdout.lock())
        .with_context(|| format!("converting {} aborted", directory.display()))?;
    Ok(summary)
}
