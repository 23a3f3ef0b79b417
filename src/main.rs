//! pagepack command-line entry point.

use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use pagepack::cli::{Cli, Commands, compile, route};
use pagepack::config::PackConfig;
use pagepack::logger;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            logger::error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = PackConfig::load(cli)?;

    match &cli.command {
        Commands::Minify => compile::run_minify(&config).map(|_| ()),
        Commands::Compile { .. } => compile::run_compile(&config).map(|_| ()),
        Commands::Build { .. } => compile::run_build(&config).map(|_| ()),
        Commands::Route { paths } => {
            let missing = route::run_route(&config, paths)?;
            // unresolved paths fail the command, like a 404
            if missing > 0 {
                return Ok(ExitCode::FAILURE);
            }
            Ok(())
        }
        Commands::List => route::run_list(&config),
    }?;

    Ok(ExitCode::SUCCESS)
}
