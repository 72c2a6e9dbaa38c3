use anyhow::{Context, Result};
use clap::Parser;
use cod_export::cli::{Args, setup_logging};
use cod_export::models::ConversionStats;
use cod_export::processor::ExportProcessor;
use std::process;

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    match run(&args) {
        Ok(_stats) => {
            // Summary already printed by the processor
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<ConversionStats> {
    let config = args.to_config().context("Invalid arguments")?;

    let processor = ExportProcessor::new(args.input.clone(), config)
        .with_context(|| format!("Cannot convert {}", args.input.display()))?;

    processor
        .process()
        .with_context(|| format!("Conversion of {} failed", args.input.display()))
}
