//! algo-recognizer CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use algo_recognizer::commands::{
    run_config, run_dataset, run_extract, run_predict, run_scan, run_train, CommandContext,
};
use algo_recognizer::{Cli, Commands};

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> algo_recognizer::Result<String> {
    let cli = Cli::parse();
    let ctx = CommandContext::from_cli(cli.format, cli.verbose, cli.config.as_deref())?;

    init_tracing(&ctx);

    match &cli.command {
        Commands::Scan(args) => run_scan(args, &ctx),
        Commands::Extract(args) => run_extract(args, &ctx),
        Commands::Predict(args) => run_predict(args, &ctx),
        Commands::Dataset(args) => run_dataset(args, &ctx),
        Commands::Train(args) => run_train(args, &ctx),
        Commands::Config(args) => run_config(args, &ctx),
    }
}

/// Logs go to stderr so stdout carries only command output
fn init_tracing(ctx: &CommandContext) {
    let level = if ctx.verbose {
        "debug"
    } else {
        ctx.config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
