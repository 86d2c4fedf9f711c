//! CLI entry point for shadcn-mdc.

mod cli;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, OutputFormat};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let theme = match shadcn_mdc::mdctotheme_with(
        cli.input.as_str(),
        cli.radius,
        cli.resolver_config(),
    )
    .await
    {
        Ok(theme) => theme,
        Err(err) => {
            eprintln!("error: {}", err);
            return Ok(ExitCode::from(2));
        }
    };

    let failed = !theme.is_ok();
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&theme)?),
        OutputFormat::Css => match theme.into_result() {
            Ok(pair) => print!("{}", pair.to_css()),
            Err(message) => eprintln!("error: {}", message),
        },
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
