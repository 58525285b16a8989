use leadsign::{run, BODY, MAC_ALGORITHM_DEFAULT, TOKEN};

use clap::Parser;

use std::process::ExitCode;

/// Sign the embedded lead webhook body with HMAC-SHA1.
#[derive(Parser)]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    match run(TOKEN, BODY, MAC_ALGORITHM_DEFAULT, &mut std::io::stdout().lock()) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            tracing::error!("cannot write to stdout: {e}");
            ExitCode::FAILURE
        }
    }
}
