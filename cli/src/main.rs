//! `devevents`: the DEV Events API from a terminal.
//!
//! Shares the `gateway` crate with the browser client, so the session rules
//! (401 clears the credential, legacy keys migrate on save) are identical.
//! The session lives in a JSON file instead of `localStorage`.

mod args;
mod commands;
mod error;
mod store;
mod transport;

#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use clap::Parser;
use gateway::{Api, Gateway};

use crate::args::Cli;
use crate::error::CliError;
use crate::store::FileStore;
use crate::transport::ReqwestTransport;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` also
/// controls the gateway's `log` records.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let session_path = match cli.session_file {
        Some(path) => path,
        None => store::default_session_path()?,
    };
    let store = FileStore::new(session_path);
    tracing::debug!(base_url = %cli.base_url, session = %store.path().display(), "starting");

    let api = Api::new(cli.base_url, ReqwestTransport::new());
    let mut gw = Gateway::open(store, api);
    let mut stdout = std::io::stdout().lock();
    commands::run(&mut gw, cli.command, &mut stdout).await
}
