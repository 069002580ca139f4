mod cmd;
mod config;
mod datetime;
mod error;
mod session;
mod suninfo;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::{
    cmd::{Action, Cmd},
    config::Config,
    session::FileSessionStore,
    suninfo::handle_suninfo_command,
};

/// Parses the command line, sets up logging on stderr and dispatches the
/// requested action. Standard output is reserved for command results.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cmd = Cmd::parse();

    let default_level = if cmd.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::ERROR
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new(cmd.api_url, cmd.data_dir)?;
    debug!("Using configuration: {:?}", config);

    match cmd.action {
        Action::Suninfo => {
            let sessions = FileSessionStore::new(&config.data_dir);
            let client = reqwest::Client::new();
            let mut stdout = std::io::stdout().lock();

            handle_suninfo_command(&sessions, &client, &config, &mut stdout)
                .await
                .context("Failed to write to standard output")?;
        }
    }

    Ok(())
}
