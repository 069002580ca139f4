use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_API_URL;

#[derive(Parser)]
#[clap(author, version, about = "Command-line client for FlyAwayHub")]
pub struct Cmd {
    #[clap(
        short,
        long,
        env = "FLYAWAYHUB_DATA_DIR",
        help = "Directory holding the saved session"
    )]
    pub data_dir: Option<PathBuf>,

    #[clap(
        long,
        env = "FLYAWAYHUB_API_URL",
        default_value = DEFAULT_API_URL,
        help = "Base URL of the FlyAwayHub API"
    )]
    pub api_url: String,

    #[clap(short, long, help = "Display debug messages")]
    pub verbose: bool,

    #[clap(subcommand)]
    pub action: Action,
}

#[derive(Subcommand)]
pub enum Action {
    #[clap(about = "Show sunrise, sunset and twilight times for your saved location")]
    Suninfo,
}
