pub mod check;
pub mod targets;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "edgeprobe")]
#[command(about = "Connectivity diagnostics for the Cloudflare edge.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress decorative output (repeat to also drop report lines)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe every target and report PASSED/FAILED per line
    #[command(alias = "c")]
    Check {
        /// Load targets from a file instead of the built-in catalog
        #[arg(long, value_name = "FILE")]
        targets: Option<PathBuf>,
        /// Per-target timeout in seconds
        #[arg(long, value_name = "SECS", default_value_t = 5)]
        timeout: u64,
        /// Exit nonzero when any target fails
        #[arg(long)]
        strict: bool,
        /// Clear the screen once before probing
        #[arg(long)]
        clear: bool,
    },
    /// Show the built-in target catalog without probing
    #[command(alias = "t")]
    Targets,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
