use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mansort", version, about = "Manual library sorting CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Sort {
        #[arg(help = "Directory containing PDF manuals with JSON sidecar metadata")]
        source: PathBuf,
        #[arg(help = "Directory for sorted folders (defaults to the source directory)")]
        target: Option<PathBuf>,
        #[arg(
            long,
            default_value_t = false,
            help = "Report intended moves without touching the filesystem"
        )]
        dry_run: bool,
    },
    Demo,
}
