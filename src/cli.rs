use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "wtsync",
    version,
    about = "Sync the names of active git worktrees into a client list file"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Prune stale worktree records and rewrite the client list file.
    #[command(alias = "s")]
    Sync {
        /// Repository to sync. Defaults to the repository containing the current directory.
        #[arg(long)]
        repo: Option<PathBuf>,
        /// List file to write. Defaults to the configured client list path.
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
        /// Container directory segment worktree names are taken after.
        #[arg(short = 'm', long)]
        marker: Option<String>,
    },
    /// Show discovered worktrees and the names a sync would write.
    #[command(alias = "t")]
    Status {
        #[arg(long)]
        json: bool,
        /// Repository to inspect. Defaults to the repository containing the current directory.
        #[arg(long)]
        repo: Option<PathBuf>,
        /// Container directory segment worktree names are taken after.
        #[arg(short = 'm', long)]
        marker: Option<String>,
    },
    /// Run sanity checks and print remediation commands.
    Doctor {
        /// Repository to check. Defaults to the repository containing the current directory.
        #[arg(long)]
        repo: Option<PathBuf>,
        /// List file the checks are run against.
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}
