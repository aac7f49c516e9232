use crate::config::Settings;
use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-activity")]
#[command(about = "Daily commit activity for a git repository, overall and per author")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, global = true, help = "Path to git repository (default: current directory)")]
    pub repo: Option<PathBuf>,

    #[arg(long, global = true, help = "Bucket commits by UTC date instead of local date")]
    pub utc: bool,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Daily commit counts with per-author breakdown
    Series {
        #[arg(long, help = "Output the series as a JSON document", conflicts_with = "ndjson")]
        json: bool,

        #[arg(long, help = "Output one JSON record per day")]
        ndjson: bool,
    },
    /// Commit totals and active range per author
    Authors {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::setup_logger(self.common.verbose);

        let settings = Settings::new(self.common.repo, self.common.utc)
            .context("Failed to resolve repository path")?;

        match self.command {
            Commands::Series { json, ndjson } => crate::series::exec(settings, json, ndjson),
            Commands::Authors { json } => crate::series::exec_authors(settings, json),
        }
    }
}
