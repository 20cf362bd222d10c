use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "careerwatch")]
#[command(about = "Search careers pages for a keyword")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// URL list file
    #[arg(long, global = true)]
    pub url_file: Option<PathBuf>,

    /// Where to write the HTML report
    #[arg(long, global = true)]
    pub report: Option<PathBuf>,

    /// Number of pages checked at once (results keep list order)
    #[arg(long, global = true)]
    pub concurrency: Option<u32>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search every stored page for a keyword
    Search {
        /// Keyword to look for (whole word, case-insensitive)
        keyword: String,
    },

    /// Add a careers page
    Add {
        /// Company name
        company: String,
        /// Careers page URL
        url: String,
    },

    /// Remove pages by URL or company name
    Remove {
        /// URL or company name
        target: String,
    },

    /// List stored pages
    List,
}
