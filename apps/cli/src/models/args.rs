//! # CLI Argument Definitions
//!
//! Subcommands mirror the four grouping operations. Every roster argument accepts a
//! file path or `-` for standard input.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "classkit")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Classroom toolkit: breakout groups, cold calling, peer review and project groups")]
pub struct Cli {
    /// Configuration file (defaults to `classkit.*` in the working directory when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible results
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Shuffle a list of names into breakout groups
    Breakout {
        /// Roster with one name per line (optional `name` header)
        roster: PathBuf,
        #[command(flatten)]
        sizing: SizingArgs,
    },
    /// Pick students to call on, skipping excused ones
    #[command(name = "cold-call")]
    ColdCall {
        /// Roster with a header line and `name,excused` rows
        roster: PathBuf,
        /// Number of students to pick (falls back to configuration)
        #[arg(short = 'n', long)]
        sample_size: Option<usize>,
        /// Keep excused students in the pool; `--include-excused=false` overrides configuration
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        include_excused: Option<bool>,
    },
    /// Assign every participant exactly one other participant to review
    #[command(name = "peer-review")]
    PeerReview {
        /// Participants (students or teams), one per line (optional `name` header)
        roster: PathBuf,
    },
    /// Group students who share interests
    #[command(name = "project-groups")]
    ProjectGroups {
        /// Roster with `name,preferences` rows (optional header)
        roster: PathBuf,
        #[command(flatten)]
        sizing: SizingArgs,
        /// Whitespace-separated topic delimiters, e.g. "/ ;" (falls back to configuration)
        #[arg(short, long)]
        delimiters: Option<String>,
    },
}

/// Group sizing shared by `breakout` and `project-groups`.
#[derive(Debug, Clone, Copy, Args)]
pub struct SizingArgs {
    /// Number of groups to form
    #[arg(short, long)]
    pub teams: Option<usize>,
    /// Target members per group
    #[arg(short, long)]
    pub group_size: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Text,
    /// CSV with a header row
    Csv,
}
