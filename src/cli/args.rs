//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Inspect the git history of rollout.yaml files and roll them back to a prior revision
#[derive(Parser, Debug)]
#[command(name = "rollback")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<clap_complete::Shell>,

    /// A rollout.yaml file, or a directory to search for them
    #[arg(
        value_hint = ValueHint::AnyPath,
        required_unless_present = "completions"
    )]
    pub path: Option<PathBuf>,
}
