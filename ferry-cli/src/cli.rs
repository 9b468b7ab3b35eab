//! Command-line interface definition for ferry.
//!
//! This module defines the CLI structure using clap's derive API.
//! Global options apply to all subcommands, while each subcommand
//! carries its own arguments in a struct under [`crate::commands`].

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    AppsCommand, CompletionsCommand, MapUrlCommand, OpenTargetCommand, ResolveCommand,
    ScriptCommand,
};

/// Resolve the current location of macOS applications.
#[derive(Parser)]
#[command(name = "ferry")]
#[command(version, about = "Resolve the current location of macOS applications", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the cloud storage container directory
    #[arg(
        long,
        value_name = "PATH",
        global = true,
        env = "FERRY_CLOUD_CONTAINER"
    )]
    pub cloud_container: Option<PathBuf>,

    /// Override the configuration directory location
    #[arg(long, value_name = "PATH", global = true, env = "FERRY_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve the current location of an application
    Resolve(ResolveCommand),

    /// Print the directory an open action should target for a path
    OpenTarget(OpenTargetCommand),

    /// Map a cloud sharing URL to a locally synced file
    MapUrl(MapUrlCommand),

    /// List the supported applications
    Apps(AppsCommand),

    /// Print the script used to interrogate an application
    Script(ScriptCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
