//! Build script for ferry-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("ferry")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve the current location of macOS applications")
        .long_about(
            "Command-line tool for asking macOS applications where they are, mapping cloud \
             sharing URLs to locally synced files along the way",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("cloud-container")
                .long("cloud-container")
                .help("Override the cloud storage container directory")
                .value_name("PATH")
                .global(true)
                .env("FERRY_CLOUD_CONTAINER"),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the configuration directory location")
                .value_name("PATH")
                .global(true)
                .env("FERRY_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve the current location of an application")
                .long_about(
                    "Ask a running application for its current folder or document and print \
                     the resolved path",
                ),
            Command::new("open-target")
                .about("Print the directory an open action should target for a path")
                .long_about(
                    "Print the parent directory for files, the directory itself for \
                     directories, and the path unchanged when it does not exist",
                ),
            Command::new("map-url")
                .about("Map a cloud sharing URL to a locally synced file")
                .long_about(
                    "Probe the cloud storage sync roots for a local copy of a shared document",
                ),
            Command::new("apps")
                .about("List the supported applications")
                .long_about("Display all supported applications in various formats"),
            Command::new("script")
                .about("Print the script used to interrogate an application")
                .long_about("Show the automation script that would be sent to an application"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main ferry.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("ferry.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
