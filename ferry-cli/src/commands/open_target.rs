//! Implementation of the `open-target` command.

use clap::Args;
use std::path::PathBuf;

use crate::error::CliError;
use crate::utils::GlobalOptions;
use ferry::resolve_open_target;

/// Print the directory an open action should target for a path.
///
/// Files open into their parent directory; directories open into
/// themselves. Paths that do not exist are printed unchanged so the
/// caller can decide how to handle them.
#[derive(Args)]
pub struct OpenTargetCommand {
    /// Path to derive the open target for
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

impl OpenTargetCommand {
    /// Execute the open-target command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let target = resolve_open_target(&self.path);
        println!("{}", target.display());
        Ok(())
    }
}
