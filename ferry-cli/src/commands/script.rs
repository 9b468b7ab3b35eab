//! Implementation of the `script` command.

use clap::Args;

use crate::error::CliError;
use crate::utils::{parse_app, GlobalOptions};
use ferry::build_script;

/// Print the script used to interrogate an application.
///
/// Useful for auditing what would be sent to the scripting bridge, or
/// for pasting into Script Editor when debugging a misbehaving
/// application.
#[derive(Args)]
pub struct ScriptCommand {
    /// Application whose script to print
    #[arg(value_name = "APP")]
    pub app: String,
}

impl ScriptCommand {
    /// Execute the script command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let app = parse_app(&self.app)?;
        println!("{}", build_script(app));
        Ok(())
    }
}
