//! Implementation of the `map-url` command.

use clap::Args;

use crate::error::CliError;
use crate::utils::{build_mapper, load_configuration, GlobalOptions};

/// Map a cloud sharing URL to a locally synced file.
///
/// Prints the local path when a synced copy exists under the cloud
/// storage container. When no copy matches, the command fails with
/// exit code 1 so scripts can fall back to the original URL.
#[derive(Args)]
pub struct MapUrlCommand {
    /// Sharing URL to map (e.g. a SharePoint document link)
    #[arg(value_name = "URL")]
    pub url: String,
}

impl MapUrlCommand {
    /// Execute the map-url command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Build the mapper over the merged configuration
        let config = load_configuration(global)?;
        let mapper = build_mapper(&config);

        // 2. Probe the sync roots for a local copy
        match mapper.map_to_local(&self.url) {
            Some(path) => {
                println!("{}", path.display());
                Ok(())
            }
            None => Err(CliError::NoMatch(format!(
                "no locally synced file found for {}",
                self.url
            ))),
        }
    }
}
