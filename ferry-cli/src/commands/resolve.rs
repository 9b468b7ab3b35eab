//! Implementation of the `resolve` command.

use clap::{Args, ValueEnum};
use std::io::Write;

use crate::error::CliError;
use crate::utils::{build_resolver, load_configuration, parse_app, GlobalOptions};
use ferry::Application;

/// Output format for resolution results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare path on a single line (default)
    Plain,
    /// JSON object with resolution details
    Json,
}

/// Resolve the current location of an application.
#[derive(Args)]
pub struct ResolveCommand {
    /// Application to interrogate (e.g. "Finder", "iTerm", "Preview")
    #[arg(value_name = "APP")]
    pub app: String,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", ignore_case = true)]
    pub format: OutputFormat,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Identify the application
        let app = parse_app(&self.app)?;

        // 2. Build a resolver over the merged configuration
        let config = load_configuration(global)?;
        let resolver = build_resolver(&config);

        // 3. Run the script and print the result
        match self.format {
            OutputFormat::Plain => {
                let path = resolver.source_path(app)?;
                println!("{path}");
            }
            OutputFormat::Json => {
                let value = match app {
                    Application::Document(doc) => {
                        let location = resolver.document_location(doc)?;
                        serde_json::json!({
                            "app": app.display_name(),
                            "document_path": location.document_path,
                            "resolved_path": location.resolved_path,
                        })
                    }
                    _ => serde_json::json!({
                        "app": app.display_name(),
                        "path": resolver.source_path(app)?,
                    }),
                };

                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                serde_json::to_writer_pretty(&mut handle, &value)
                    .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}
