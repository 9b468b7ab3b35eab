//! Implementation of the `apps` command.

use clap::{Args, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};

use crate::error::CliError;
use crate::utils::GlobalOptions;
use ferry::{Application, Family};

/// Column headers for tabular output formats.
const COLUMN_HEADERS: [&str; 3] = ["name", "family", "process"];

/// Output format for the apps command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table (default)
    Table,
    /// JSON array of application objects
    Json,
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
}

/// Family filter for the apps command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FamilyFilter {
    /// File managers
    FileManager,
    /// Terminal emulators
    Terminal,
    /// Document-based applications
    Document,
}

impl From<FamilyFilter> for Family {
    fn from(filter: FamilyFilter) -> Self {
        match filter {
            FamilyFilter::FileManager => Family::FileManager,
            FamilyFilter::Terminal => Family::Terminal,
            FamilyFilter::Document => Family::Document,
        }
    }
}

/// One row of the application listing.
#[derive(Serialize)]
struct AppRow {
    name: &'static str,
    family: &'static str,
    process: &'static str,
}

/// List the supported applications.
#[derive(Args)]
pub struct AppsCommand {
    /// Restrict the listing to one application family
    #[arg(long, value_enum, value_name = "FAMILY", ignore_case = true)]
    pub family: Option<FamilyFilter>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "FERRY_APPS_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

impl AppsCommand {
    /// Execute the apps command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Gather the rows, filtered by family when requested
        let family = self.family.map(Family::from);
        let rows: Vec<AppRow> = Application::all()
            .filter(|app| family.map_or(true, |f| app.family() == f))
            .map(|app| AppRow {
                name: app.display_name(),
                family: app.family().as_str(),
                process: app.process_name(),
            })
            .collect();

        // 2. Dispatch on the requested format
        match self.format {
            OutputFormat::Table => format_as_table(&rows),
            OutputFormat::Json => format_as_json(&rows),
            OutputFormat::Csv => format_as_delimited(&rows, b','),
            OutputFormat::Tsv => format_as_delimited(&rows, b'\t'),
        }
    }
}

/// Render rows as a tab-separated table with uppercase headers.
fn format_as_table(rows: &[AppRow]) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let headers: Vec<String> = COLUMN_HEADERS.iter().map(|h| h.to_uppercase()).collect();
    writeln!(handle, "{}", headers.join("\t"))?;

    for row in rows {
        writeln!(handle, "{}\t{}\t{}", row.name, row.family, row.process)?;
    }

    Ok(())
}

/// Render rows as a pretty-printed JSON array.
fn format_as_json(rows: &[AppRow]) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, rows)
        .map_err(|e| CliError::Io(std::io::Error::new(io::ErrorKind::Other, e)))?;
    writeln!(handle)?;

    Ok(())
}

/// Render rows through the csv writer with the given delimiter.
fn format_as_delimited(rows: &[AppRow], delimiter: u8) -> Result<(), CliError> {
    let stdout = io::stdout();
    let handle = stdout.lock();

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    for row in rows {
        writer
            .write_record([row.name, row.family, row.process])
            .map_err(csv_error)?;
    }
    writer.flush()?;

    Ok(())
}

/// Convert a csv error into a CLI I/O error.
fn csv_error(err: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(io::ErrorKind::Other, err))
}
