#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # ferry
//!
//! A library for resolving the current location of macOS applications.
//!
//! Given an application identity, ferry builds the automation script that
//! asks the running application where it is, executes it, normalizes the
//! answer into a filesystem path, and maps cloud sharing URLs back onto
//! locally synced files. The result is the folder or file a "move the
//! current document here" action should operate on.
//!
//! ## Core Types
//!
//! - [`Application`], [`FileManager`], [`Terminal`], [`DocumentApp`]: the
//!   closed set of applications the resolver knows
//! - [`Resolver`] and [`DocumentLocation`]: location resolution
//! - [`CloudMapper`]: sharing URL to sync-root mapping
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use ferry::{Application, FileManager};
//!
//! // Look up an application by name, leniently.
//! let app = Application::from_name("finder").unwrap();
//! assert_eq!(app, Application::FileManager(FileManager::Finder));
//! assert_eq!(app.display_name(), "Finder");
//! ```

pub mod app;
pub mod cloud;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod normalize;
pub mod resolve;
pub mod script;

// Re-export key types at crate root for convenience
pub use app::{Application, DocumentApp, Family, FileManager, Terminal};
pub use cloud::CloudMapper;
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use exec::{OsaScriptRunner, ScriptRunner};
pub use logging::{init_logger, LogLevel, Logger};
pub use normalize::normalize_result;
pub use resolve::{resolve_open_target, DocumentLocation, Resolver};
pub use script::build_script;
