//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve the current location of an application
//! - `open-target`: Print the directory an open action should target
//! - `map-url`: Map a cloud sharing URL to a locally synced file
//! - `apps`: List the supported applications
//! - `script`: Print the script used to interrogate an application
//! - `completions`: Generate shell completion scripts

pub mod apps;
pub mod completions;
pub mod map_url;
pub mod open_target;
pub mod resolve;
pub mod script;

pub use apps::AppsCommand;
pub use completions::CompletionsCommand;
pub use map_url::MapUrlCommand;
pub use open_target::OpenTargetCommand;
pub use resolve::ResolveCommand;
pub use script::ScriptCommand;
