//! Script execution.
//!
//! [`ScriptRunner`] is the seam between the resolver and the automation
//! transport. [`OsaScriptRunner`] is the production implementation backed
//! by the system scripting runner; [`MockScriptRunner`] substitutes a
//! scripted outcome so tests can drive resolution without a desktop
//! session.

mod locale;
mod osascript;
mod runner;

pub use osascript::OsaScriptRunner;
pub use runner::{MockScriptRunner, ScriptRunner};
