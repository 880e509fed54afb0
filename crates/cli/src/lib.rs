//! dynamarshal_cli - decode stored attribute values and print their canonical form.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use commands::{run, Canonical};
pub use error::{CliError, Result};
