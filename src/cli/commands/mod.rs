//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module and writes its user-facing
//! output to the writer it is given.

pub mod help;
pub mod record;
pub mod summary;
