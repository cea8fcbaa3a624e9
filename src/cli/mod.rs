//! CLI module for tally.
//!
//! Argument parsing, command dispatch and the command implementations.

pub mod args;
pub mod commands;
pub mod dispatch;

pub use args::Cli;
pub use dispatch::{Dispatcher, Flow};
