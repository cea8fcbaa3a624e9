//! Append numeric records to plain-text files and summarize them.
//!
//! A record file holds one decimal number per line. [`records::RecordFile`]
//! validates and appends to such files, [`summary::Summary`] reduces their
//! contents, and [`cli::Dispatcher`] runs the HELP, RECORD, SUMMARY and QUIT
//! commands in interactive or batch mode.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod records;
pub mod summary;

pub use command::{Command, Keyword};
pub use config::Settings;
pub use error::{ExitCode, TallyError, TallyResult};
pub use records::RecordFile;
pub use summary::Summary;
