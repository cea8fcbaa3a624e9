//! Error types and exit codes for tally operations.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("File not found or not a .{extension} file: '{}'", .path.display())]
    FileNotFound { path: PathBuf, extension: String },

    #[error(
        "'{token}' (value #{position}) is not a number. Please enter valid numerical values, e.g. 12.1, 6, 25.1"
    )]
    InvalidValue { position: usize, token: String },

    #[error("Please enter valid numerical values, e.g. 12.1, 6, 25.1")]
    NoValues,

    #[error("Line {line} of '{}' is not a number: '{content}'", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("Invalid command: '{0}'")]
    InvalidCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

pub type TallyResult<T> = Result<T, TallyError>;

/// Process exit codes used in batch mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidCommand = 2,
    FileNotFound = 3,
    InvalidValues = 4,
    MalformedData = 5,
    ConfigError = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl TallyError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TallyError::FileNotFound { .. } => ExitCode::FileNotFound,
            TallyError::InvalidValue { .. } | TallyError::NoValues => ExitCode::InvalidValues,
            TallyError::MalformedLine { .. } => ExitCode::MalformedData,
            TallyError::InvalidCommand(_) => ExitCode::InvalidCommand,
            TallyError::Io(_) => ExitCode::GeneralError,
            TallyError::Config(_) => ExitCode::ConfigError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_errors_mention_example_format() {
        let err = TallyError::InvalidValue {
            position: 2,
            token: "abc".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'abc'"));
        assert!(msg.contains("#2"));
        assert!(msg.contains("12.1, 6, 25.1"));

        assert!(TallyError::NoValues.to_string().contains("12.1, 6, 25.1"));
    }

    #[test]
    fn test_exit_codes() {
        let missing = TallyError::FileNotFound {
            path: PathBuf::from("nope.txt"),
            extension: "txt".to_string(),
        };
        assert_eq!(missing.exit_code(), ExitCode::FileNotFound);
        assert_eq!(i32::from(missing.exit_code()), 3);
        assert_eq!(TallyError::NoValues.exit_code(), ExitCode::InvalidValues);
        assert_eq!(
            i32::from(TallyError::InvalidCommand(String::new()).exit_code()),
            2
        );
    }
}
