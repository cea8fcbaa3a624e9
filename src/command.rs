//! Command keywords and token parsing.

use std::fmt;
use std::path::PathBuf;

use crate::error::{TallyError, TallyResult};

/// The four supported command keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Help,
    Record,
    Summary,
    Quit,
}

impl Keyword {
    pub const ALL: [Keyword; 4] = [
        Keyword::Help,
        Keyword::Record,
        Keyword::Summary,
        Keyword::Quit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Help => "HELP",
            Keyword::Record => "RECORD",
            Keyword::Summary => "SUMMARY",
            Keyword::Quit => "QUIT",
        }
    }

    /// Case-insensitive lookup.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|keyword| token.eq_ignore_ascii_case(keyword.as_str()))
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed line of user input.
///
/// A missing path is kept as an empty path so the file checks report it.
/// Value tokens stay raw until the record operation validates them.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Record { path: PathBuf, values: Vec<String> },
    Summary { path: PathBuf },
    Quit,
}

impl Command {
    /// Build a command from whitespace-separated tokens.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> TallyResult<Self> {
        let Some(first) = tokens.first().map(|t| t.as_ref()) else {
            return Err(TallyError::InvalidCommand(String::new()));
        };
        let keyword =
            Keyword::parse(first).ok_or_else(|| TallyError::InvalidCommand(first.to_string()))?;

        let path = || {
            tokens
                .get(1)
                .map(|t| PathBuf::from(t.as_ref()))
                .unwrap_or_default()
        };

        Ok(match keyword {
            Keyword::Help => Command::Help,
            Keyword::Quit => Command::Quit,
            Keyword::Summary => Command::Summary { path: path() },
            Keyword::Record => Command::Record {
                path: path(),
                values: tokens
                    .iter()
                    .skip(2)
                    .map(|t| t.as_ref().to_string())
                    .collect(),
            },
        })
    }

    /// Split a line on whitespace and parse it.
    pub fn parse_line(line: &str) -> TallyResult<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        Self::from_tokens(&tokens)
    }

    pub fn keyword(&self) -> Keyword {
        match self {
            Command::Help => Keyword::Help,
            Command::Record { .. } => Keyword::Record,
            Command::Summary { .. } => Keyword::Summary,
            Command::Quit => Keyword::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_is_case_insensitive() {
        for spelling in ["record", "Record", "RECORD", "rEcOrD"] {
            assert_eq!(Keyword::parse(spelling), Some(Keyword::Record));
        }
        assert_eq!(Keyword::parse("summary"), Some(Keyword::Summary));
        assert_eq!(Keyword::parse("Help"), Some(Keyword::Help));
        assert_eq!(Keyword::parse("quit"), Some(Keyword::Quit));
        assert_eq!(Keyword::parse("exit"), None);
    }

    #[test]
    fn test_parse_record_line() {
        let command = Command::parse_line("  record data.txt 12.1   6 25.1 ").unwrap();
        assert_eq!(
            command,
            Command::Record {
                path: PathBuf::from("data.txt"),
                values: vec!["12.1".into(), "6".into(), "25.1".into()],
            }
        );
    }

    #[test]
    fn test_parse_summary_ignores_extra_tokens() {
        let command = Command::parse_line("SUMMARY data.txt extra").unwrap();
        assert_eq!(
            command,
            Command::Summary {
                path: PathBuf::from("data.txt")
            }
        );
    }

    #[test]
    fn test_missing_path_is_empty() {
        assert_eq!(
            Command::parse_line("summary").unwrap(),
            Command::Summary {
                path: PathBuf::new()
            }
        );
        assert_eq!(
            Command::parse_line("record").unwrap(),
            Command::Record {
                path: PathBuf::new(),
                values: vec![],
            }
        );
    }

    #[test]
    fn test_invalid_and_empty_input() {
        match Command::parse_line("delete data.txt").unwrap_err() {
            TallyError::InvalidCommand(keyword) => assert_eq!(keyword, "delete"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            Command::parse_line("   "),
            Err(TallyError::InvalidCommand(k)) if k.is_empty()
        ));
    }

    #[test]
    fn test_from_argument_vector() {
        let args = vec!["Record".to_string(), "a.txt".to_string(), "-3".to_string()];
        let command = Command::from_tokens(&args).unwrap();
        assert_eq!(command.keyword(), Keyword::Record);
    }
}
