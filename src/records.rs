//! Record files: newline-delimited decimal numbers, one value per line.
//!
//! Files are opened once per operation and never locked. Writers outside this
//! process are not coordinated with.

use rust_decimal::Decimal;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::RecordsConfig;
use crate::debug_event;
use crate::error::{TallyError, TallyResult};

/// Parse value tokens, all or nothing.
///
/// Fails on the first token that is not a decimal number, reporting its 1-based
/// position. An empty token list is [`TallyError::NoValues`].
pub fn parse_values<S: AsRef<str>>(tokens: &[S]) -> TallyResult<Vec<Decimal>> {
    if tokens.is_empty() {
        return Err(TallyError::NoValues);
    }

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let token = token.as_ref();
            parse_number(token).ok_or_else(|| TallyError::InvalidValue {
                position: i + 1,
                token: token.to_string(),
            })
        })
        .collect()
}

fn parse_number(text: &str) -> Option<Decimal> {
    Decimal::from_str(text.trim()).ok()
}

/// An existing record file that passed the path checks.
#[derive(Debug, Clone)]
pub struct RecordFile {
    path: PathBuf,
}

impl RecordFile {
    /// Validate `path` against the record file rules.
    ///
    /// The path must be non-empty, name an existing regular file and, when
    /// `require_extension` is set, end in the configured extension
    /// (ASCII case-insensitive).
    pub fn open(path: impl AsRef<Path>, config: &RecordsConfig) -> TallyResult<Self> {
        let path = path.as_ref();
        let not_found = || TallyError::FileNotFound {
            path: path.to_path_buf(),
            extension: config.extension.clone(),
        };

        if path.as_os_str().is_empty() || !path.is_file() {
            return Err(not_found());
        }

        if config.require_extension {
            let matches = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(&config.extension));
            if !matches {
                return Err(not_found());
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append each value on its own line, keeping the digits as typed
    /// (`12.10` stays `12.10`). Returns the number of lines written.
    pub fn append(&self, values: &[Decimal]) -> TallyResult<usize> {
        let mut buf = String::new();
        for value in values {
            buf.push_str(&value.to_string());
            buf.push('\n');
        }

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(buf.as_bytes())?;
        file.flush()?;

        debug_event!("records", "appended", "{} values to {}", values.len(), self.path.display());
        Ok(values.len())
    }

    /// Read every value in file order.
    ///
    /// Whitespace-only lines are skipped. The first line that does not parse
    /// aborts the read with [`TallyError::MalformedLine`].
    pub fn read_all(&self) -> TallyResult<Vec<Decimal>> {
        let reader = BufReader::new(File::open(&self.path)?);
        let mut values = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let value = parse_number(&line).ok_or_else(|| TallyError::MalformedLine {
                path: self.path.clone(),
                line: index + 1,
                content: line.clone(),
            })?;
            values.push(value);
        }

        debug_event!("records", "read", "{} values from {}", values.len(), self.path.display());
        Ok(values)
    }
}
