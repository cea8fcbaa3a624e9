//! RECORD command: append values to a record file.

use std::io::Write;
use std::path::Path;

use crate::config::Settings;
use crate::error::TallyResult;
use crate::records::{RecordFile, parse_values};

/// Run record command.
///
/// The file is checked before the values, and nothing is written unless every
/// value parses. Returns the number of records inserted.
pub fn run(
    settings: &Settings,
    path: &Path,
    tokens: &[String],
    out: &mut impl Write,
) -> TallyResult<usize> {
    let file = RecordFile::open(path, &settings.records)?;
    let values = parse_values(tokens)?;
    let inserted = file.append(&values)?;

    writeln!(out, "{inserted} record(s) inserted into '{}'", file.path().display())?;
    Ok(inserted)
}
