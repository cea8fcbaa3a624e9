//! SUMMARY command: statistics table for a record file.

use std::io::Write;
use std::path::Path;

use crate::config::Settings;
use crate::error::TallyResult;
use crate::records::RecordFile;
use crate::summary::Summary;

/// Run summary command.
///
/// Prints `No data` for a file without records, otherwise the table.
/// Returns the computed summary, if any.
pub fn run(settings: &Settings, path: &Path, out: &mut impl Write) -> TallyResult<Option<Summary>> {
    let file = RecordFile::open(path, &settings.records)?;
    let values = file.read_all()?;

    let summary = Summary::from_values(&values);
    match &summary {
        Some(summary) => writeln!(out, "{}", summary.to_table())?,
        None => writeln!(out, "No data")?,
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;
    use rust_decimal::Decimal;
    use std::fs;
    use tempfile::TempDir;

    fn summarize(content: &str) -> (TallyResult<Option<Summary>>, String) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(&path, content).unwrap();

        let mut out = Vec::new();
        let result = run(&Settings::default(), &path, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_summary_of_one_to_four() {
        let (result, output) = summarize("1\n2\n3\n4\n");
        let summary = result.unwrap().unwrap();

        assert_eq!(summary.count, 4);
        assert_eq!(summary.min, Decimal::from(1));
        assert_eq!(summary.max, Decimal::from(4));
        assert!(output.contains("# of Entries"));
        assert!(output.contains("2.5"));
    }

    #[test]
    fn test_summary_of_single_value() {
        let (result, output) = summarize("5\n");
        let summary = result.unwrap().unwrap();

        assert_eq!(summary.count, 1);
        assert_eq!(summary.average_display(), "5.0");
        assert!(output.contains("5.0"));
    }

    #[test]
    fn test_summary_keeps_recorded_digits() {
        let (result, output) = summarize("0.7\n0.60\n");
        let summary = result.unwrap().unwrap();

        assert_eq!(summary.average_display(), "0.7");
        assert!(output.contains("0.60"));
    }

    #[test]
    fn test_empty_file_prints_no_data_only() {
        let (result, output) = summarize("");
        assert!(result.unwrap().is_none());
        assert_eq!(output, "No data\n");
    }

    #[test]
    fn test_malformed_line_aborts_without_output() {
        let (result, output) = summarize("1\nabc\n");
        assert!(matches!(
            result,
            Err(TallyError::MalformedLine { line: 2, .. })
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let mut out = Vec::new();
        let err = run(
            &Settings::default(),
            Path::new("definitely/not/here.txt"),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, TallyError::FileNotFound { .. }));
    }
}
