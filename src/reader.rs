use std::io::BufRead;

/// Counters for a completed read.
#[derive(Debug)]
pub struct ReadStats {
    pub lines_read: u64,
}

pub struct ScoreReader {
    field: usize,
}

impl ScoreReader {
    /// Creates a reader that scores each record by the given zero-based
    /// whitespace-delimited column.
    pub fn new(field: usize) -> Self {
        Self { field }
    }

    /// Streams every record from `input`, invoking `callback` with the
    /// parsed score and the raw line (trailing newline stripped).
    ///
    /// Lines are numbered from 1. The first malformed record or I/O
    /// failure aborts the read with the offending line number and
    /// content; no line is ever silently skipped.
    pub fn read<R: BufRead, F>(&self, input: R, mut callback: F) -> Result<ReadStats, ReadError>
    where
        F: FnMut(f64, String),
    {
        let mut line_no: u64 = 0;

        for line_result in input.lines() {
            line_no += 1;
            let line = line_result.map_err(|e| ReadError::Io {
                line_no,
                source: e,
            })?;
            let score = self.parse_score(&line, line_no)?;
            callback(score, line);
        }

        Ok(ReadStats {
            lines_read: line_no,
        })
    }

    fn parse_score(&self, line: &str, line_no: u64) -> Result<f64, ReadError> {
        let token = line
            .split_whitespace()
            .nth(self.field)
            .ok_or_else(|| ReadError::MissingField {
                line_no,
                line: line.to_string(),
                field: self.field,
            })?;

        token.parse::<f64>().map_err(|_| ReadError::InvalidScore {
            line_no,
            line: line.to_string(),
            field: self.field,
        })
    }
}

#[derive(Debug)]
pub enum ReadError {
    Io { line_no: u64, source: std::io::Error },
    MissingField { line_no: u64, line: String, field: usize },
    InvalidScore { line_no: u64, line: String, field: usize },
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::Io { line_no, source } => {
                write!(f, "failed to read input line {}: {}", line_no, source)
            }
            ReadError::MissingField { line_no, line, field } => {
                write!(
                    f,
                    "input line {} has no field {}: \"{}\"",
                    line_no, field, line
                )
            }
            ReadError::InvalidScore { line_no, line, field } => {
                write!(
                    f,
                    "field {} of input line {} is not a number: \"{}\"",
                    field, line_no, line
                )
            }
        }
    }
}

impl std::error::Error for ReadError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn collect(input: &str, field: usize) -> Result<Vec<(f64, String)>, ReadError> {
        let reader = ScoreReader::new(field);
        let mut records = Vec::new();
        reader.read(Cursor::new(input), |score, line| {
            records.push((score, line));
        })?;
        Ok(records)
    }

    #[test]
    fn test_reads_scored_records() {
        let records = collect("alpha 3.5\nbeta 1.25\ngamma 9\n", 1).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], (3.5, "alpha 3.5".to_string()));
        assert_eq!(records[1], (1.25, "beta 1.25".to_string()));
        assert_eq!(records[2], (9.0, "gamma 9".to_string()));
    }

    #[test]
    fn test_splits_on_whitespace_runs() {
        let records = collect("  a \t 7.5   b\n", 1).unwrap();
        assert_eq!(records[0].0, 7.5);
        // The payload keeps the line exactly as read.
        assert_eq!(records[0].1, "  a \t 7.5   b");
    }

    #[test]
    fn test_reports_line_count() {
        let reader = ScoreReader::new(0);
        let stats = reader
            .read(Cursor::new("1\n2\n3\n"), |_, _| {})
            .unwrap();
        assert_eq!(stats.lines_read, 3);
    }

    #[test]
    fn test_empty_input() {
        let reader = ScoreReader::new(0);
        let stats = reader.read(Cursor::new(""), |_, _| {}).unwrap();
        assert_eq!(stats.lines_read, 0);
    }

    #[test]
    fn test_missing_field_fails_with_line_context() {
        let err = collect("a 1\nb\nc 3\n", 1).unwrap_err();

        match err {
            ReadError::MissingField { line_no, line, field } => {
                assert_eq!(line_no, 2);
                assert_eq!(line, "b");
                assert_eq!(field, 1);
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_number_fails_with_line_context() {
        let err = collect("a 1\nb two\n", 1).unwrap_err();

        match err {
            ReadError::InvalidScore { line_no, line, field } => {
                assert_eq!(line_no, 2);
                assert_eq!(line, "b two");
                assert_eq!(field, 1);
            }
            other => panic!("expected InvalidScore, got {:?}", other),
        }
    }

    #[test]
    fn test_stops_at_first_malformed_line() {
        let reader = ScoreReader::new(0);
        let mut seen = 0;
        let result = reader.read(Cursor::new("1\noops\n3\n"), |_, _| {
            seen += 1;
        });

        assert!(result.is_err());
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x 2.5").unwrap();
        writeln!(file, "y 0.5").unwrap();
        file.flush().unwrap();

        let handle = std::fs::File::open(file.path()).unwrap();
        let reader = ScoreReader::new(1);
        let mut scores = Vec::new();
        reader
            .read(std::io::BufReader::new(handle), |score, _| {
                scores.push(score);
            })
            .unwrap();

        assert_eq!(scores, vec![2.5, 0.5]);
    }
}
