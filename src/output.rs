use crate::types::SelectionResults;
use colored::*;
use std::io;

pub struct TerminalRenderer {
    use_color: bool,
    with_scores: bool,
    precision: Option<usize>,
}

impl TerminalRenderer {
    pub fn new(use_color: bool, with_scores: bool, precision: Option<usize>) -> Self {
        Self {
            use_color,
            with_scores,
            precision,
        }
    }

    /// Prints the surviving records one per line, best first.
    ///
    /// Payload lines are emitted verbatim so the output stays
    /// pipe-friendly; `--with-scores` prefixes the parsed score and a
    /// tab.
    pub fn render_plain(&self, results: &SelectionResults) {
        for record in &results.records {
            if self.with_scores {
                println!("{}\t{}", self.format_score(record.score), record.line);
            } else {
                println!("{}", record.line);
            }
        }
    }

    /// Prints a ranked table with a summary footer.
    pub fn render_pretty(&self, results: &SelectionResults) {
        let direction = if results.mode == "lowest" {
            "Bottom"
        } else {
            "Top"
        };
        let title = format!(
            "{} {} by field {}",
            direction, results.capacity, results.field
        );

        println!();
        println!(
            "  {} {}",
            self.colorize("▼", "cyan", false),
            self.colorize(&title, "cyan", true)
        );
        println!(
            "  {}",
            self.colorize(&"─".repeat(60), "bright_black", false)
        );

        if results.records.is_empty() {
            println!("  {}", self.colorize("No records.", "bright_black", false));
        }

        for record in &results.records {
            let rank = format!("{:>3}.", record.rank);
            let score = format!("{:>12}", self.format_score(record.score));
            println!(
                "  {} {}  {}",
                self.colorize(&rank, "bright_black", false),
                self.colorize(&score, "green", false),
                self.colorize(&record.line, "white", false)
            );
        }

        println!(
            "  {}",
            self.colorize(&"─".repeat(60), "bright_black", false)
        );
        let totals = format!(
            "{} lines read  │  {} kept  │  {} discarded",
            results.totals.lines_read, results.totals.kept, results.totals.discarded
        );
        println!("  {}", self.colorize(&totals, "bright_black", false));
        println!();
    }

    fn format_score(&self, score: f64) -> String {
        match self.precision {
            Some(p) => format!("{:.prec$}", score, prec = p),
            None => format!("{}", score),
        }
    }

    fn colorize(&self, text: &str, color: &str, bold: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }

        let colored = match color {
            "green" => text.green(),
            "cyan" => text.cyan(),
            "white" => text.white(),
            "bright_black" => text.bright_black(),
            _ => text.normal(),
        };

        if bold {
            colored.bold().to_string()
        } else {
            colored.to_string()
        }
    }
}

pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        results: &SelectionResults,
        output_file: Option<&std::path::Path>,
    ) -> io::Result<()> {
        let json = serde_json::to_string_pretty(results)?;

        if let Some(path) = output_file {
            std::fs::write(path, json)?;
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RankedRecord, SelectionResults, Totals};

    fn sample_results() -> SelectionResults {
        SelectionResults {
            mode: "highest".to_string(),
            capacity: 2,
            field: 0,
            totals: Totals {
                lines_read: 4,
                kept: 2,
                discarded: 2,
            },
            records: vec![
                RankedRecord {
                    rank: 1,
                    score: 9.0,
                    line: "9 alpha".to_string(),
                },
                RankedRecord {
                    rank: 2,
                    score: 7.5,
                    line: "7.5 beta".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_json_renderer_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        JsonRenderer::new()
            .render(&sample_results(), Some(&path))
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: SelectionResults = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[1].line, "7.5 beta");
    }

    #[test]
    fn test_score_formatting_respects_precision() {
        let renderer = TerminalRenderer::new(false, true, Some(2));
        assert_eq!(renderer.format_score(9.0), "9.00");
        assert_eq!(renderer.format_score(7.125), "7.13");

        let shortest = TerminalRenderer::new(false, true, None);
        assert_eq!(shortest.format_score(9.0), "9");
        assert_eq!(shortest.format_score(7.125), "7.125");
    }

    #[test]
    fn test_colorize_disabled_is_identity() {
        let renderer = TerminalRenderer::new(false, false, None);
        assert_eq!(renderer.colorize("plain", "green", true), "plain");
    }
}
