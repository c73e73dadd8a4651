use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "topline")]
#[command(about = "Keep the N best-scoring lines of a text stream", long_about = None)]
pub struct Cli {
    /// Number of lines to keep
    #[arg(value_name = "SIZE")]
    pub size: usize,

    /// Zero-based index of the whitespace-delimited column holding the score
    #[arg(value_name = "FIELD")]
    pub field: usize,

    /// Keep the N lowest-scoring lines instead of the highest
    #[arg(long)]
    pub lowest: bool,

    /// Read records from a file instead of standard input
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Prefix each output line with its parsed score
    #[arg(long)]
    pub with_scores: bool,

    /// Render a ranked table instead of plain lines
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Output JSON to stdout
    #[arg(long)]
    pub json: bool,

    /// Write JSON output to file
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show progress indicator while reading
    #[arg(long)]
    pub progress: bool,
}

impl Cli {
    pub fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err("SIZE must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn should_output_json(&self) -> bool {
        self.json || self.output.is_some()
    }
}
