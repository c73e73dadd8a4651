mod cli;
mod config;
mod output;
mod progress;
mod reader;
mod selector;
mod types;

use clap::Parser;
use cli::Cli;
use config::ToplineConfig;
use is_terminal::IsTerminal;
use output::{JsonRenderer, TerminalRenderer};
use progress::StreamProgress;
use reader::ScoreReader;
use selector::{BoundedSelector, Mode};
use types::{RankedRecord, SelectionResults, Totals};

use std::fs::File;
use std::io::{self, BufRead, BufReader};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    let config = match ToplineConfig::load(None) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("Error: cannot open {}: {}", path.display(), e);
                std::process::exit(2);
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    let mode = if cli.lowest { Mode::Lowest } else { Mode::Highest };
    let mut selector: BoundedSelector<String> = BoundedSelector::new(mode, cli.size);
    let reader = ScoreReader::new(cli.field);
    let progress = StreamProgress::new(cli.progress);

    let mut lines_seen: u64 = 0;
    let read_result = reader.read(input, |score, line| {
        selector.insert(score, line);
        lines_seen += 1;
        progress.update(lines_seen, selector.len());
    });
    progress.finish();

    let stats = match read_result {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    selector.finalize();

    let records: Vec<RankedRecord> = selector
        .iter()
        .enumerate()
        .map(|(i, (score, line))| RankedRecord {
            rank: i + 1,
            score,
            line: line.clone(),
        })
        .collect();

    let results = SelectionResults {
        mode: if cli.lowest { "lowest" } else { "highest" }.to_string(),
        capacity: cli.size,
        field: cli.field,
        totals: Totals {
            lines_read: stats.lines_read,
            kept: selector.len(),
            discarded: stats.lines_read - selector.len() as u64,
        },
        records,
    };

    if cli.should_output_json() {
        let renderer = JsonRenderer::new();
        if let Err(e) = renderer.render(&results, cli.output.as_deref()) {
            eprintln!("Error writing JSON output: {}", e);
            std::process::exit(3);
        }
    } else {
        let use_color =
            config.display.use_color && !cli.no_color && io::stdout().is_terminal();
        let renderer = TerminalRenderer::new(use_color, cli.with_scores, config.display.precision);
        if cli.pretty {
            renderer.render_pretty(&results);
        } else {
            renderer.render_plain(&results);
        }
    }
}
