use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::{Score, ScoreReport, ScoreResult, ScoringConfig};

const LABEL_WIDTH: usize = 15;
const SCORE_WIDTH: usize = 3;
const DEFAULT_BAR_WIDTH: usize = 20;
const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 40;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Bar width that fits beside the label, score and percentage columns
fn bar_width(term_width: Option<usize>) -> usize {
    // label + space + score + 2 spaces + bar + space + "100.0%"
    let fixed = LABEL_WIDTH + 1 + SCORE_WIDTH + 2 + 1 + 6;
    match term_width {
        Some(w) if w > fixed => (w - fixed).clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH),
        Some(_) => MIN_BAR_WIDTH,
        None => DEFAULT_BAR_WIDTH,
    }
}

/// Render a score as a proportional bar of `width` cells.
pub fn progress_bar(score: Score, width: usize) -> String {
    let filled = ((score.fraction() * width as f64).round() as usize).min(width);
    let mut bar = String::with_capacity(width * FILLED.len_utf8());
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar
}

fn colorize_bar(bar: &str, score: Score) -> String {
    match score.value() {
        170..=255 => bar.green().to_string(),
        85..=169 => bar.yellow().to_string(),
        _ => bar.red().to_string(),
    }
}

/// Format a report as one line per metric: label, score, bar, percentage.
pub fn format_score_table(report: &ScoreReport, use_colors: bool) -> String {
    format_score_table_with_width(report, use_colors, bar_width(get_terminal_width()))
}

fn format_score_table_with_width(report: &ScoreReport, use_colors: bool, width: usize) -> String {
    let metrics = report.metrics();
    if metrics.is_empty() {
        return "Profile has no sections to score.".to_string();
    }

    metrics
        .iter()
        .map(|(label, result)| {
            let label_padded = format!("{:<width$}", label, width = LABEL_WIDTH);
            let score_padded = format!("{:>width$}", result.score, width = SCORE_WIDTH);
            let bar = progress_bar(result.score, width);
            let percent = format!("{:>5.1}%", result.score.percent());

            if use_colors {
                format!(
                    "{} {}  {} {}",
                    label_padded,
                    score_padded.bold(),
                    colorize_bar(&bar, result.score),
                    percent.dimmed()
                )
            } else {
                format!("{} {}  {} {}", label_padded, score_padded, bar, percent)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format per-factor contributions for one metric (verbose/breakdown mode)
pub fn format_breakdown(label: &str, result: &ScoreResult, use_colors: bool) -> String {
    let header = format!("{}: {} (raw {:.2})", label, result.score, result.raw);
    let mut lines = vec![if use_colors {
        header.bold().to_string()
    } else {
        header
    }];

    for factor in &result.factors {
        let line = format!(
            "  {:<22} {:>8.2}  {}",
            factor.label, factor.value, factor.description
        );
        lines.push(if use_colors {
            line.dimmed().to_string()
        } else {
            line
        });
    }

    lines.join("\n")
}

/// Format the whole report as pretty-printed JSON
pub fn format_json(report: &ScoreReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize score report")
}

/// Format the weight tables in effect
pub fn format_weights(config: &ScoringConfig, use_colors: bool) -> String {
    let matrix = config.matrix_weights();
    let humanity = config.humanity_weights();
    let tables: [(&str, Vec<(&str, f64)>); 2] = [
        ("Twin Matrix weights", matrix.entries().to_vec()),
        ("Humanity Index weights", humanity.entries().to_vec()),
    ];

    tables
        .iter()
        .map(|(title, entries)| {
            let mut lines = vec![if use_colors {
                title.bold().to_string()
            } else {
                title.to_string()
            }];
            for (name, weight) in entries {
                lines.push(format!("  {:<22} {:.2}", name, weight));
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
