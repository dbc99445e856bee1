// Output formatting utilities

use crate::stats::ColumnSummary;
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

/// One-line summary in the study-report format
pub fn format_summary_line(summary: &ColumnSummary) -> String {
    format!(
        "{} :  {:.2} +- {:.2} ({}-{}) (p = {:.3})",
        summary.column,
        summary.mean,
        summary.std_dev,
        summary.min,
        summary.max,
        summary.p_value
    )
}

/// Detect terminal width
/// Uses the `terminal_size` crate for reliable detection, with fallback to
/// 80 columns when not attached to a terminal
fn terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        w as usize
    } else {
        80
    }
}

/// Fixed-width summary table, clipped to the terminal width
pub fn format_summary_table(summaries: &[ColumnSummary]) -> String {
    let width = terminal_width();
    let bold = std::io::stdout().is_terminal();

    let header = format!(
        "{:<14} {:>5} {:>9} {:>9} {:>9} {:>9} {:>7} {:>7}",
        "Column", "N", "Mean", "SD", "Min", "Max", "W", "p"
    );

    let mut out = String::new();
    if bold {
        out.push_str(ANSI_BOLD);
    }
    out.push_str(clip(&header, width));
    if bold {
        out.push_str(ANSI_RESET);
    }
    out.push('\n');

    for summary in summaries {
        let line = format!(
            "{:<14} {:>5} {:>9.2} {:>9.2} {:>9} {:>9} {:>7.3} {:>7.3}",
            summary.column,
            summary.n,
            summary.mean,
            summary.std_dev,
            summary.min,
            summary.max,
            summary.shapiro_w,
            summary.p_value
        );
        out.push_str(clip(&line, width));
        out.push('\n');
    }
    out
}

fn clip(line: &str, width: usize) -> &str {
    match line.char_indices().nth(width) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
