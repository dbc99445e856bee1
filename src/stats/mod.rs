// Summary statistics for assessment columns

use anyhow::{anyhow, Result};
use normality::shapiro_wilk;
use serde::Serialize;

/// Descriptive summary of one numeric column, with a Shapiro-Wilk
/// normality test
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub n: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub shapiro_w: f64,
    pub p_value: f64,
}

/// Summarize a column of values
///
/// The standard deviation is the population form (divide by n), matching
/// the convention used in the study reports. Shapiro-Wilk needs at least
/// 3 values and a non-degenerate sample.
pub fn summarize(column: &str, values: &[f64]) -> Result<ColumnSummary> {
    if values.is_empty() {
        return Err(anyhow!("Column '{}' has no values", column));
    }

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
    let std_dev = variance.sqrt();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let sw = shapiro_wilk(values.iter().copied())
        .map_err(|e| anyhow!("Shapiro-Wilk test failed for column '{}': {}", column, e))?;

    Ok(ColumnSummary {
        column: column.to_string(),
        n,
        mean,
        std_dev,
        min,
        max,
        shapiro_w: sw.statistic,
        p_value: sw.p_value,
    })
}
