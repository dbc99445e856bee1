// Hypnogram step-plot rendering

use crate::figures::style::{self, TRACE_BLUE};
use crate::models::{SleepStage, Timeline};
use anyhow::{Context, Result};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Render a stage timeline as a step plot.
///
/// Each stage holds its value until the next retained epoch. The stage axis
/// is inverted so wake sits at the top and N3 at the bottom; the time axis
/// runs to the next whole hour with one tick per hour.
///
/// Callers must not pass an empty timeline; the empty case is reported
/// upstream and skips rendering entirely.
pub fn render_hypnogram(timeline: &Timeline, subject_id: u32, out_dir: &Path) -> Result<PathBuf> {
    let out = out_dir.join(format!("Fig_hyp{}.png", subject_id));
    {
        let root = BitMapBackend::new(&out, style::inches(12, 8)).into_drawing_area();
        root.fill(&WHITE).context("Failed to render figure")?;

        let max_hour = timeline.max_hours().ceil().max(1.0);

        let mut chart = ChartBuilder::on(&root)
            .margin(60)
            .x_label_area_size(180)
            .y_label_area_size(220)
            // Descending stage range draws wake on top
            .build_cartesian_2d(0.0..max_hour, 4.5..-0.5)?;

        chart
            .configure_mesh()
            .light_line_style(TRANSPARENT)
            .bold_line_style(BLACK.mix(0.15))
            .x_labels(max_hour as usize + 1)
            .y_labels(5)
            .x_label_formatter(&|v| format!("{:.0}", v))
            .y_label_formatter(&|v| stage_tick_label(*v))
            .x_desc("Time (h)")
            .y_desc("Sleep Stage")
            .axis_desc_style(("sans-serif", 84))
            .label_style(("sans-serif", 68))
            .draw()?;

        chart.draw_series(LineSeries::new(
            step_points(timeline),
            TRACE_BLUE.stroke_width(5),
        ))?;

        root.present().context("Failed to render figure")?;
    }
    log::info!("wrote {}", out.display());
    Ok(out)
}

fn stage_tick_label(v: f64) -> String {
    let code = v.round();
    if (v - code).abs() > 1e-9 || code < 0.0 {
        return String::new();
    }
    SleepStage::from_code(code as u8)
        .map(|s| s.axis_label().to_string())
        .unwrap_or_default()
}

/// Expand the timeline into post-step vertices: every stage extends
/// rightward to the next sample
fn step_points(timeline: &Timeline) -> Vec<(f64, f64)> {
    let points = timeline.points();
    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, point) in points.iter().enumerate() {
        let y = f64::from(point.stage.code());
        vertices.push((point.time_hours, y));
        if let Some(next) = points.get(i + 1) {
            vertices.push((next.time_hours, y));
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_points_hold_until_next_sample() {
        let mut timeline = Timeline::new();
        timeline.push(1, SleepStage::Wake);
        timeline.push(3, SleepStage::N1);
        timeline.push(4, SleepStage::N2);

        let vertices = step_points(&timeline);
        let h = 30.0 / 3600.0;
        assert_eq!(
            vertices,
            vec![
                (0.0, 0.0),
                (2.0 * h, 0.0),
                (2.0 * h, 2.0),
                (3.0 * h, 2.0),
                (3.0 * h, 3.0),
            ]
        );
    }

    #[test]
    fn test_stage_tick_labels() {
        assert_eq!(stage_tick_label(0.0), "W");
        assert_eq!(stage_tick_label(1.0), "REM");
        assert_eq!(stage_tick_label(4.0), "N3");
        assert_eq!(stage_tick_label(2.5), "");
        assert_eq!(stage_tick_label(-0.5), "");
    }
}
