// Shared figure styling: palette, sizing, and panel primitives

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

// Okabe-Ito palette subset
pub const ORANGE: RGBColor = RGBColor(0xE6, 0x9F, 0x00);
pub const GREEN: RGBColor = RGBColor(0x00, 0x9E, 0x73);
pub const VERMILLION: RGBColor = RGBColor(0xD5, 0x5E, 0x00);
pub const PURPLE: RGBColor = RGBColor(0xCC, 0x79, 0xA7);

/// Step-line color for the hypnogram
pub const TRACE_BLUE: RGBColor = RGBColor(0x1F, 0x77, 0xB4);

/// Raster resolution the figures are sized for; PNG carries no DPI
/// metadata, so figures are rendered at inch-size x DPI pixels
pub const DPI: u32 = 300;

/// Number of bins used by every score histogram
pub const HIST_BINS: usize = 10;

/// Pixel dimensions for a figure sized in inches
pub const fn inches(w: u32, h: u32) -> (u32, u32) {
    (w * DPI, h * DPI)
}

pub type PanelArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Bold letter tag in the panel's top-left corner
pub fn draw_panel_letter(area: &PanelArea, letter: &str) -> Result<()> {
    area.draw(&Text::new(
        letter.to_string(),
        (50, 40),
        ("sans-serif", 72).into_font().style(FontStyle::Bold),
    ))?;
    Ok(())
}

/// Equal-width bin counts over the value range
///
/// The top edge is inclusive so the maximum lands in the last bin.
pub fn bin_counts(values: &[f64], bins: usize) -> (f64, f64, Vec<usize>) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() {
        return (0.0, 1.0, vec![0; bins]);
    }

    let span = max - min;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = if span > 0.0 {
            (((v - min) / span) * bins as f64).floor() as usize
        } else {
            0
        };
        counts[idx.min(bins - 1)] += 1;
    }
    (min, max, counts)
}

/// Orange histogram with black bin edges
pub fn draw_histogram(area: &PanelArea, values: &[f64], x_label: &str) -> Result<()> {
    let (min, max, counts) = bin_counts(values, HIST_BINS);
    let span = max - min;
    let width = if span > 0.0 {
        span / HIST_BINS as f64
    } else {
        1.0
    };
    let x_max = min + width * HIST_BINS as f64;
    let y_max = (counts.iter().copied().max().unwrap_or(0) as f64 * 1.1).max(1.0);

    let mut chart = ChartBuilder::on(area)
        .margin(40)
        .x_label_area_size(140)
        .y_label_area_size(170)
        .build_cartesian_2d(min..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(x_label)
        .y_desc("Number of Participants")
        .axis_desc_style(("sans-serif", 52))
        .label_style(("sans-serif", 44))
        .draw()?;

    let bar = |i: usize, c: usize, style: ShapeStyle| {
        let x0 = min + width * i as f64;
        Rectangle::new([(x0, 0.0), (x0 + width, c as f64)], style)
    };
    chart.draw_series(
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| bar(i, c, ORANGE.filled())),
    )?;
    chart.draw_series(
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| bar(i, c, BLACK.stroke_width(3))),
    )?;
    Ok(())
}

/// Per-participant before/after change lines with endpoint markers
pub fn draw_paired_lines(area: &PanelArea, pairs: &[(f64, f64)], y_label: &str) -> Result<()> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &(b, a) in pairs {
        lo = lo.min(b).min(a);
        hi = hi.max(b).max(a);
    }
    if !lo.is_finite() {
        lo = 0.0;
        hi = 1.0;
    }
    let pad = ((hi - lo) * 0.08).max(0.5);

    let mut chart = ChartBuilder::on(area)
        .margin(40)
        .x_label_area_size(140)
        .y_label_area_size(170)
        .build_cartesian_2d(-0.3f64..1.3f64, (lo - pad)..(hi + pad))?;

    chart
        .configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(BLACK.mix(0.15))
        .x_labels(2)
        .x_label_formatter(&|x| match x.round() as i64 {
            0 => "Before".to_string(),
            1 => "After".to_string(),
            _ => String::new(),
        })
        .y_desc(y_label)
        .axis_desc_style(("sans-serif", 52))
        .label_style(("sans-serif", 44))
        .draw()?;

    let style = ORANGE.mix(0.7);
    for &(b, a) in pairs {
        chart.draw_series(LineSeries::new(
            [(0.0, b), (1.0, a)],
            style.stroke_width(4),
        ))?;
        chart.draw_series(
            [(0.0, b), (1.0, a)].map(|(x, y)| Circle::new((x, y), 10, style.filled())),
        )?;
    }
    Ok(())
}

/// Pie with count labels and in-wedge percentages
///
/// Zero-count slices are dropped so empty categories do not leave stray
/// labels on the chart.
pub fn draw_pie(area: &PanelArea, slices: &[(String, usize, RGBColor)]) -> Result<()> {
    let (w, h) = area.dim_in_pixel();
    let center = ((w / 2) as i32, (h / 2) as i32);
    let radius = f64::from(w.min(h)) * 0.3;

    let mut sizes = Vec::new();
    let mut colors = Vec::new();
    let mut labels = Vec::new();
    for (label, count, color) in slices {
        if *count == 0 {
            continue;
        }
        sizes.push(*count as f64);
        colors.push(*color);
        labels.push(format!("{} ({})", label, count));
    }
    if sizes.is_empty() {
        return Ok(());
    }

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    // Start at twelve o'clock, like the questionnaire report figures
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 44).into_font());
    pie.percentages(("sans-serif", 48).into_font().color(&BLACK));
    area.draw(&pie)?;
    Ok(())
}
