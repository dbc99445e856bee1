// Assessment figure renderers
// Each figure reads the columns it needs from the assessments table and
// writes one PNG into the output directory

use crate::dataset::AssessmentTable;
use crate::figures::style::{
    self, draw_histogram, draw_paired_lines, draw_panel_letter, draw_pie, GREEN, ORANGE, PURPLE,
    VERMILLION,
};
use anyhow::{Context, Result};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// BRUMS mood subscales, in panel order
const BRUMS_SCALES: [&str; 8] = [
    "anger",
    "tension",
    "depression",
    "vigor",
    "fatigue",
    "confusion",
    "happy",
    "calmness",
];

/// Demographics: age and BMI histograms
pub fn fig_demo(table: &AssessmentTable, out_dir: &Path) -> Result<PathBuf> {
    let age = table.column("age")?;
    let bmi = table.column("BMI")?;

    let out = out_dir.join("Fig_demo.png");
    {
        let root = BitMapBackend::new(&out, style::inches(12, 5)).into_drawing_area();
        root.fill(&WHITE).context("Failed to render figure")?;

        let panels = root.split_evenly((1, 2));
        draw_histogram(&panels[0], &age, "Age")?;
        draw_panel_letter(&panels[0], "a")?;
        draw_histogram(&panels[1], &bmi, "BMI")?;
        draw_panel_letter(&panels[1], "b")?;

        root.present().context("Failed to render figure")?;
    }
    log::info!("wrote {}", out.display());
    Ok(out)
}

/// Sleep quality: good/poor PSQI split plus PSQI and ESS histograms
///
/// PSQI <= 5 is the conventional good-sleeper cutoff.
pub fn fig_sq(table: &AssessmentTable, out_dir: &Path) -> Result<PathBuf> {
    let psqi = table.column("PSQI")?;
    let ess = table.column("ESS")?;
    let n_good = psqi.iter().filter(|&&v| v <= 5.0).count();
    let n_poor = psqi.len() - n_good;

    let out = out_dir.join("Fig_sq.png");
    {
        let root = BitMapBackend::new(&out, style::inches(12, 5)).into_drawing_area();
        root.fill(&WHITE).context("Failed to render figure")?;

        let panels = root.split_evenly((1, 3));
        draw_pie(
            &panels[0],
            &[
                ("Good SQ".to_string(), n_good, GREEN),
                ("Poor SQ".to_string(), n_poor, ORANGE),
            ],
        )?;
        draw_panel_letter(&panels[0], "a")?;
        draw_histogram(&panels[1], &psqi, "PSQI")?;
        draw_panel_letter(&panels[1], "b")?;
        draw_histogram(&panels[2], &ess, "ESS")?;
        draw_panel_letter(&panels[2], "c")?;

        root.present().context("Failed to render figure")?;
    }
    log::info!("wrote {}", out.display());
    Ok(out)
}

/// Depression: SDS severity bands plus SDS histogram
pub fn fig_sds(table: &AssessmentTable, out_dir: &Path) -> Result<PathBuf> {
    let sds = table.column("SDS")?;
    let n_normal = sds.iter().filter(|&&v| v < 50.0).count();
    let n_mild = sds.iter().filter(|&&v| (50.0..60.0).contains(&v)).count();
    let n_moderate = sds.iter().filter(|&&v| (60.0..70.0).contains(&v)).count();
    let n_severe = sds.iter().filter(|&&v| v >= 70.0).count();

    let out = out_dir.join("Fig_sds.png");
    {
        let root = BitMapBackend::new(&out, style::inches(12, 5)).into_drawing_area();
        root.fill(&WHITE).context("Failed to render figure")?;

        let panels = root.split_evenly((1, 2));
        draw_pie(
            &panels[0],
            &[
                ("Normal".to_string(), n_normal, GREEN),
                ("Mild".to_string(), n_mild, ORANGE),
                ("Moderate".to_string(), n_moderate, VERMILLION),
                ("Severe".to_string(), n_severe, PURPLE),
            ],
        )?;
        draw_panel_letter(&panels[0], "a")?;
        draw_histogram(&panels[1], &sds, "SDS")?;
        draw_panel_letter(&panels[1], "b")?;

        root.present().context("Failed to render figure")?;
    }
    log::info!("wrote {}", out.display());
    Ok(out)
}

/// Mood: before/after change lines for the eight BRUMS subscales
pub fn fig_brums(table: &AssessmentTable, out_dir: &Path) -> Result<PathBuf> {
    let out = out_dir.join("Fig_brums.png");
    {
        let root = BitMapBackend::new(&out, style::inches(12, 7)).into_drawing_area();
        root.fill(&WHITE).context("Failed to render figure")?;

        let panels = root.split_evenly((2, 4));
        for (panel, scale) in panels.iter().zip(BRUMS_SCALES) {
            let pairs = table.paired(&format!("BRUMS_{}1", scale), &format!("BRUMS_{}2", scale))?;
            draw_paired_lines(panel, &pairs, scale)?;
        }

        root.present().context("Failed to render figure")?;
    }
    log::info!("wrote {}", out.display());
    Ok(out)
}

/// Anxiety: STAI distributions before and after sleep, with per-participant
/// change lines
pub fn fig_stai(table: &AssessmentTable, out_dir: &Path) -> Result<PathBuf> {
    let before = table.column("STAI1")?;
    let after = table.column("STAI2")?;
    let pairs = table.paired("STAI1", "STAI2")?;

    let out = out_dir.join("Fig_stai.png");
    {
        let root = BitMapBackend::new(&out, style::inches(12, 5)).into_drawing_area();
        root.fill(&WHITE).context("Failed to render figure")?;

        let panels = root.split_evenly((1, 3));
        draw_histogram(&panels[0], &before, "STAI Before Sleep")?;
        draw_panel_letter(&panels[0], "a")?;
        draw_histogram(&panels[1], &after, "STAI After Sleep")?;
        draw_panel_letter(&panels[1], "b")?;
        draw_paired_lines(&panels[2], &pairs, "STAI")?;
        draw_panel_letter(&panels[2], "c")?;

        root.present().context("Failed to render figure")?;
    }
    log::info!("wrote {}", out.display());
    Ok(out)
}
