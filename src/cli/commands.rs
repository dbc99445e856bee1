use crate::cli::error::validate_column_name;
use crate::cli::output::{format_summary_line, format_summary_table};
use crate::config::Config;
use crate::dataset::AssessmentTable;
use crate::figures;
use crate::hypnogram;
use crate::stats::{self, ColumnSummary};
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Columns included in the standard report
const REPORT_COLUMNS: [&str; 8] = ["age", "BMI", "PSQI", "ESS", "SDS", "CFQ", "STAI1", "STAI2"];

#[derive(Parser)]
#[command(name = "somnoplot")]
#[command(about = "Sleep study reporting - descriptive figures and summary statistics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Assessments CSV (overrides SOMNOPLOT_DATA and the config file)
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Directory holding per-subject stage files (default: hyps/ beside the
    /// assessments CSV)
    #[arg(long = "hyp-dir", global = true, value_name = "DIR")]
    pub hyp_dir: Option<PathBuf>,

    /// Directory figures are written to
    #[arg(long = "out-dir", global = true, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Demographics figure: age and BMI histograms
    Demo,
    /// Sleep quality figure: PSQI good/poor split plus PSQI and ESS histograms
    Sq,
    /// Depression figure: SDS severity bands plus SDS histogram
    Sds,
    /// Mood figure: before/after change lines for the eight BRUMS subscales
    Brums,
    /// Anxiety figure: STAI histograms and before/after change lines
    Stai,
    /// Hypnogram for one subject
    Hyp {
        /// Subject identifier (reads P<SUBJECT>.hyp from the stage directory)
        subject: u32,
    },
    /// Print summary statistics for named columns
    Show {
        /// Column names as they appear in the assessments header
        columns: Vec<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Formatted summary table for the standard report columns
    Report {
        /// Columns to include (defaults to the standard set)
        columns: Vec<String>,
    },
    /// Render every assessment figure and print the standard summaries
    All {
        /// Also render the hypnogram for this subject
        #[arg(long)]
        subject: Option<u32>,
    },
}

pub fn run() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    env_logger::init();

    let cli = Cli::parse();
    handle_command(cli)
}

fn handle_command(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Demo => report_figure(figures::fig_demo(&load_table(&cli)?, &cli.out_dir)?),
        Commands::Sq => report_figure(figures::fig_sq(&load_table(&cli)?, &cli.out_dir)?),
        Commands::Sds => report_figure(figures::fig_sds(&load_table(&cli)?, &cli.out_dir)?),
        Commands::Brums => report_figure(figures::fig_brums(&load_table(&cli)?, &cli.out_dir)?),
        Commands::Stai => report_figure(figures::fig_stai(&load_table(&cli)?, &cli.out_dir)?),
        Commands::Hyp { subject } => handle_hyp(&cli, *subject),
        Commands::Show { columns, json } => handle_show(&cli, columns, *json),
        Commands::Report { columns } => handle_report(&cli, columns),
        Commands::All { subject } => handle_all(&cli, *subject),
    }
}

fn report_figure(path: PathBuf) -> Result<()> {
    println!("Wrote {}", path.display());
    Ok(())
}

fn load_table(cli: &Cli) -> Result<AssessmentTable> {
    let path = Config::resolve_data_path(cli.data.as_deref())?;
    let table = AssessmentTable::load(&path)?;
    log::debug!("assessments loaded from {}", path.display());
    Ok(table)
}

fn handle_hyp(cli: &Cli, subject: u32) -> Result<()> {
    let stage_file = resolve_stage_file(cli, subject)?;
    let timeline = hypnogram::build(&stage_file, subject)?;

    if timeline.is_empty() {
        println!("No valid stages found for subject {}", subject);
        return Ok(());
    }

    let out = figures::render_hypnogram(&timeline, subject, &cli.out_dir)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn resolve_stage_file(cli: &Cli, subject: u32) -> Result<PathBuf> {
    // --hyp-dir alone is enough; otherwise derive the directory from the
    // assessments location
    if let Some(dir) = cli.hyp_dir.as_deref() {
        return Ok(Config::stage_file_path(dir, subject));
    }
    let data = Config::resolve_data_path(cli.data.as_deref())?;
    let dir = Config::resolve_hyp_dir(None, &data)?;
    Ok(Config::stage_file_path(&dir, subject))
}

fn handle_show(cli: &Cli, columns: &[String], json: bool) -> Result<()> {
    if columns.is_empty() {
        bail!("No columns given. Usage: somnoplot show <COLUMN>...");
    }
    for column in columns {
        if let Err(message) = validate_column_name(column) {
            bail!(message);
        }
    }

    let table = load_table(cli)?;
    let summaries = summarize_columns(&table, columns)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for summary in &summaries {
            println!("{}", format_summary_line(summary));
        }
    }
    Ok(())
}

fn handle_report(cli: &Cli, columns: &[String]) -> Result<()> {
    let names: Vec<String> = if columns.is_empty() {
        REPORT_COLUMNS.iter().map(|c| c.to_string()).collect()
    } else {
        columns.to_vec()
    };
    for column in &names {
        if let Err(message) = validate_column_name(column) {
            bail!(message);
        }
    }

    let table = load_table(cli)?;
    let summaries = summarize_columns(&table, &names)?;

    println!(
        "Assessment summary ({} participants) - generated {}",
        table.len(),
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );
    println!();
    print!("{}", format_summary_table(&summaries));
    Ok(())
}

fn handle_all(cli: &Cli, subject: Option<u32>) -> Result<()> {
    let table = load_table(cli)?;

    report_figure(figures::fig_demo(&table, &cli.out_dir)?)?;
    report_figure(figures::fig_sq(&table, &cli.out_dir)?)?;
    report_figure(figures::fig_sds(&table, &cli.out_dir)?)?;
    report_figure(figures::fig_brums(&table, &cli.out_dir)?)?;
    report_figure(figures::fig_stai(&table, &cli.out_dir)?)?;

    if let Some(subject) = subject {
        handle_hyp(cli, subject)?;
    }

    for column in ["CFQ", "age"] {
        let values = table.column(column)?;
        println!("{}", format_summary_line(&stats::summarize(column, &values)?));
    }
    Ok(())
}

fn summarize_columns(table: &AssessmentTable, columns: &[String]) -> Result<Vec<ColumnSummary>> {
    let mut summaries = Vec::with_capacity(columns.len());
    for column in columns {
        let values = table.column(column)?;
        summaries.push(stats::summarize(column, &values)?);
    }
    Ok(summaries)
}
