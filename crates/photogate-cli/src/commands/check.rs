use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use photogate_core::checker::QualityChecker;
use photogate_core::config::QualityConfig;
use photogate_core::io::image_io::check_image_file;
use photogate_core::report::QualityReport;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::summary::{print_report, print_totals};

#[derive(Args)]
pub struct CheckArgs {
    /// Image files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Threshold config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum Laplacian variance
    #[arg(long)]
    pub blur_threshold: Option<f64>,

    /// Minimum mean brightness (0-255)
    #[arg(long)]
    pub darkness_threshold: Option<f64>,

    /// Minimum fraction of strong-edge pixels (0-1)
    #[arg(long)]
    pub focus_threshold: Option<f64>,

    /// Print one JSON object per image instead of a table
    #[arg(long)]
    pub json: bool,

    /// Exit with an error if any image is poor quality
    #[arg(long)]
    pub fail_on_poor: bool,
}

#[derive(Serialize)]
struct FileReport<'a> {
    path: &'a std::path::Path,
    #[serde(flatten)]
    report: &'a QualityReport,
}

/// Layer thresholds: defaults, then the config file, then explicit flags.
fn resolve_config(args: &CheckArgs) -> Result<QualityConfig> {
    let mut config = if let Some(ref path) = args.config {
        QualityConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?
    } else {
        QualityConfig::default()
    };

    if let Some(v) = args.blur_threshold {
        config.blur_threshold = v;
    }
    if let Some(v) = args.darkness_threshold {
        config.darkness_threshold = v;
    }
    if let Some(v) = args.focus_threshold {
        config.focus_threshold = v;
    }

    config.validate().context("Invalid quality thresholds")?;
    Ok(config)
}

pub fn run(args: &CheckArgs) -> Result<()> {
    let checker = QualityChecker::try_new(resolve_config(args)?)?;

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Checking images");

    let reports: Vec<QualityReport> = args
        .files
        .par_iter()
        .map(|path| {
            let report = check_image_file(&checker, path);
            pb.inc(1);
            report
        })
        .collect();
    pb.finish_and_clear();

    let poor = reports.iter().filter(|r| r.is_poor).count();
    info!(checked = reports.len(), poor, "Quality check complete");

    if args.json {
        for (path, report) in args.files.iter().zip(&reports) {
            println!("{}", serde_json::to_string(&FileReport { path, report })?);
        }
    } else {
        for (path, report) in args.files.iter().zip(&reports) {
            print_report(path, report, checker.config());
        }
        print_totals(reports.len(), poor);
    }

    if args.fail_on_poor && poor > 0 {
        anyhow::bail!("{} of {} image(s) failed the quality gate", poor, reports.len());
    }

    Ok(())
}
