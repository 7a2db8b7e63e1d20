use std::path::Path;

use console::Style;
use photogate_core::config::QualityConfig;
use photogate_core::report::QualityReport;

struct Styles {
    path: Style,
    label: Style,
    value: Style,
    pass: Style,
    fail: Style,
    warning: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            path: Style::new().underlined(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            pass: Style::new().green().bold(),
            fail: Style::new().red().bold(),
            warning: Style::new().yellow(),
        }
    }
}

/// Print one image's verdict, scores against thresholds, and warnings.
pub fn print_report(path: &Path, report: &QualityReport, config: &QualityConfig) {
    let s = Styles::new();

    let verdict = if report.is_poor {
        s.fail.apply_to("POOR")
    } else {
        s.pass.apply_to("OK")
    };
    println!("{}  {}", verdict, s.path.apply_to(path.display()));

    if let Some(ref scores) = report.scores {
        for (name, score, threshold) in [
            ("Blur", scores.blur, config.blur_threshold),
            ("Brightness", scores.darkness, config.darkness_threshold),
            ("Focus", scores.focus, config.focus_threshold),
        ] {
            println!(
                "    {:<12}{} {}",
                s.label.apply_to(name),
                s.value.apply_to(format!("{:>10.3}", score)),
                s.label.apply_to(format!("(min {})", threshold))
            );
        }
    }

    for warning in &report.warnings {
        println!("    {}", s.warning.apply_to(warning));
    }
}

pub fn print_totals(checked: usize, poor: usize) {
    let s = Styles::new();
    println!();
    println!(
        "  {:<10}{}",
        s.label.apply_to("Checked"),
        s.value.apply_to(checked)
    );
    let poor_style = if poor > 0 { &s.fail } else { &s.pass };
    println!(
        "  {:<10}{}",
        s.label.apply_to("Poor"),
        poor_style.apply_to(poor)
    );
}
