use console::{style, Emoji};

use crate::types::{RunReport, Warning};

static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");
static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "");
static FILE: Emoji<'_, '_> = Emoji("📄 ", "");
static LOOP: Emoji<'_, '_> = Emoji("🔁 ", "");

pub fn print_warning(warning: &Warning) {
    println!("  {} {}", style("✗").red(), style(warning).yellow());
}

/// Summary printed once at the end of a run.
pub fn print_report(report: &RunReport, verbose: bool) {
    if verbose {
        for path in &report.written {
            println!("{}{}", FILE, style(path.display()).dim());
        }
        for path in &report.cycles_skipped {
            println!(
                "{}Skipped symlink cycle: {}",
                LOOP,
                style(path.display()).yellow()
            );
        }
    }

    println!(
        "{}Generated {} index file(s) across {} director{}",
        SUCCESS,
        style(report.written.len()).green(),
        style(report.directories_visited).cyan(),
        if report.directories_visited == 1 { "y" } else { "ies" }
    );

    if report.has_warnings() {
        println!("\n{}Warnings ({}):", WARN, report.warnings.len());
        for warning in &report.warnings {
            print_warning(warning);
        }
    }
}
