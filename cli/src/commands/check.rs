use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use edgeprobe_common::config::Config;
use edgeprobe_common::probe::{ProbeResult, ProbeTarget, catalog};
use edgeprobe_common::{info, success, warn};
use edgeprobe_core::prober;

use crate::terminal::{print, spinner};

/// Runs the connectivity check. Returns `false` when at least one target
/// FAILED; the caller decides whether that affects the exit code.
pub async fn check(targets_file: Option<PathBuf>, cfg: &Config) -> anyhow::Result<bool> {
    let targets: Vec<ProbeTarget> = load_targets(targets_file)?;

    if cfg.quiet == 0 {
        let unit: &str = if targets.len() == 1 { "target" } else { "targets" };
        spinner::get_spinner().set_message(format!("Probing {} {unit}...", targets.len()));
    }

    let start_time: Instant = Instant::now();
    let results: Vec<ProbeResult> = prober::run(&targets, cfg.timeout, |result| {
        if cfg.quiet < 2 {
            print::print(&print::report_line(result));
        }
    })
    .await;

    if let Some(handle) = spinner::try_get() {
        handle.finish_and_clear();
    }

    print_summary(&results, start_time.elapsed(), cfg);

    Ok(!results.iter().any(|result| result.outcome.is_failed()))
}

fn load_targets(path: Option<PathBuf>) -> anyhow::Result<Vec<ProbeTarget>> {
    let Some(path) = path else {
        return Ok(catalog::builtin());
    };

    let content: String = fs::read_to_string(&path)
        .with_context(|| format!("reading target file {}", path.display()))?;
    let targets = catalog::parse_lines(&content)
        .with_context(|| format!("parsing target file {}", path.display()))?;

    info!("{} targets loaded from {}", targets.len(), path.display());
    Ok(targets)
}

fn print_summary(results: &[ProbeResult], total_time: Duration, cfg: &Config) {
    let passed: usize = results.iter().filter(|r| r.outcome.is_passed()).count();
    let failed: usize = results.iter().filter(|r| r.outcome.is_failed()).count();
    let skipped: usize = results.len() - passed - failed;

    let passed_str: ColoredString = format!("{passed} passed").bold().green();
    let failed_str: ColoredString = if failed > 0 {
        format!("{failed} failed").bold().red()
    } else {
        format!("{failed} failed").normal()
    };
    let total_time_str: ColoredString =
        format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    let mut output: String = format!("Connectivity check complete: {passed_str}, {failed_str}");
    if skipped > 0 {
        output.push_str(&format!(", {skipped} skipped"));
    }
    output.push_str(&format!(" in {total_time_str}"));

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::end_of_program();
        }
        _ => {
            if failed > 0 {
                warn!("{}", output);
            } else {
                success!("{}", output);
            }
        }
    }
}
