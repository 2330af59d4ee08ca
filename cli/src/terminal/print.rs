use std::cell::Cell;
use std::fmt::Display;

use colored::*;
use edgeprobe_common::probe::{Outcome, ProbeResult, ProbeTarget};

use crate::terminal::{colors, spinner};

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

/// Routes through the live spinner when one is running so report lines
/// never tear the animation.
pub fn print(msg: &str) {
    match spinner::try_get() {
        Some(handle) => handle.println(msg),
        None => println!("{}", msg),
    }
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ EDGEPROBE v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = console::measure_text_width(&text_content);
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();
    let output: String = format!("{}{}{}", sep, text, sep);

    print(&output);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let whitespace: String = ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print(&format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

/// The legacy report prefix, preserved verbatim for runbook compatibility:
/// `Testing connection to <hostname> on port <port> (<PROTOCOL>) - <description>...`
pub fn report_prefix(target: &ProbeTarget) -> String {
    format!(
        "Testing connection to {} on port {} ({}) - {}...",
        target.hostname, target.port, target.protocol, target.description
    )
}

pub fn report_line(result: &ProbeResult) -> String {
    format!(
        "{} {}",
        report_prefix(&result.target),
        outcome_token(result.outcome)
    )
}

fn outcome_token(outcome: Outcome) -> ColoredString {
    match outcome {
        Outcome::Passed => "PASSED".green().bold(),
        Outcome::Failed => "FAILED".red().bold(),
        Outcome::SkippedUnknownProtocol => "SKIPPED (unknown protocol)".yellow(),
    }
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use edgeprobe_common::probe::Protocol;

    #[test]
    fn report_prefix_matches_legacy_format() {
        let target = ProbeTarget::new(
            "region1.v2.argotunnel.com",
            7844,
            Protocol::Tcp,
            "Cloudflare Tunnel edge (region 1)",
        );

        assert_eq!(
            report_prefix(&target),
            "Testing connection to region1.v2.argotunnel.com on port 7844 (TCP) \
             - Cloudflare Tunnel edge (region 1)..."
        );
    }

    #[test]
    fn report_line_ends_with_outcome_token() {
        colored::control::set_override(false);

        let target = ProbeTarget::new("1.1.1.1", 53, Protocol::Udp, "Cloudflare DNS resolver");
        let passed = ProbeResult::new(target.clone(), Outcome::Passed);
        let failed = ProbeResult::new(target, Outcome::Failed);

        assert!(report_line(&passed).ends_with("... PASSED"));
        assert!(report_line(&failed).ends_with("... FAILED"));
    }
}
