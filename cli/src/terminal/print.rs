//! Line layout for everything the CLI prints outside of log events.
//!
//! Each `*_line` builder returns the finished string; the wrappers below hand
//! it to [`print`], which routes it through the logger so the progress bar
//! stays intact.

use std::fmt::Display;

use colored::*;
use sweepr_common::config::Config;
use sweepr_common::log::PRINT_TARGET;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{banner, colors};

pub const TOTAL_WIDTH: usize = 64;

/// Widest key of the request and summary blocks ("Targets", "Skipped").
const KEY_WIDTH: usize = 8;
/// Widest breakdown key ("Timeout", "No ping").
const BRANCH_KEY_WIDTH: usize = 7;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    let title: String = format!("⟦ SWEEPR v{} ⟧", env!("CARGO_PKG_VERSION"));
    print(&rule_line(&title.bright_green().bold().to_string(), '═'));
    banner::print();
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    print(&rule_line(&title.bright_green().to_string(), '─'));
}

/// Closes a section with a full-width double rule.
pub fn double_rule() {
    print(&rule_line("", '═'));
}

/// `> Key.....: value`
pub fn aligned_line(key: &str, value: impl Display) {
    print(&key_line(key, value));
}

/// Prints `(key, value)` pairs as the branches of the line above.
pub fn branches(entries: &[(String, ColoredString)]) {
    for line in branch_lines(entries) {
        print(&line);
    }
}

pub fn centerln(msg: &str) {
    print(&centered_line(msg));
}

pub fn no_results() {
    print(&NO_RESULTS.red().bold().to_string());
}

/// Centers `title` (may be colored) in a rule of `fill`, `TOTAL_WIDTH` columns wide.
fn rule_line(title: &str, fill: char) -> String {
    let free: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(title));
    let left: String = fill.to_string().repeat(free / 2);
    let right: String = fill.to_string().repeat(free - free / 2);
    format!(
        "{}{title}{}",
        left.color(colors::SEPARATOR),
        right.color(colors::SEPARATOR)
    )
}

fn key_line(key: &str, value: impl Display) -> String {
    let dots: String = ".".repeat(KEY_WIDTH.saturating_sub(key.width()));
    format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.to_string().color(colors::TEXT_DEFAULT)
    )
}

fn branch_lines(entries: &[(String, ColoredString)]) -> Vec<String> {
    let last: usize = entries.len().saturating_sub(1);
    entries
        .iter()
        .enumerate()
        .map(|(i, (key, value))| {
            let branch: &str = if i == last { "└─" } else { "├─" };
            let dots: String = ".".repeat(BRANCH_KEY_WIDTH.saturating_sub(key.width()));
            format!(
                "  {} {}{}{} {value}",
                branch.color(colors::SEPARATOR),
                key.color(colors::TEXT_DEFAULT),
                dots.color(colors::SEPARATOR),
                ":".color(colors::SEPARATOR),
            )
        })
        .collect()
}

fn centered_line(msg: &str) -> String {
    let pad: String = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    format!("{pad}{msg}")
}

const NO_RESULTS: &str = r#"
                       _  _    ___  _  _
                      | || |  / _ \| || |
                      | || |_| | | | || |_
                      |__   _| |_| |__   _|
         _   _  ___ _____|_|__\___/__ |_|  _ _   _ ____
        | \ | |/ _ \_   _| |  ___/ _ \| | | | \ | |  _ \
        |  \| | | | || |   | |_ | | | | | | |  \| | | | |
        | |\  | |_| || |   |  _|| |_| | |_| | |\  | |_| |
        |_| \_|\___/ |_|   |_|   \___/ \___/|_| \_|____/
"#;

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
