use colored::*;
use sweepr_common::network::host::{HostStatus, ProbeOutcome};
use sweepr_common::sweep::{Breakdown, SweepRequest, SweepResult};

use crate::terminal::colors;

type Detail = (String, ColoredString);

/// Outcome line with the address highlighted.
pub fn outcome_line(outcome: &ProbeOutcome) -> String {
    let plain: String = outcome.to_string();
    let addr: String = outcome.address.to_string();
    let colored_addr: ColoredString = match outcome.status {
        HostStatus::Alive => addr.color(colors::ALIVE).bold(),
        _ => addr.color(colors::IPV4_ADDR),
    };
    plain.replacen(&addr, &colored_addr.to_string(), 1)
}

/// `"12 (4.72%)"`
pub fn alive_with_percentage(result: &SweepResult, requested: usize) -> String {
    format!("{} ({:.2}%)", result.alive, result.alive_percentage(requested))
}

pub fn target_range(request: &SweepRequest) -> String {
    let subnet = request.subnet();
    let range = request.range();
    match range.len() {
        0 => format!("{subnet}{} (empty)", range.start()),
        _ => format!("{subnet}{}-{}", range.start(), range.end() - 1),
    }
}

pub fn breakdown_to_detail(breakdown: &Breakdown) -> Vec<Detail> {
    [
        ("Silent", breakdown.unreachable),
        ("Timeout", breakdown.timed_out),
        ("No ping", breakdown.tool_unavailable),
        ("Error", breakdown.errors),
    ]
    .into_iter()
    .map(|(key, count)| {
        let value: ColoredString = match count {
            0 => count.to_string().color(colors::SEPARATOR),
            _ => count.to_string().color(colors::DEAD),
        };
        (key.to_string(), value)
    })
    .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
