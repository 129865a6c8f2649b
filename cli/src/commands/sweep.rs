use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

use colored::*;
use sweepr_common::config::Config;
use sweepr_common::error::InputError;
use sweepr_common::network::host::{HostStatus, ProbeOutcome};
use sweepr_common::network::range::HostRange;
use sweepr_common::network::subnet::SubnetPrefix;
use sweepr_common::success;
use sweepr_common::sweep::{SweepRequest, SweepResult};
use sweepr_core::probe::SystemPinger;
use sweepr_core::sweep::{SweepObserver, Sweeper};
use tracing::{error, info, warn};

use super::{SweepArgs, prompt};
use crate::mprint;
use crate::terminal::{colors, format, input::InputHandle, print, progress};

pub async fn sweep(mut args: SweepArgs, interactive: bool, cfg: &Config) -> anyhow::Result<()> {
    if interactive {
        prompt::ask(&mut args, &mut io::stdin().lock(), &mut io::stdout())?;
    }

    let request: SweepRequest = build_request(&args)?;
    print_request(&request, cfg);

    let sweeper = Sweeper::new(Arc::new(SystemPinger::new()))
        .with_observer(Arc::new(TerminalObserver { quiet: cfg.quiet }));
    let input_handle: Option<InputHandle> = start_input_listener(sweeper.stop_signal(), cfg);

    let start_time: Instant = Instant::now();
    let result: SweepResult = sweeper.sweep(&request).await;

    drop(input_handle);

    sweep_ends(&request, &result, start_time.elapsed(), cfg);
    Ok(())
}

/// Turns operator input into a request. Nothing is probed when this fails.
pub fn build_request(args: &SweepArgs) -> Result<SweepRequest, InputError> {
    let subnet: SubnetPrefix = args.subnet.parse()?;
    let range: HostRange = HostRange::non_empty(args.start, args.end)?;

    let timeout: Duration = Duration::try_from_secs_f64(args.timeout)
        .map_err(|_| InputError::InvalidTimeout(args.timeout.to_string()))?;

    SweepRequest::new(subnet, range)
        .with_workers(args.threads)?
        .with_retries(args.retries)
        .with_timeout(timeout)
}

fn start_input_listener(stop_signal: Arc<AtomicBool>, cfg: &Config) -> Option<InputHandle> {
    if cfg.disable_input || !io::stdin().is_terminal() {
        return None;
    }

    match InputHandle::start(stop_signal) {
        Ok(handle) => {
            info!("Press 'q' to stop the sweep early");
            Some(handle)
        }
        Err(e) => {
            warn!("Keyboard listener unavailable: {e}");
            None
        }
    }
}

/// Streams the sweep into the terminal.
struct TerminalObserver {
    quiet: u8,
}

impl SweepObserver for TerminalObserver {
    fn on_start(&self, total: usize) {
        if total > 0 {
            progress::start(total);
        }
    }

    fn on_outcome(&self, outcome: &ProbeOutcome) {
        if self.quiet >= 2 {
            return;
        }

        let line: String = format::outcome_line(outcome);
        match outcome.status {
            HostStatus::Alive => success!("{line}"),
            HostStatus::Dead if self.quiet == 0 => info!("{line}"),
            HostStatus::Dead => {}
            HostStatus::TimedOut => warn!("{line}"),
            HostStatus::ToolUnavailable | HostStatus::Error(_) => error!("{line}"),
        }
    }

    fn on_progress(&self, completed: usize, _total: usize) {
        progress::report_progress(completed);
    }

    fn on_finish(&self, _result: &SweepResult) {
        progress::finish();
    }
}

fn print_request(request: &SweepRequest, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    print::aligned_line("Targets", format::target_range(request).color(colors::IPV4_ADDR));
    print::aligned_line("Threads", request.workers().to_string());
    print::aligned_line("Retries", request.retries().to_string());
    print::aligned_line("Timeout", format!("{:.2}s", request.timeout().as_secs_f64()));
    print::header("sweeping", cfg.quiet);
}

fn sweep_ends(request: &SweepRequest, result: &SweepResult, total_time: Duration, cfg: &Config) {
    let requested: usize = request.len();

    if result.alive == 0 && cfg.quiet == 0 {
        print::header("ZERO HOSTS ALIVE", cfg.quiet);
        print::no_results();
    }

    match cfg.quiet {
        0 => {
            print::header("sweep summary", cfg.quiet);
            print_summary(result, requested);
            print::double_rule();
            print_completion(result, requested, total_time);
            print::double_rule();
        }
        _ => {
            mprint!();
            success!(
                "{} alive, {} dead",
                format::alive_with_percentage(result, requested),
                result.dead
            );
        }
    }
}

fn print_summary(result: &SweepResult, requested: usize) {
    let alive: ColoredString = format::alive_with_percentage(result, requested)
        .color(colors::ALIVE)
        .bold();
    let dead: ColoredString = result.dead.to_string().color(colors::DEAD).bold();

    print::aligned_line("Alive", alive);
    print::aligned_line("Dead", dead);
    print::branches(&format::breakdown_to_detail(&result.breakdown));

    if result.interrupted {
        let skipped: usize = requested.saturating_sub(result.total());
        print::aligned_line("Skipped", skipped.to_string().yellow());
    }
}

fn print_completion(result: &SweepResult, requested: usize, total_time: Duration) {
    let alive_hosts: ColoredString = format!("{} alive hosts", result.alive).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String =
        format!("Sweep Complete: {alive_hosts} out of {requested} in {total_time}");

    print::centerln(&output.color(colors::TEXT_DEFAULT).to_string());
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

    fn args(subnet: &str, start: u32, end: u32) -> SweepArgs {
        SweepArgs {
            subnet: subnet.to_string(),
            start,
            end,
            threads: 20,
            retries: 2,
            timeout: 5.0,
        }
    }

    #[test]
    fn test_build_request_from_defaults() {
        let request = build_request(&args("192.168.1", 0, 254)).unwrap();
        assert_eq!(request.len(), 254);
        assert_eq!(request.workers(), 20);
        assert_eq!(request.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_build_request_rejects_bad_subnet() {
        assert!(matches!(
            build_request(&args("999.1.1", 0, 10)),
            Err(InputError::InvalidOctet { .. })
        ));
    }

    #[test]
    fn test_build_request_rejects_inverted_range() {
        assert_eq!(
            build_request(&args("192.168.1", 10, 5)),
            Err(InputError::InvalidRange { start: 10, end: 5 })
        );
        assert!(build_request(&args("192.168.1", 10, 10)).is_err());
        assert!(build_request(&args("192.168.1", 0, 255)).is_err());
    }

    #[test]
    fn test_build_request_rejects_bad_pool_and_timeout() {
        let mut no_workers = args("192.168.1", 0, 10);
        no_workers.threads = 0;
        assert_eq!(build_request(&no_workers), Err(InputError::InvalidWorkers(0)));

        for timeout in [0.0, -1.0, f64::NAN, f64::INFINITY, 1e300] {
            let mut bad = args("192.168.1", 0, 10);
            bad.timeout = timeout;
            assert!(build_request(&bad).is_err(), "accepted timeout {timeout}");
        }
    }

    #[test]
    fn test_build_request_accepts_fractional_timeout() {
        let mut fast = args("10.0.0.", 1, 2);
        fast.timeout = 0.5;
        let request = build_request(&fast).unwrap();
        assert_eq!(request.timeout(), Duration::from_millis(500));
    }
}
