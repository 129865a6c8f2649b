//! # Sweep Request & Result
//!
//! [`SweepRequest`] is built once from validated input and stays read-only.
//! [`SweepResult`] is filled one outcome at a time by the coordinator.

use std::net::Ipv4Addr;
use std::time::Duration;

use crate::config::{DEFAULT_RETRIES, DEFAULT_TIMEOUT, DEFAULT_WORKERS};
use crate::error::InputError;
use crate::network::host::{HostStatus, ProbeOutcome};
use crate::network::range::HostRange;
use crate::network::subnet::SubnetPrefix;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepRequest {
    subnet: SubnetPrefix,
    range: HostRange,
    workers: usize,
    retries: u32,
    timeout: Duration,
}

impl SweepRequest {
    /// Builds a request with the default worker count, retries and timeout.
    pub fn new(subnet: SubnetPrefix, range: HostRange) -> Self {
        Self {
            subnet,
            range,
            workers: DEFAULT_WORKERS,
            retries: DEFAULT_RETRIES,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Result<Self, InputError> {
        if workers == 0 {
            return Err(InputError::InvalidWorkers(workers));
        }
        self.workers = workers;
        Ok(self)
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, InputError> {
        if timeout.is_zero() {
            return Err(InputError::InvalidTimeout(format!("{}", timeout.as_secs_f64())));
        }
        self.timeout = timeout;
        Ok(self)
    }

    pub fn subnet(&self) -> SubnetPrefix {
        self.subnet
    }

    pub fn range(&self) -> HostRange {
        self.range
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Number of addresses the sweep will probe.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Addresses in ascending order of host octet.
    pub fn addresses(&self) -> impl Iterator<Item = Ipv4Addr> + '_ {
        self.range.iter().map(|host| self.subnet.address(host))
    }
}

/// How the dead bucket splits up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakdown {
    pub unreachable: usize,
    pub timed_out: usize,
    pub tool_unavailable: usize,
    pub errors: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepResult {
    pub alive: usize,
    /// Every outcome that is not [`HostStatus::Alive`].
    pub dead: usize,
    pub breakdown: Breakdown,
    /// Set when the sweep was stopped before every address was probed.
    pub interrupted: bool,
}

impl SweepResult {
    pub fn record(&mut self, status: &HostStatus) {
        match status {
            HostStatus::Alive => {
                self.alive += 1;
                return;
            }
            HostStatus::Dead => self.breakdown.unreachable += 1,
            HostStatus::TimedOut => self.breakdown.timed_out += 1,
            HostStatus::ToolUnavailable => self.breakdown.tool_unavailable += 1,
            HostStatus::Error(_) => self.breakdown.errors += 1,
        }
        self.dead += 1;
    }

    /// Outcomes counted so far.
    pub fn total(&self) -> usize {
        self.alive + self.dead
    }

    /// Share of alive hosts relative to `requested` addresses, in percent.
    pub fn alive_percentage(&self, requested: usize) -> f64 {
        if requested == 0 {
            return 0.0;
        }
        self.alive as f64 / requested as f64 * 100.0
    }
}

impl<'a> FromIterator<&'a ProbeOutcome> for SweepResult {
    fn from_iter<I: IntoIterator<Item = &'a ProbeOutcome>>(iter: I) -> Self {
        let mut result = SweepResult::default();
        for outcome in iter {
            result.record(&outcome.status);
        }
        result
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
