//! # Sweep Coordinator
//!
//! Expands a [`SweepRequest`] into addresses, probes them on a fixed-size pool
//! and folds the outcomes into a [`SweepResult`].
//!
//! At most `workers` probes run at the same time. Every other probe waits for a
//! permit, so the request size never changes how many pings are in flight.
//! Outcomes are collected in completion order by the calling task, which is
//! the only place the counters are touched.

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use sweepr_common::config::RETRY_BACKOFF;
use sweepr_common::network::host::{HostStatus, ProbeOutcome};
use sweepr_common::sweep::{SweepRequest, SweepResult};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::probe::{Pinger, Prober, RetryPolicy};

/// Receives the result stream of a sweep.
///
/// All callbacks run on the task that called [`Sweeper::sweep`], one at a time.
pub trait SweepObserver: Send + Sync {
    fn on_start(&self, _total: usize) {}
    fn on_outcome(&self, _outcome: &ProbeOutcome) {}
    fn on_progress(&self, _completed: usize, _total: usize) {}
    fn on_finish(&self, _result: &SweepResult) {}
}

pub struct NoopObserver;

impl SweepObserver for NoopObserver {}

pub struct Sweeper {
    pinger: Arc<dyn Pinger>,
    observer: Arc<dyn SweepObserver>,
    backoff: Duration,
    stop_signal: Arc<AtomicBool>,
}

impl Sweeper {
    pub fn new(pinger: Arc<dyn Pinger>) -> Self {
        Self {
            pinger,
            observer: Arc::new(NoopObserver),
            backoff: RETRY_BACKOFF,
            stop_signal: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn SweepObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Once the flag is raised, probes that have not started yet are skipped.
    /// Probes already running finish and are counted.
    pub fn with_stop_signal(mut self, stop_signal: Arc<AtomicBool>) -> Self {
        self.stop_signal = stop_signal;
        self
    }

    pub fn stop_signal(&self) -> Arc<AtomicBool> {
        self.stop_signal.clone()
    }

    /// Probes every address of `request` and returns once all of them finished.
    ///
    /// Each probed address reaches [`SweepObserver::on_outcome`] before its
    /// progress step. A panicking [`Pinger`] is caught per address and shows up
    /// as [`HostStatus::Error`]. Only the failure of a pool task itself, which
    /// no longer knows its address, is counted as an error and reported through
    /// `on_progress` alone.
    pub async fn sweep(&self, request: &SweepRequest) -> SweepResult {
        let total: usize = request.len();
        let mut result = SweepResult::default();
        self.observer.on_start(total);

        if total == 0 {
            debug!("empty host range, nothing to probe");
            self.observer.on_finish(&result);
            return result;
        }

        let range = request.range();
        let subnet = request.subnet();
        info!(
            "Pinging IP addresses from {}{} to {}{}...",
            subnet,
            range.start(),
            subnet,
            range.end() - 1
        );

        let policy = RetryPolicy {
            backoff: self.backoff,
            ..RetryPolicy::from(request)
        };
        let prober = Arc::new(Prober::new(self.pinger.clone(), policy));
        // Never more slots than addresses, which also keeps huge worker counts
        // below `Semaphore::MAX_PERMITS`.
        let pool_size: usize = request.workers().min(total);
        let permits = Arc::new(Semaphore::new(pool_size));
        debug!("{total} addresses on {pool_size} workers");

        let mut tasks: JoinSet<Option<ProbeOutcome>> = JoinSet::new();
        for addr in request.addresses() {
            tasks.spawn(probe_task(
                addr,
                prober.clone(),
                permits.clone(),
                self.stop_signal.clone(),
            ));
        }

        let mut completed: usize = 0;
        while let Some(joined) = tasks.join_next().await {
            let outcome = match joined {
                Ok(Some(outcome)) => outcome,
                Ok(None) => {
                    result.interrupted = true;
                    continue;
                }
                Err(e) => {
                    error!("sweep task failed: {e}");
                    result.record(&HostStatus::Error(e.to_string()));
                    completed += 1;
                    self.observer.on_progress(completed, total);
                    continue;
                }
            };

            result.record(&outcome.status);
            completed += 1;
            self.observer.on_outcome(&outcome);
            self.observer.on_progress(completed, total);
        }

        if result.interrupted {
            warn!("Sweep stopped early, {completed} of {total} addresses probed");
        }

        self.observer.on_finish(&result);
        result
    }
}

/// Waits for a pool slot, then probes `addr` on its own task.
///
/// Returns `None` when the sweep was stopped before the slot was granted.
async fn probe_task(
    addr: Ipv4Addr,
    prober: Arc<Prober>,
    permits: Arc<Semaphore>,
    stop_signal: Arc<AtomicBool>,
) -> Option<ProbeOutcome> {
    let _permit = permits.acquire_owned().await.ok()?;
    if stop_signal.load(Ordering::Relaxed) {
        return None;
    }

    let probe = tokio::spawn(async move { prober.probe(addr).await });
    let outcome = match probe.await {
        Ok(outcome) => outcome,
        Err(e) => ProbeOutcome::new(addr, HostStatus::Error(format!("probe task failed: {e}"))),
    };
    Some(outcome)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
