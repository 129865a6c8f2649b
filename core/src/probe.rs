//! Reachability check of a single address.
//!
//! The blocking part (one attempt) lives behind the [`Pinger`] trait, while the
//! retry policy lives in [`Prober`]. Tests swap the pinger for a scripted one.

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::config::RETRY_BACKOFF;
use sweepr_common::network::host::{HostStatus, ProbeOutcome};
use sweepr_common::sweep::SweepRequest;
use tracing::debug;

mod ping;

pub use ping::SystemPinger;

/// Result of one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptResult {
    Replied,
    NoReply,
    TimedOut,
    /// The probing executable could not be located.
    ToolMissing,
    Fault(String),
}

/// Performs a single reachability attempt.
///
/// Implementations must resolve every failure into an [`AttemptResult`] and
/// return within roughly `timeout`.
#[async_trait]
pub trait Pinger: Send + Sync {
    async fn attempt(&self, addr: Ipv4Addr, timeout: Duration) -> AttemptResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one.
    pub retries: u32,
    /// Upper bound of a single attempt.
    pub timeout: Duration,
    /// Pause between two attempts.
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}

impl From<&SweepRequest> for RetryPolicy {
    fn from(request: &SweepRequest) -> Self {
        Self {
            retries: request.retries(),
            timeout: request.timeout(),
            backoff: RETRY_BACKOFF,
        }
    }
}

pub struct Prober {
    pinger: Arc<dyn Pinger>,
    policy: RetryPolicy,
}

impl Prober {
    pub fn new(pinger: Arc<dyn Pinger>, policy: RetryPolicy) -> Self {
        Self { pinger, policy }
    }

    /// Probes `addr` until it answers or the attempts run out.
    ///
    /// Only the last attempt decides between [`HostStatus::Dead`] and
    /// [`HostStatus::TimedOut`]. A missing tool or an unexpected fault ends the
    /// probe right away.
    pub async fn probe(&self, addr: Ipv4Addr) -> ProbeOutcome {
        let status = self.run_attempts(addr).await;
        let outcome = ProbeOutcome::new(addr, status);
        debug!(address = %addr, status = outcome.status.label(), "{outcome}");
        outcome
    }

    async fn run_attempts(&self, addr: Ipv4Addr) -> HostStatus {
        let attempts = self.policy.attempts();
        let mut attempt: u32 = 1;

        loop {
            let result = self.pinger.attempt(addr, self.policy.timeout).await;

            let status = match result {
                AttemptResult::Replied => return HostStatus::Alive,
                AttemptResult::ToolMissing => return HostStatus::ToolUnavailable,
                AttemptResult::Fault(msg) => return HostStatus::Error(msg),
                AttemptResult::NoReply => HostStatus::Dead,
                AttemptResult::TimedOut => HostStatus::TimedOut,
            };

            if attempt >= attempts {
                return status;
            }

            debug!(address = %addr, attempt, of = attempts, "no answer, retrying");
            attempt += 1;
            tokio::time::sleep(self.policy.backoff).await;
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::Instant;

    /// Replays canned results, then keeps answering `NoReply`.
    struct ScriptedPinger {
        script: Mutex<VecDeque<AttemptResult>>,
        calls: AtomicUsize,
    }

    impl ScriptedPinger {
        fn new(script: Vec<AttemptResult>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.into()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Pinger for ScriptedPinger {
        async fn attempt(&self, _addr: Ipv4Addr, _timeout: Duration) -> AttemptResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(AttemptResult::NoReply)
        }
    }

    const ADDR: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 10);

    fn prober(pinger: Arc<ScriptedPinger>, retries: u32) -> Prober {
        let policy = RetryPolicy {
            retries,
            timeout: Duration::from_secs(5),
            backoff: Duration::from_secs(1),
        };
        Prober::new(pinger, policy)
    }

    #[tokio::test(start_paused = true)]
    async fn first_success_returns_alive_without_backoff() {
        let pinger = ScriptedPinger::new(vec![AttemptResult::Replied]);
        let start = Instant::now();

        let outcome = prober(pinger.clone(), 2).probe(ADDR).await;

        assert_eq!(outcome, ProbeOutcome::new(ADDR, HostStatus::Alive));
        assert_eq!(pinger.calls(), 1);
        assert!(start.elapsed() < Duration::from_secs(1), "backoff slept");
    }

    #[tokio::test(start_paused = true)]
    async fn late_success_sleeps_between_attempts() {
        let pinger = ScriptedPinger::new(vec![
            AttemptResult::NoReply,
            AttemptResult::TimedOut,
            AttemptResult::Replied,
        ]);
        let start = Instant::now();

        let outcome = prober(pinger.clone(), 2).probe(ADDR).await;

        assert_eq!(outcome.status, HostStatus::Alive);
        assert_eq!(pinger.calls(), 3);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(2) && elapsed < Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_retries_return_dead() {
        let pinger = ScriptedPinger::new(vec![
            AttemptResult::NoReply,
            AttemptResult::NoReply,
            AttemptResult::NoReply,
            AttemptResult::Replied,
        ]);

        let outcome = prober(pinger.clone(), 2).probe(ADDR).await;

        assert_eq!(outcome.status, HostStatus::Dead);
        assert_eq!(pinger.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn all_timeouts_return_timed_out() {
        let pinger = ScriptedPinger::new(vec![AttemptResult::TimedOut; 3]);

        let outcome = prober(pinger.clone(), 2).probe(ADDR).await;

        assert_eq!(outcome.status, HostStatus::TimedOut);
        assert_eq!(pinger.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn last_attempt_decides_classification() {
        let pinger = ScriptedPinger::new(vec![
            AttemptResult::TimedOut,
            AttemptResult::TimedOut,
            AttemptResult::NoReply,
        ]);
        assert_eq!(prober(pinger, 2).probe(ADDR).await.status, HostStatus::Dead);

        let pinger = ScriptedPinger::new(vec![
            AttemptResult::NoReply,
            AttemptResult::NoReply,
            AttemptResult::TimedOut,
        ]);
        assert_eq!(prober(pinger, 2).probe(ADDR).await.status, HostStatus::TimedOut);
    }

    #[tokio::test(start_paused = true)]
    async fn missing_tool_is_not_retried() {
        let pinger = ScriptedPinger::new(vec![AttemptResult::ToolMissing, AttemptResult::Replied]);

        let outcome = prober(pinger.clone(), 2).probe(ADDR).await;

        assert_eq!(outcome.status, HostStatus::ToolUnavailable);
        assert_eq!(pinger.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn fault_is_not_retried() {
        let pinger = ScriptedPinger::new(vec![
            AttemptResult::NoReply,
            AttemptResult::Fault("permission denied".into()),
            AttemptResult::Replied,
        ]);

        let outcome = prober(pinger.clone(), 2).probe(ADDR).await;

        assert_eq!(outcome.status, HostStatus::Error("permission denied".into()));
        assert_eq!(pinger.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_retries_means_one_attempt() {
        let pinger = ScriptedPinger::new(vec![AttemptResult::NoReply, AttemptResult::Replied]);

        let outcome = prober(pinger.clone(), 0).probe(ADDR).await;

        assert_eq!(outcome.status, HostStatus::Dead);
        assert_eq!(pinger.calls(), 1);
    }

    #[test]
    fn policy_from_request_uses_fixed_backoff() {
        use std::str::FromStr;
        use sweepr_common::network::{range::HostRange, subnet::SubnetPrefix};

        let request = SweepRequest::new(
            SubnetPrefix::from_str("10.0.0").unwrap(),
            HostRange::new(0, 4).unwrap(),
        )
        .with_retries(4);

        let policy = RetryPolicy::from(&request);
        assert_eq!(policy.attempts(), 5);
        assert_eq!(policy.timeout, Duration::from_secs(5));
        assert_eq!(policy.backoff, RETRY_BACKOFF);
    }
}
