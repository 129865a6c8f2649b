use std::collections::{HashMap, HashSet};
use std::net::Ipv4Addr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sweepr_core::probe::{AttemptResult, Pinger};

/// Replies for a fixed set of hosts and gives `fallback` for every other one.
pub struct FakeNetwork {
    alive: HashSet<Ipv4Addr>,
    fallback: AttemptResult,
    calls: AtomicUsize,
}

impl FakeNetwork {
    pub fn new(alive: &[Ipv4Addr], fallback: AttemptResult) -> Self {
        Self {
            alive: alive.iter().copied().collect(),
            fallback,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Pinger for FakeNetwork {
    async fn attempt(&self, addr: Ipv4Addr, _timeout: Duration) -> AttemptResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.alive.contains(&addr) {
            AttemptResult::Replied
        } else {
            self.fallback.clone()
        }
    }
}

/// Every host stays silent for its first `failures` attempts, then replies.
pub struct FlakyNetwork {
    failures: usize,
    seen: Mutex<HashMap<Ipv4Addr, usize>>,
}

impl FlakyNetwork {
    pub fn new(failures: usize) -> Self {
        Self {
            failures,
            seen: Mutex::new(HashMap::new()),
        }
    }

    pub fn attempts_for(&self, addr: Ipv4Addr) -> usize {
        self.seen.lock().unwrap().get(&addr).copied().unwrap_or(0)
    }
}

#[async_trait]
impl Pinger for FlakyNetwork {
    async fn attempt(&self, addr: Ipv4Addr, _timeout: Duration) -> AttemptResult {
        let mut seen = self.seen.lock().unwrap();
        let count = seen.entry(addr).or_insert(0);
        *count += 1;
        if *count > self.failures {
            AttemptResult::Replied
        } else {
            AttemptResult::NoReply
        }
    }
}
