use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sweepr_common::error::InputError;
use sweepr_common::network::range::HostRange;
use sweepr_common::network::subnet::SubnetPrefix;
use sweepr_common::sweep::SweepRequest;
use sweepr_core::probe::{AttemptResult, SystemPinger};
use sweepr_core::sweep::Sweeper;

use super::util::{FakeNetwork, FlakyNetwork};

/// Mirrors what the CLI does with raw operator input.
fn request_from_input(subnet: &str, start: u32, end: u32, workers: usize) -> Result<SweepRequest, InputError> {
    let subnet = SubnetPrefix::from_str(subnet)?;
    let range = HostRange::non_empty(start, end)?;
    SweepRequest::new(subnet, range).with_workers(workers)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn full_subnet_sweep_adds_up() {
    let request = request_from_input("192.168.1.", 0, 254, 20).unwrap();
    let alive = [1, 10, 42, 100, 253].map(|h| Ipv4Addr::new(192, 168, 1, h));
    let network = Arc::new(FakeNetwork::new(&alive, AttemptResult::NoReply));

    let result = Sweeper::new(network.clone())
        .with_backoff(Duration::ZERO)
        .sweep(&request)
        .await;

    assert_eq!(result.alive, 5);
    assert_eq!(result.dead, 249);
    assert_eq!(result.alive + result.dead, 254);
    // 5 single attempts + 249 * (retries + 1)
    assert_eq!(network.calls(), 5 + 249 * 3);
}

#[tokio::test]
async fn any_positive_thread_count_is_accepted() {
    let request = request_from_input("127.0.0", 1, 2, usize::MAX).unwrap();
    let network = Arc::new(FakeNetwork::new(&[Ipv4Addr::new(127, 0, 0, 1)], AttemptResult::NoReply));

    let result = Sweeper::new(network.clone()).sweep(&request).await;

    assert_eq!(result.alive, 1);
    assert_eq!(network.calls(), 1);
}

#[tokio::test]
async fn invalid_input_never_reaches_the_pinger() {
    let network = Arc::new(FakeNetwork::new(&[], AttemptResult::Replied));

    let bad_subnet = request_from_input("999.1.1", 0, 10, 20);
    let bad_range = request_from_input("192.168.1", 10, 5, 20);

    assert!(matches!(bad_subnet, Err(InputError::InvalidOctet { .. })));
    assert_eq!(bad_range, Err(InputError::InvalidRange { start: 10, end: 5 }));
    assert_eq!(network.calls(), 0);
}

#[tokio::test]
async fn retries_recover_flaky_hosts() {
    let request = request_from_input("10.0.0", 0, 16, 4)
        .unwrap()
        .with_retries(2);
    let network = Arc::new(FlakyNetwork::new(2));

    let result = Sweeper::new(network.clone())
        .with_backoff(Duration::ZERO)
        .sweep(&request)
        .await;

    assert_eq!(result.alive, 16);
    assert_eq!(network.attempts_for(Ipv4Addr::new(10, 0, 0, 7)), 3);
}

#[tokio::test]
async fn too_few_retries_leave_flaky_hosts_dead() {
    let request = request_from_input("10.0.0", 0, 16, 4)
        .unwrap()
        .with_retries(1);
    let network = Arc::new(FlakyNetwork::new(2));

    let result = Sweeper::new(network.clone())
        .with_backoff(Duration::ZERO)
        .sweep(&request)
        .await;

    assert_eq!(result.alive, 0);
    assert_eq!(result.breakdown.unreachable, 16);
    assert_eq!(network.attempts_for(Ipv4Addr::new(10, 0, 0, 7)), 2);
}

#[tokio::test]
async fn timeouts_are_folded_into_dead() {
    let request = request_from_input("172.16.5", 100, 110, 3).unwrap();
    let network = Arc::new(FakeNetwork::new(&[], AttemptResult::TimedOut));

    let result = Sweeper::new(network)
        .with_backoff(Duration::ZERO)
        .sweep(&request)
        .await;

    assert_eq!(result.alive, 0);
    assert_eq!(result.dead, 10);
    assert_eq!(result.breakdown.timed_out, 10);
}

#[tokio::test]
async fn missing_ping_does_not_abort_the_sweep() {
    let request = request_from_input("127.0.0", 1, 5, 2).unwrap();
    let pinger = Arc::new(SystemPinger::with_program("sweepr-no-such-ping-binary"));

    let result = Sweeper::new(pinger).sweep(&request).await;

    assert_eq!(result.dead, 4);
    assert_eq!(result.breakdown.tool_unavailable, 4);
    assert!(!result.interrupted);
}

#[tokio::test]
#[ignore]
async fn loopback_range_answers_real_ping() {
    let request = request_from_input("127.0.0", 1, 4, 3).unwrap();

    let result = Sweeper::new(Arc::new(SystemPinger::new())).sweep(&request).await;

    assert_eq!(result.alive, 3, "result: {result:?}");
}
