use std::time::Duration;

pub const DEFAULT_SUBNET: &str = "192.168.1";
pub const DEFAULT_START: u32 = 0;
pub const DEFAULT_END: u32 = 254;
pub const DEFAULT_WORKERS: usize = 20;
pub const DEFAULT_RETRIES: u32 = 2;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Delay between two attempts of the same probe.
pub const RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// Echo requests sent by a single attempt.
pub const ECHO_REQUESTS: u8 = 2;

/// Presentation flags. Does not influence what gets probed.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skips the start-up banner.
    pub no_banner: bool,
    /// `0` prints everything, `1` hides unanswered hosts, `2` prints only the summary.
    pub quiet: u8,
    /// Disables the keyboard listener used to stop a sweep early.
    pub disable_input: bool,
}
