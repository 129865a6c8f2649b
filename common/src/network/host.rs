use std::fmt;
use std::net::Ipv4Addr;

/// Final classification of a probe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostStatus {
    /// An attempt got an echo reply.
    Alive,
    /// The last attempt completed without a reply.
    Dead,
    /// The last attempt exceeded its time bound.
    TimedOut,
    /// The probing executable could not be started on this machine.
    ToolUnavailable,
    /// Anything else that went wrong while probing.
    Error(String),
}

impl HostStatus {
    pub fn is_alive(&self) -> bool {
        matches!(self, HostStatus::Alive)
    }

    pub fn label(&self) -> &'static str {
        match self {
            HostStatus::Alive => "alive",
            HostStatus::Dead => "dead",
            HostStatus::TimedOut => "timeout",
            HostStatus::ToolUnavailable => "tool-unavailable",
            HostStatus::Error(_) => "error",
        }
    }
}

/// The result of probing one address, produced exactly once per address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub address: Ipv4Addr,
    pub status: HostStatus,
}

impl ProbeOutcome {
    pub fn new(address: Ipv4Addr, status: HostStatus) -> Self {
        Self { address, status }
    }

    pub fn is_alive(&self) -> bool {
        self.status.is_alive()
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addr = self.address;
        match &self.status {
            HostStatus::Alive => write!(f, "{addr} is alive"),
            HostStatus::Dead => write!(f, "{addr} did not answer"),
            HostStatus::TimedOut => write!(f, "ping timed out for {addr}"),
            HostStatus::ToolUnavailable => {
                write!(f, "ping command not found, ensure ping is installed: {addr}")
            }
            HostStatus::Error(msg) => write!(f, "error pinging {addr}: {msg}"),
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
