//! [`Pinger`] backed by the platform `ping` executable.
//!
//! No raw sockets are opened, so no elevated privileges are needed.

use std::io;
use std::net::Ipv4Addr;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::config::ECHO_REQUESTS;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::trace;

use super::{AttemptResult, Pinger};

const PING_PROGRAM: &str = "ping";

#[cfg(target_os = "windows")]
const COUNT_FLAG: &str = "-n";
#[cfg(not(target_os = "windows"))]
const COUNT_FLAG: &str = "-c";

pub struct SystemPinger {
    program: String,
    echo_requests: u8,
}

impl Default for SystemPinger {
    fn default() -> Self {
        Self {
            program: PING_PROGRAM.to_string(),
            echo_requests: ECHO_REQUESTS,
        }
    }
}

impl SystemPinger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses another executable that understands `<count flag> <count> <address>`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    fn command(&self, addr: Ipv4Addr) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(COUNT_FLAG)
            .arg(self.echo_requests.to_string())
            .arg(addr.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the pending wait on timeout must not leave a stray ping behind.
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl Pinger for SystemPinger {
    async fn attempt(&self, addr: Ipv4Addr, limit: Duration) -> AttemptResult {
        let child = match self.command(addr).spawn() {
            Ok(child) => child,
            Err(e) => return spawn_failure(e),
        };

        match timeout(limit, child.wait_with_output()).await {
            Err(_elapsed) => AttemptResult::TimedOut,
            Ok(Err(e)) => AttemptResult::Fault(e.to_string()),
            Ok(Ok(output)) => {
                trace!(
                    address = %addr,
                    "raw ping result: {}",
                    String::from_utf8_lossy(&output.stdout).trim_end()
                );
                if output.status.success() {
                    AttemptResult::Replied
                } else {
                    AttemptResult::NoReply
                }
            }
        }
    }
}

fn spawn_failure(e: io::Error) -> AttemptResult {
    match e.kind() {
        io::ErrorKind::NotFound => AttemptResult::ToolMissing,
        _ => AttemptResult::Fault(e.to_string()),
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
