pub mod prompt;
pub mod sweep;

use clap::{ArgAction, Args, Parser};
use sweepr_common::config::{
    DEFAULT_END, DEFAULT_RETRIES, DEFAULT_START, DEFAULT_SUBNET, DEFAULT_TIMEOUT, DEFAULT_WORKERS,
};

#[derive(Parser)]
#[command(name = "sweepr", version)]
#[command(about = "A concurrent ping sweeper for IPv4 subnets.")]
pub struct CommandLine {
    #[command(flatten)]
    pub sweep: SweepArgs,

    /// Ask for the subnet, range and thread count on stdin
    #[arg(short, long)]
    pub interactive: bool,

    /// Print less (-q hides silent hosts, -qq prints only the summary)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Do not listen for 'q' to stop the sweep early
    #[arg(long)]
    pub no_input: bool,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SweepArgs {
    /// First three octets of the subnet, e.g. 192.168.1
    #[arg(default_value = DEFAULT_SUBNET)]
    pub subnet: String,

    /// First host octet to probe
    #[arg(short, long, default_value_t = DEFAULT_START)]
    pub start: u32,

    /// Host octet to stop before (at most 254)
    #[arg(short, long, default_value_t = DEFAULT_END)]
    pub end: u32,

    /// Number of probes running at once
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    pub threads: usize,

    /// Extra attempts for a host that does not answer
    #[arg(short, long, default_value_t = DEFAULT_RETRIES)]
    pub retries: u32,

    /// Seconds before a single attempt is abandoned
    #[arg(short = 'T', long, default_value_t = DEFAULT_TIMEOUT.as_secs_f64())]
    pub timeout: f64,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
