use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Context;
use sweepr_common::error::InputError;

use super::SweepArgs;

/// Asks for subnet, range and thread count. An empty answer keeps the current value.
pub fn ask<R, W>(args: &mut SweepArgs, input: &mut R, output: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Enter the subnet as 'xxx.xxx.xxx', followed by a host range (0-254).")?;

    if let Some(subnet) = answer(input, output, "subnet", &args.subnet)? {
        args.subnet = subnet;
    }
    if let Some(start) = answer(input, output, "start of the host range", &args.start)? {
        args.start = parse_integer(&start)?;
    }
    if let Some(end) = answer(input, output, "end of the host range", &args.end)? {
        args.end = parse_integer(&end)?;
    }
    if let Some(threads) = answer(input, output, "number of concurrent threads", &args.threads)? {
        args.threads = parse_integer(&threads)?;
    }

    Ok(())
}

fn answer<R, W, D>(input: &mut R, output: &mut W, what: &str, default: &D) -> anyhow::Result<Option<String>>
where
    R: BufRead,
    W: Write,
    D: std::fmt::Display,
{
    write!(output, "Enter the {what} (default: {default}): ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_context(|| format!("reading the {what}"))?;

    let trimmed = line.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

fn parse_integer<T: FromStr>(s: &str) -> Result<T, InputError> {
    s.parse::<T>()
        .map_err(|_| InputError::InvalidInteger(s.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
