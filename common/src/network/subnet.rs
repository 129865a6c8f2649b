//! # Subnet Prefix Model
//!
//! The first three octets of every address in a sweep.
//!
//! Accepted input formats:
//! * `192.168.1`
//! * `192.168.1.` (trailing separator)

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::InputError;

const OCTET_COUNT: usize = 3;
const MAX_OCTET_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubnetPrefix {
    octets: [u8; OCTET_COUNT],
}

impl SubnetPrefix {
    pub fn new(a: u8, b: u8, c: u8) -> Self {
        Self { octets: [a, b, c] }
    }

    pub fn octets(&self) -> [u8; OCTET_COUNT] {
        self.octets
    }

    /// Appends `host` as the last octet.
    pub fn address(&self, host: u8) -> Ipv4Addr {
        let [a, b, c] = self.octets;
        Ipv4Addr::new(a, b, c, host)
    }
}

impl FromStr for SubnetPrefix {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed.strip_suffix('.').unwrap_or(trimmed);

        let parts: Vec<&str> = body.split('.').collect();
        if parts.len() != OCTET_COUNT {
            return Err(InputError::InvalidSubnet(s.to_string()));
        }

        let mut octets = [0u8; OCTET_COUNT];
        for (slot, part) in octets.iter_mut().zip(&parts) {
            *slot = parse_octet(part, s)?;
        }

        Ok(Self { octets })
    }
}

/// Normalized form, always ending with the separator.
impl fmt::Display for SubnetPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.octets;
        write!(f, "{a}.{b}.{c}.")
    }
}

fn parse_octet(part: &str, original: &str) -> Result<u8, InputError> {
    let is_decimal = !part.is_empty()
        && part.len() <= MAX_OCTET_DIGITS
        && part.bytes().all(|b| b.is_ascii_digit());

    if !is_decimal {
        return Err(InputError::InvalidSubnet(original.to_string()));
    }

    part.parse::<u8>().map_err(|_| InputError::InvalidOctet {
        subnet: original.to_string(),
        octet: part.to_string(),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
