//! # Host Range Model
//!
//! A half-open range `[start, end)` of host octets inside a subnet prefix.
//!
//! The upper bound is capped at [`HOST_LIMIT`], so `.254` and `.255` are never generated.

use crate::error::InputError;

pub const HOST_LIMIT: u32 = 254;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostRange {
    start: u8,
    end: u8,
}

impl HostRange {
    /// Builds a range, allowing `start == end` (an empty range).
    pub fn new(start: u32, end: u32) -> Result<Self, InputError> {
        if start > end || end > HOST_LIMIT {
            return Err(InputError::InvalidRange { start, end });
        }
        Ok(Self {
            start: start as u8,
            end: end as u8,
        })
    }

    /// Builds a range from operator input, where at least one host is required.
    pub fn non_empty(start: u32, end: u32) -> Result<Self, InputError> {
        if start >= end {
            return Err(InputError::InvalidRange { start, end });
        }
        Self::new(start, end)
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    pub fn len(&self) -> usize {
        usize::from(self.end - self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u8> + Clone {
        self.start..self.end
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
