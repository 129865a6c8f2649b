//! # Sweepr Common
//!
//! Domain models shared by the sweep engine (`sweepr-core`) and the terminal
//! front-end (`sweepr-cli`).
//!
//! * **[`network`]**: subnet prefixes, host ranges and per-address probe outcomes.
//! * **[`sweep`]**: the validated [`sweep::SweepRequest`] and the aggregated [`sweep::SweepResult`].
//! * **[`config`]**: presentation flags and default values.
//! * **[`error`]**: validation errors raised before a sweep starts.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
pub mod sweep;

#[doc(hidden)]
pub use tracing;
