//! # Sweepr Core
//!
//! The sweep engine: a [`probe::Prober`] checks one address with bounded retries,
//! and the [`sweep::Sweeper`] fans probes out over a fixed-size pool and folds
//! their outcomes into a [`sweepr_common::sweep::SweepResult`].

pub mod probe;
pub mod sweep;
