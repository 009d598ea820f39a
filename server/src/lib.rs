//! Rating-point deltas for every possible result of a two-team match.

pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod protocol;
pub mod rating;
