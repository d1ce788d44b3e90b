//! Example benchmark payloads
//!
//! Each submodule exposes a `suite()` constructor returning its benchmark
//! pairs. The payloads compare ways of representing a small object with
//! attributes; they are example workloads, not part of the runner contract.

pub mod attributes;
pub mod dispatch;
