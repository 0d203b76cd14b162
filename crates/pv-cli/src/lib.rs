//! Library side of the `proteinvista` binary.

pub mod config;
pub mod logging;
pub mod pipeline;
