//! gpuplan-cli library root.
//!
//! Exposes the command layer so integration tests can drive pricing
//! resolution and the subcommands without spawning the binary.

pub mod cli;
