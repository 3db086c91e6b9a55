//! Command implementations for the CLI
//!
//! - compute / file: Compute and print a price breakdown
//! - config: Show or validate configuration

pub mod compute;
pub mod config;
