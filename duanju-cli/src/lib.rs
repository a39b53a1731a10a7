//! Duanju CLI library
//!
//! This library provides the command-line interface for the duanju
//! text segmentation tool.

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, CliResult};
