//! CLI command implementations.
//!
//! This module contains the implementations for the CLI subcommands:
//! - `generate` - Generate a survey pattern and print it as JSON
//! - `position` - Resolve the drone position on a stored pattern
//! - `patterns` - List available pattern types

pub mod common;
pub mod generate;
pub mod position;

pub use generate::cmd_generate;
pub use position::cmd_position;
