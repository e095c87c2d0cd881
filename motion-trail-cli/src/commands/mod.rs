//! CLI subcommands.

pub mod common;
pub mod defaults;
pub mod render;
