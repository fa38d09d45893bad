//! CLI subcommand implementations.

pub mod classify;
pub mod export;
pub mod info;
