//! Day planner CLI library.
//!
//! This crate provides the interactive shell and terminal renderers on top
//! of `dayplan-core`.

mod cli;
mod config;
pub mod render;
pub mod shell;
pub mod timefmt;

pub use cli::Cli;
pub use config::Config;
