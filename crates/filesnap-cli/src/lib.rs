//! filesnap-cli library
//!
//! Argument types, logging setup and the index command, exposed so the
//! binary and the integration tests share them.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::Cli;
