//! Server setup: configuration, shared state, and router assembly.

pub mod config;
pub mod init;
pub mod state;
