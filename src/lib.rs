//! Coach Thinking — sequential thinking core for the grief coaching platform.

pub mod config;
pub mod error;
pub mod screening;
pub mod server;
pub mod thinking;
