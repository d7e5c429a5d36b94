//! Infrastructure layer — concrete implementations of the application ports.

pub mod catalog;
pub mod config;
pub mod prompt;
pub mod provider;
