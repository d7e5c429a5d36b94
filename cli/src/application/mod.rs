//! Application layer — session orchestration over capability ports.

pub mod ports;
pub mod services;
