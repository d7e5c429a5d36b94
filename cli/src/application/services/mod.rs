//! Application services — the session state machine and lifecycle engine.

pub mod lifecycle;
pub mod session;
